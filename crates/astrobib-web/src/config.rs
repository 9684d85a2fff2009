//! Configuration loading.
//! Reads astrobib.toml from the current directory or the path in the
//! ASTROBIB_CONFIG env var; a missing file means defaults. The remote
//! summarizer's bearer token comes from the environment (variable name
//! configurable), never from the file itself.

use astrobib_common::{AstrobibError, Result};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ingestion: IngestionConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Path of the bundled primary dataset.
    #[serde(default = "default_primary_csv")]
    pub primary_csv: String,
}

fn default_primary_csv() -> String { "data/SB_publication_PMC.csv".to_string() }

impl Default for IngestionConfig {
    fn default() -> Self {
        Self { primary_csv: default_primary_csv() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Name of the env var holding the bearer token.
    #[serde(default = "default_token_env")]
    pub api_token_env: String,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_min_length")]
    pub min_length: u32,
}

fn default_endpoint() -> String { astrobib_insight::backend::DEFAULT_ENDPOINT.to_string() }
fn default_token_env() -> String { "HF_API_TOKEN".to_string() }
fn default_max_length() -> u32 { 300 }
fn default_min_length() -> u32 { 100 }

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_token_env: default_token_env(),
            max_length: default_max_length(),
            min_length: default_min_length(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let path = std::env::var("ASTROBIB_CONFIG").unwrap_or_else(|_| "astrobib.toml".to_string());
        if !Path::new(&path).exists() {
            info!(path, "no config file found, using defaults");
            return Ok(Config::default());
        }
        let text = std::fs::read_to_string(&path)
            .map_err(|e| AstrobibError::Config(format!("cannot read {path}: {e}")))?;
        let config: Config = toml::from_str(&text)
            .map_err(|e| AstrobibError::Config(format!("cannot parse {path}: {e}")))?;
        info!(path, "loaded configuration");
        Ok(config)
    }

    /// Resolve the summarizer bearer token from the configured env var.
    pub fn api_token(&self) -> Option<SecretString> {
        std::env::var(&self.summarizer.api_token_env)
            .ok()
            .filter(|v| !v.is_empty())
            .map(SecretString::from)
    }
}
