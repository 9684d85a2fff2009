//! astrobib-common — Shared error type used across all astrobib crates.

pub mod error;

pub use error::{AstrobibError, Result};
