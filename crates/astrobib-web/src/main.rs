//! astrobib web server.
//!
//! Run with: cargo run -p astrobib-web

use std::net::SocketAddr;
use std::path::Path;

use astrobib_insight::{BartSummarizer, QueryResponder};
use astrobib_store::PublicationStore;
use astrobib_web::config::Config;
use astrobib_web::router::build_router;
use astrobib_web::state::AppState;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load()?;

    // Primary dataset load; a missing file starts an empty store.
    let mut store = PublicationStore::new();
    let mut rng = StdRng::from_entropy();
    let batch =
        astrobib_ingestion::pipeline::load_primary(Path::new(&config.ingestion.primary_csv), &mut rng);
    store.append(batch);
    info!(publications = store.len(), "primary dataset loaded");

    let summarizer = BartSummarizer::new(config.summarizer.endpoint.clone(), config.api_token())
        .with_length_bounds(config.summarizer.min_length, config.summarizer.max_length);
    let responder = QueryResponder::new(Box::new(summarizer));

    let app = build_router(AppState::new(store, responder));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("server listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
