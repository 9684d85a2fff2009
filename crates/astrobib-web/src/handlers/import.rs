//! Secondary ingestion endpoints: CSV upload and URL download.

use astrobib_ingestion::pipeline::build_batch;
use astrobib_ingestion::{csv_source, Provenance};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::SharedState;

#[derive(Serialize)]
pub struct ImportResponse {
    pub merged: usize,
    pub total: usize,
}

/// Merge an uploaded CSV body into the store. The batch is fully built
/// under the write lock so ids stay collision-free against concurrent
/// imports and readers never see a partial merge.
pub async fn import_csv(
    State(state): State<SharedState>,
    body: String,
) -> Result<Json<ImportResponse>, (StatusCode, String)> {
    merge_text(&state, &body, Provenance::UploadedData).await
}

#[derive(Deserialize)]
pub struct UrlImportRequest {
    pub url: String,
}

/// Fetch a CSV document from a URL and merge it.
pub async fn import_url(
    State(state): State<SharedState>,
    Json(req): Json<UrlImportRequest>,
) -> Result<Json<ImportResponse>, (StatusCode, String)> {
    let text = csv_source::fetch_csv(&req.url).await.map_err(|e| {
        warn!(url = %req.url, error = %e, "CSV download failed");
        (StatusCode::BAD_GATEWAY, format!("failed to download CSV: {e}"))
    })?;
    merge_text(&state, &text, Provenance::Downloaded).await
}

async fn merge_text(
    state: &SharedState,
    text: &str,
    channel: Provenance,
) -> Result<Json<ImportResponse>, (StatusCode, String)> {
    let mut store = state.store.write().await;
    let mut rng = StdRng::from_entropy();
    let batch = build_batch(text, store.len(), channel, &mut rng).map_err(|e| {
        warn!(channel = channel.as_str(), error = %e, "CSV import failed");
        (StatusCode::UNPROCESSABLE_ENTITY, format!("failed to parse CSV: {e}"))
    })?;
    let merged = batch.len();
    store.append(batch);
    Ok(Json(ImportResponse { merged, total: store.len() }))
}
