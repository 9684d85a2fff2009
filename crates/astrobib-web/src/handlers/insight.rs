//! Free-text research question endpoint.

use astrobib_insight::AnswerKind;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::SharedState;

#[derive(Deserialize)]
pub struct InsightRequest {
    pub query: String,
}

#[derive(Serialize)]
pub struct InsightResponse {
    pub generation: u64,
    pub kind: AnswerKind,
    pub text: String,
    /// True when a newer query finished first and superseded this answer.
    pub stale: bool,
}

/// Submit a question. The responder never fails; the worst case is a
/// locally computed fallback answer. A generation token identifies each
/// submission so answers from superseded queries are flagged stale.
pub async fn submit_insight(
    State(state): State<SharedState>,
    Json(req): Json<InsightRequest>,
) -> Json<InsightResponse> {
    let generation = state.next_generation();

    // snapshot the corpus so the remote call holds no lock
    let records = state.store.read().await.all().to_vec();
    let answer = state.responder.submit_query(&req.query, &records).await;

    let accepted = state.record_answer(generation, answer.clone()).await;
    Json(InsightResponse {
        generation,
        kind: answer.kind,
        text: answer.text,
        stale: !accepted,
    })
}

/// The most recent non-superseded answer, or null before any query.
pub async fn latest_insight(State(state): State<SharedState>) -> Json<Option<InsightResponse>> {
    let latest = state.latest_answer().await.map(|(generation, answer)| InsightResponse {
        generation,
        kind: answer.kind,
        text: answer.text,
        stale: false,
    });
    Json(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrobib_insight::{QueryResponder, Summarizer, SummarizerError};
    use astrobib_store::PublicationStore;
    use crate::state::AppState;
    use std::sync::Arc;

    struct EchoSummarizer;

    #[async_trait::async_trait]
    impl Summarizer for EchoSummarizer {
        async fn summarize(&self, prompt: &str) -> Result<String, SummarizerError> {
            Ok(prompt.to_string())
        }
    }

    fn shared_state() -> SharedState {
        Arc::new(AppState::new(
            PublicationStore::new(),
            QueryResponder::new(Box::new(EchoSummarizer)),
        ))
    }

    #[tokio::test]
    async fn latest_is_null_before_any_query() {
        let state = shared_state();
        let Json(latest) = latest_insight(State(state)).await;
        assert!(latest.is_none());
    }

    #[tokio::test]
    async fn get_returns_the_submitted_answer() {
        let state = shared_state();
        let Json(submitted) = submit_insight(
            State(state.clone()),
            Json(InsightRequest { query: "bone density".into() }),
        )
        .await;
        assert!(!submitted.stale);

        let Json(latest) = latest_insight(State(state)).await;
        let latest = latest.unwrap();
        assert_eq!(latest.generation, submitted.generation);
        assert_eq!(latest.text, submitted.text);
        assert!(!latest.stale);
    }
}
