//! Shared application state for the web server.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use astrobib_insight::{InsightAnswer, QueryResponder};
use astrobib_store::PublicationStore;
use tokio::sync::RwLock;

/// Shared state injected into every Axum handler.
///
/// The store is write-rare/read-many: writers hold the lock for the whole
/// merge so a batch becomes visible all-or-nothing. Insight queries carry
/// a generation token; a query finishing after a newer one was issued is
/// recorded as stale instead of clobbering the latest answer.
pub struct AppState {
    pub store: RwLock<PublicationStore>,
    pub responder: QueryResponder,
    query_generation: AtomicU64,
    latest_answer: RwLock<Option<(u64, InsightAnswer)>>,
}

impl AppState {
    pub fn new(store: PublicationStore, responder: QueryResponder) -> Self {
        Self {
            store: RwLock::new(store),
            responder,
            query_generation: AtomicU64::new(0),
            latest_answer: RwLock::new(None),
        }
    }

    /// Claim the next query generation token.
    pub fn next_generation(&self) -> u64 {
        self.query_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Record a finished answer unless a newer generation already landed.
    /// Returns false when the answer was stale and dropped.
    pub async fn record_answer(&self, generation: u64, answer: InsightAnswer) -> bool {
        let mut latest = self.latest_answer.write().await;
        match &*latest {
            Some((stored, _)) if *stored > generation => false,
            _ => {
                *latest = Some((generation, answer));
                true
            }
        }
    }

    pub async fn latest_answer(&self) -> Option<(u64, InsightAnswer)> {
        self.latest_answer.read().await.clone()
    }
}

pub type SharedState = Arc<AppState>;
