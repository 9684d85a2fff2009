//! Publication search/filter endpoints.

use astrobib_classify::{Organism, Topic};
use astrobib_ingestion::Record;
use astrobib_store::{distinct_organisms, distinct_topics, distinct_years, filter, RecordFilter};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub text: Option<String>,
    pub topic: Option<String>,
    pub organism: Option<String>,
    pub year: Option<String>,
}

/// Interpret a UI filter value: absent or "all" means no predicate.
fn effective(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty() && *v != "all")
}

pub async fn list_publications(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Record>> {
    let store = state.store.read().await;
    let records = store.all();

    // An unknown label can never equal a closed-set label, so it matches
    // nothing rather than being ignored.
    let topic = match effective(&params.topic) {
        Some(label) => match Topic::from_label(label) {
            Some(t) => Some(t),
            None => return Json(Vec::new()),
        },
        None => None,
    };
    let organism = match effective(&params.organism) {
        Some(label) => match Organism::from_label(label) {
            Some(o) => Some(o),
            None => return Json(Vec::new()),
        },
        None => None,
    };
    let year = match effective(&params.year) {
        Some(v) => match v.parse::<i32>() {
            Ok(y) => Some(y),
            Err(_) => return Json(Vec::new()),
        },
        None => None,
    };

    let query = RecordFilter {
        text: effective(&params.text).map(str::to_string),
        topic,
        organism,
        year,
    };
    let hits: Vec<Record> = filter(records, &query).into_iter().cloned().collect();
    Json(hits)
}

#[derive(Serialize)]
pub struct FilterOptions {
    pub topics: Vec<&'static str>,
    pub organisms: Vec<&'static str>,
    pub years: Vec<i32>,
}

/// Distinct filter dropdown options derived from the corpus.
pub async fn filter_options(State(state): State<SharedState>) -> Json<FilterOptions> {
    let store = state.store.read().await;
    let records = store.all();
    Json(FilterOptions {
        topics: distinct_topics(records).into_iter().map(|t| t.as_str()).collect(),
        organisms: distinct_organisms(records).into_iter().map(|o| o.as_str()).collect(),
        years: distinct_years(records),
    })
}
