//! Dashboard statistics endpoint.

use astrobib_store::{
    high_impact_count, organism_distribution, topic_distribution, yearly_trend,
};
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Serialize)]
pub struct CountEntry {
    pub name: String,
    pub value: usize,
}

#[derive(Serialize)]
pub struct YearEntry {
    pub year: i32,
    pub count: usize,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_publications: usize,
    pub topic_count: usize,
    pub organism_count: usize,
    pub high_impact: usize,
    pub topics: Vec<CountEntry>,
    pub organisms: Vec<CountEntry>,
    pub yearly: Vec<YearEntry>,
}

pub async fn get_stats(State(state): State<SharedState>) -> Json<StatsResponse> {
    let store = state.store.read().await;
    let records = store.all();

    let topics: Vec<CountEntry> = topic_distribution(records)
        .into_iter()
        .map(|(t, value)| CountEntry { name: t.as_str().to_string(), value })
        .collect();
    let organisms: Vec<CountEntry> = organism_distribution(records)
        .into_iter()
        .map(|(o, value)| CountEntry { name: o.as_str().to_string(), value })
        .collect();
    let yearly: Vec<YearEntry> = yearly_trend(records)
        .into_iter()
        .map(|(year, count)| YearEntry { year, count })
        .collect();

    Json(StatsResponse {
        total_publications: records.len(),
        topic_count: topics.len(),
        organism_count: organisms.len(),
        high_impact: high_impact_count(records),
        topics,
        organisms,
        yearly,
    })
}
