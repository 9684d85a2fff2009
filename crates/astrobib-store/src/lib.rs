//! astrobib-store — append-only record store and aggregate views.

pub mod aggregate;
pub mod repository;

pub use aggregate::{
    distinct_organisms, distinct_topics, distinct_years, filter, high_impact_count,
    organism_distribution, topic_distribution, yearly_trend, RecordFilter,
};
pub use repository::PublicationStore;
