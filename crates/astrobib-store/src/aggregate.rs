//! Aggregate views over a store snapshot.
//!
//! All functions here are pure reads: they take a record slice and never
//! mutate anything. Distribution ordering is count-descending with ties
//! kept in first-encountered (insertion) order, which the presentation
//! layer relies on for stable chart ordering.

use std::collections::BTreeMap;

use astrobib_classify::{Organism, Topic};
use astrobib_ingestion::{Impact, Record};

/// Count occurrences keyed by `key`, preserving first-encounter order for
/// ties, then sort by count descending (stable sort).
fn distribution<K, F>(records: &[Record], key: F) -> Vec<(K, usize)>
where
    K: PartialEq,
    F: Fn(&Record) -> K,
{
    let mut counts: Vec<(K, usize)> = Vec::new();
    for record in records {
        let k = key(record);
        match counts.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, n)) => *n += 1,
            None => counts.push((k, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Topic frequency, count-descending.
pub fn topic_distribution(records: &[Record]) -> Vec<(Topic, usize)> {
    distribution(records, |r| r.topic)
}

/// Organism frequency, count-descending.
pub fn organism_distribution(records: &[Record]) -> Vec<(Organism, usize)> {
    distribution(records, |r| r.organism)
}

/// Publication counts per year, ascending by year.
pub fn yearly_trend(records: &[Record]) -> Vec<(i32, usize)> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for record in records {
        *years.entry(record.year).or_insert(0) += 1;
    }
    years.into_iter().collect()
}

/// Records tagged high impact.
pub fn high_impact_count(records: &[Record]) -> usize {
    records.iter().filter(|r| r.impact == Impact::High).count()
}

/// Combinable search predicates; every supplied predicate must hold.
/// Absent predicates are no-ops, so an empty filter returns everything.
#[derive(Debug, Default, Clone)]
pub struct RecordFilter {
    /// Case-insensitive substring match against title or topic label.
    pub text: Option<String>,
    pub topic: Option<Topic>,
    pub organism: Option<Organism>,
    pub year: Option<i32>,
}

/// AND-composed filter preserving store order. No result-size cap is
/// imposed here; truncation is the presentation layer's business.
pub fn filter<'a>(records: &'a [Record], query: &RecordFilter) -> Vec<&'a Record> {
    let needle = query.text.as_deref().map(str::to_lowercase);
    records
        .iter()
        .filter(|r| {
            let text_ok = match &needle {
                Some(q) if !q.is_empty() => {
                    r.title.to_lowercase().contains(q)
                        || r.topic.as_str().to_lowercase().contains(q)
                }
                _ => true,
            };
            text_ok
                && query.topic.map_or(true, |t| r.topic == t)
                && query.organism.map_or(true, |o| r.organism == o)
                && query.year.map_or(true, |y| r.year == y)
        })
        .collect()
}

/// Sorted distinct topic labels present in the corpus (filter dropdown).
pub fn distinct_topics(records: &[Record]) -> Vec<Topic> {
    let mut topics: Vec<Topic> = Vec::new();
    for r in records {
        if !topics.contains(&r.topic) {
            topics.push(r.topic);
        }
    }
    topics.sort_by_key(|t| t.as_str());
    topics
}

/// Sorted distinct organism labels present in the corpus.
pub fn distinct_organisms(records: &[Record]) -> Vec<Organism> {
    let mut organisms: Vec<Organism> = Vec::new();
    for r in records {
        if !organisms.contains(&r.organism) {
            organisms.push(r.organism);
        }
    }
    organisms.sort_by_key(|o| o.as_str());
    organisms
}

/// Distinct years, newest first.
pub fn distinct_years(records: &[Record]) -> Vec<i32> {
    let mut years: Vec<i32> = Vec::new();
    for r in records {
        if !years.contains(&r.year) {
            years.push(r.year);
        }
    }
    years.sort_unstable_by(|a, b| b.cmp(a));
    years
}
