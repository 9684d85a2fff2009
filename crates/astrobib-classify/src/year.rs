//! Publication-year derivation.

use lazy_static::lazy_static;
use regex::Regex;

/// Assumed size of the primary corpus, used to spread index-derived
/// fallback years across the window when a title carries no year.
pub const ASSUMED_CORPUS_SIZE: usize = 608;

/// First year of the synthetic fallback window.
const BASE_YEAR: i32 = 2010;

/// Width of the synthetic fallback window in years.
const YEAR_SPAN: i32 = 14;

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"\b(19|20)\d{2}\b").expect("year regex is valid");
}

/// Extract a 4-digit year from the title, or synthesize one by spreading
/// `index` linearly across a 14-year window starting at 2010.
///
/// The fallback is a deliberate approximation: it assumes the caller's
/// corpus is roughly `corpus_size_hint` records, so batches of a different
/// size get a skewed spread. Extraction from the title is always exact.
pub fn derive_year(title: &str, index: usize, corpus_size_hint: usize) -> i32 {
    if let Some(m) = YEAR_RE.find(title) {
        if let Ok(year) = m.as_str().parse::<i32>() {
            return year;
        }
    }
    let hint = corpus_size_hint.max(1);
    BASE_YEAR + ((index as f64 / hint as f64) * f64::from(YEAR_SPAN)).floor() as i32
}
