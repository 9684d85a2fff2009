//! Raw row → [`Record`] normalization.
//!
//! Each field resolves through a static, prioritized alias table (first
//! present key wins, case-sensitive). Anything missing falls back to a
//! generated default: a placeholder title, a synthesized abstract, or a
//! pseudo-random citation count in the channel's historical range. The
//! RNG is injected so tests can seed it.

use astrobib_classify::{derive_year, Organism, Topic, ASSUMED_CORPUS_SIZE};
use rand::Rng;

use crate::models::{Impact, Provenance, RawRow, Record};

const TITLE_ALIASES: &[&str] = &["Title", "title", "name"];
const LINK_ALIASES: &[&str] = &["Link", "link", "TitleLink", "url"];
const MISSION_ALIASES: &[&str] = &["Mission", "mission"];
const ABSTRACT_ALIASES: &[&str] = &["Abstract", "abstract", "description"];
const CITATIONS_ALIASES: &[&str] = &["Citations"];
const IMPACT_ALIASES: &[&str] = &["Impact"];

fn resolve<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .filter_map(|k| row.get(*k))
        .map(String::as_str)
        .find(|v| !v.trim().is_empty())
}

fn synthesized_abstract(provenance: Provenance, topic: Topic, title: &str) -> String {
    match provenance {
        Provenance::NasaPublications => format!(
            "Space biology research investigating {}. This publication is part of \
             NASA's comprehensive bioscience research program.",
            topic.as_str().to_lowercase()
        ),
        Provenance::UploadedData => format!("Research data from uploaded file: {title}"),
        Provenance::Downloaded => format!("Downloaded data: {title}"),
    }
}

fn resolve_impact(row: &RawRow, provenance: Provenance, rng: &mut impl Rng) -> Impact {
    if let Some(v) = resolve(row, IMPACT_ALIASES) {
        return if v.eq_ignore_ascii_case("high") { Impact::High } else { Impact::Medium };
    }
    match provenance {
        // the primary dataset carries no impact column; coin-flip it
        Provenance::NasaPublications => {
            if rng.gen_bool(0.5) { Impact::High } else { Impact::Medium }
        }
        Provenance::UploadedData | Provenance::Downloaded => Impact::Medium,
    }
}

fn resolve_citations(row: &RawRow, provenance: Provenance, rng: &mut impl Rng) -> u32 {
    resolve(row, CITATIONS_ALIASES)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or_else(|| rng.gen_range(0..provenance.citation_ceiling()))
}

/// Normalize one raw row into a classified [`Record`].
///
/// `id_offset` must be the current store size so that
/// `id = id_offset + index + 1` stays unique across repeated batches.
/// Pure apart from the injected RNG; never touches the store.
pub fn normalize(
    row: &RawRow,
    index: usize,
    id_offset: usize,
    provenance: Provenance,
    rng: &mut impl Rng,
) -> Record {
    let title = resolve(row, TITLE_ALIASES)
        .unwrap_or(provenance.untitled())
        .to_string();
    let link = resolve(row, LINK_ALIASES).unwrap_or_default().to_string();

    let topic = Topic::classify(&title);
    let organism = Organism::classify(&title);
    let year = derive_year(&title, index, ASSUMED_CORPUS_SIZE);

    let mission = resolve(row, MISSION_ALIASES)
        .unwrap_or(provenance.default_mission())
        .to_string();
    let abstract_text = resolve(row, ABSTRACT_ALIASES)
        .map(str::to_string)
        .unwrap_or_else(|| synthesized_abstract(provenance, topic, &title));
    let citations = resolve_citations(row, provenance, rng);
    let impact = resolve_impact(row, provenance, rng);

    Record {
        id: (id_offset + index + 1) as u64,
        title,
        link,
        year,
        topic,
        organism,
        mission,
        abstract_text,
        citations,
        impact,
        source: provenance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn alias_priority_title_beats_name() {
        let mut rng = StdRng::seed_from_u64(7);
        let r = row(&[("Title", "Plant growth 2018"), ("name", "ignored")]);
        let rec = normalize(&r, 0, 0, Provenance::UploadedData, &mut rng);
        assert_eq!(rec.title, "Plant growth 2018");
        assert_eq!(rec.year, 2018);
        assert_eq!(rec.topic, Topic::PlantGrowth);
        assert_eq!(rec.organism, Organism::Arabidopsis);
    }

    #[test]
    fn missing_title_gets_channel_placeholder() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty = RawRow::new();
        let primary = normalize(&empty, 0, 0, Provenance::NasaPublications, &mut rng);
        assert_eq!(primary.title, "Untitled Publication");
        let upload = normalize(&empty, 0, 0, Provenance::UploadedData, &mut rng);
        assert_eq!(upload.title, "Untitled");
    }

    #[test]
    fn link_aliases_in_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let r = row(&[("TitleLink", "https://a"), ("url", "https://b")]);
        let rec = normalize(&r, 0, 0, Provenance::NasaPublications, &mut rng);
        assert_eq!(rec.link, "https://a");
        let rec = normalize(&row(&[]), 0, 0, Provenance::NasaPublications, &mut rng);
        assert_eq!(rec.link, "");
    }

    #[test]
    fn id_from_offset_and_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let r = row(&[("Title", "x")]);
        assert_eq!(normalize(&r, 0, 0, Provenance::NasaPublications, &mut rng).id, 1);
        assert_eq!(normalize(&r, 4, 0, Provenance::NasaPublications, &mut rng).id, 5);
        assert_eq!(normalize(&r, 0, 608, Provenance::Downloaded, &mut rng).id, 609);
    }

    #[test]
    fn synthesized_abstract_references_topic() {
        let mut rng = StdRng::seed_from_u64(7);
        let r = row(&[("Title", "Microgravity and bone loss")]);
        let rec = normalize(&r, 0, 0, Provenance::NasaPublications, &mut rng);
        assert!(rec.abstract_text.contains("microgravity effects"));
    }

    #[test]
    fn abstract_column_respected() {
        let mut rng = StdRng::seed_from_u64(7);
        let r = row(&[("Title", "x"), ("description", "supplied text")]);
        let rec = normalize(&r, 0, 0, Provenance::UploadedData, &mut rng);
        assert_eq!(rec.abstract_text, "supplied text");
    }

    #[test]
    fn citations_parse_with_random_fallback() {
        let mut rng = StdRng::seed_from_u64(42);
        let r = row(&[("Title", "x"), ("Citations", "37")]);
        assert_eq!(normalize(&r, 0, 0, Provenance::UploadedData, &mut rng).citations, 37);

        let bad = row(&[("Title", "x"), ("Citations", "lots")]);
        let rec = normalize(&bad, 0, 0, Provenance::UploadedData, &mut rng);
        assert!(rec.citations < 50);

        let rec = normalize(&row(&[("Title", "x")]), 0, 0, Provenance::NasaPublications, &mut rng);
        assert!(rec.citations < 100);
    }

    #[test]
    fn impact_column_overrides_default() {
        let mut rng = StdRng::seed_from_u64(7);
        let r = row(&[("Title", "x"), ("Impact", "High")]);
        assert_eq!(normalize(&r, 0, 0, Provenance::UploadedData, &mut rng).impact, Impact::High);
        let r = row(&[("Title", "x"), ("Impact", "Low")]);
        assert_eq!(normalize(&r, 0, 0, Provenance::UploadedData, &mut rng).impact, Impact::Medium);
        let r = row(&[("Title", "x")]);
        assert_eq!(normalize(&r, 0, 0, Provenance::Downloaded, &mut rng).impact, Impact::Medium);
    }

    #[test]
    fn mission_sentinels_per_channel() {
        let mut rng = StdRng::seed_from_u64(7);
        let r = row(&[("Title", "x")]);
        assert_eq!(normalize(&r, 0, 0, Provenance::NasaPublications, &mut rng).mission, "ISS");
        assert_eq!(normalize(&r, 0, 0, Provenance::UploadedData, &mut rng).mission, "Custom");
        assert_eq!(normalize(&r, 0, 0, Provenance::Downloaded, &mut rng).mission, "Downloaded");
        let r = row(&[("Title", "x"), ("mission", "Artemis")]);
        assert_eq!(normalize(&r, 0, 0, Provenance::UploadedData, &mut rng).mission, "Artemis");
    }

    #[test]
    fn seeded_rng_makes_synthetic_fields_reproducible() {
        let r = row(&[("Title", "x")]);
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let ra = normalize(&r, 0, 0, Provenance::NasaPublications, &mut a);
        let rb = normalize(&r, 0, 0, Provenance::NasaPublications, &mut b);
        assert_eq!(ra.citations, rb.citations);
        assert_eq!(ra.impact, rb.impact);
    }
}
