//! Deterministic local fallback answers.
//!
//! A case-insensitive keyword sniff on the query picks one of five canned
//! templates. Live publication counts come from the aggregator; the
//! illustrative domain statistics inside each template are fixed narrative
//! content carried over verbatim from the curated source material, not
//! derived from the corpus. This path must never fail.

use astrobib_classify::Topic;
use astrobib_ingestion::Record;
use astrobib_store::topic_distribution;

const FALLBACK_PREFIX: &str = "AI temporarily unavailable. Using local analysis:\n\n";

const MICROGRAVITY_FACTS: &str =
    "Bone density decreases 1-2% monthly in microgravity. Muscle atrophy 10-15% in first \
     month. Exercise countermeasures reduce loss to 3-5%. Nutritional supplements show promise.";

const RADIATION_FACTS: &str =
    "Space radiation causes DNA damage. Cancer risk 3-5% per sievert. 78% consensus on \
     mechanisms. Shielding strategies needed for Mars missions.";

const PLANT_FACTS: &str =
    "Success rates: Arabidopsis 92%, Lettuce 85%, Wheat 67%. Plants adapt to microgravity \
     within 48-72 hours. Can supplement 10-20% of crew diet.";

const GAP_FACTS: &str = "Critical: Multi-generational (20%), Mars gravity (35%)\n\
                         Moderate: Long-duration >1yr (45%)\n\
                         Well-studied: Exercise (70%), Microgravity effects (85%)";

fn topic_count(records: &[Record], topic: Topic) -> usize {
    records.iter().filter(|r| r.topic == topic).count()
}

/// Compose the local heuristic answer for a query.
pub fn local_answer(query: &str, records: &[Record]) -> String {
    let q = query.to_lowercase();
    let mut out = String::from(FALLBACK_PREFIX);

    if q.contains("microgravity") || q.contains("weightless") {
        let total = topic_count(records, Topic::MicrogravityEffects);
        out.push_str(&format!("**Microgravity Research** ({total} publications)\n\n"));
        out.push_str(MICROGRAVITY_FACTS);
    } else if q.contains("radiation") || q.contains("cosmic") {
        let total = topic_count(records, Topic::RadiationBiology);
        out.push_str(&format!("**Radiation Biology** ({total} publications)\n\n"));
        out.push_str(RADIATION_FACTS);
    } else if q.contains("plant") || q.contains("agriculture") {
        let total = topic_count(records, Topic::PlantGrowth);
        out.push_str(&format!("**Plant Growth** ({total} publications)\n\n"));
        out.push_str(PLANT_FACTS);
    } else if q.contains("gap") || q.contains("priority") {
        out.push_str(&format!("**Research Gaps** ({} publications analyzed)\n\n", records.len()));
        out.push_str(GAP_FACTS);
    } else {
        out.push_str(&format!("**Overview** ({} publications)\n\n", records.len()));
        out.push_str("Top topics:\n");
        let top: Vec<String> = topic_distribution(records)
            .iter()
            .take(5)
            .enumerate()
            .map(|(i, (topic, count))| format!("{}. {}: {}", i + 1, topic.as_str(), count))
            .collect();
        out.push_str(&top.join("\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrobib_ingestion::{normalize, Provenance, RawRow};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn corpus(titles: &[&str]) -> Vec<Record> {
        let mut rng = StdRng::seed_from_u64(5);
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let row: RawRow =
                    [("Title".to_string(), t.to_string())].into_iter().collect();
                normalize(&row, i, 0, Provenance::NasaPublications, &mut rng)
            })
            .collect()
    }

    #[test]
    fn radiation_template_reports_live_count() {
        let records = corpus(&[
            "Radiation dosimetry study",
            "Cosmic ray radiation shielding",
            "Plant growth module",
        ]);
        let answer = local_answer("what about radiation?", &records);
        assert!(answer.contains("**Radiation Biology** (2 publications)"));
        assert!(answer.contains("Cancer risk 3-5% per sievert"));
    }

    #[test]
    fn microgravity_keyword_selects_first_template() {
        let records = corpus(&["Microgravity bone study"]);
        let answer = local_answer("effects of weightlessness", &records);
        assert!(answer.contains("**Microgravity Research** (1 publications)"));
        assert!(answer.contains("Bone density decreases 1-2% monthly"));
    }

    #[test]
    fn unmatched_query_gets_top_five_overview() {
        let records = corpus(&[
            "Plant growth A",
            "Plant growth B",
            "Radiation study",
            "Microgravity study",
            "Immune response",
            "Heart rate telemetry",
            "Gene expression atlas",
        ]);
        let answer = local_answer("what do we know?", &records);
        assert!(answer.contains("**Overview** (7 publications)"));
        assert!(answer.contains("1. Plant Growth: 2"));
        // five entries at most, even with six distinct topics present
        assert!(answer.contains("5."));
        assert!(!answer.contains("6."));
    }

    #[test]
    fn gaps_template_uses_corpus_size() {
        let records = corpus(&["A", "B", "C"]);
        let answer = local_answer("research gaps and priorities", &records);
        assert!(answer.contains("**Research Gaps** (3 publications analyzed)"));
        assert!(answer.contains("Multi-generational (20%)"));
    }

    #[test]
    fn deterministic_for_same_input() {
        let records = corpus(&["Radiation study"]);
        assert_eq!(
            local_answer("radiation", &records),
            local_answer("radiation", &records)
        );
    }
}
