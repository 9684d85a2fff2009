//! End-to-end CSV ingestion tests: decode, normalize, classify.

use astrobib_classify::{Organism, Topic};
use astrobib_ingestion::pipeline::build_batch;
use astrobib_ingestion::{Impact, Provenance};
use rand::rngs::StdRng;
use rand::SeedableRng;

const PRIMARY_CSV: &str = "\
Title,Link
Microgravity effects on mice bone density 2015,https://pmc.example/1
Arabidopsis plant growth aboard the ISS,https://pmc.example/2
Radiation dosimetry survey,
";

#[test]
fn primary_batch_is_classified_and_defaulted() {
    let mut rng = StdRng::seed_from_u64(21);
    let batch = build_batch(PRIMARY_CSV, 0, Provenance::NasaPublications, &mut rng).unwrap();
    assert_eq!(batch.len(), 3);

    let first = &batch[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.topic, Topic::MicrogravityEffects);
    assert_eq!(first.organism, Organism::Mouse);
    assert_eq!(first.year, 2015);
    assert_eq!(first.mission, "ISS");
    assert_eq!(first.source, Provenance::NasaPublications);
    assert!(first.abstract_text.contains("microgravity effects"));

    let second = &batch[1];
    assert_eq!(second.topic, Topic::PlantGrowth);
    assert_eq!(second.organism, Organism::Arabidopsis);

    let third = &batch[2];
    assert_eq!(third.topic, Topic::RadiationBiology);
    assert_eq!(third.link, "");
    // no year token: index 2 of hinted 608 floors to the window start
    assert_eq!(third.year, 2010);
}

#[test]
fn secondary_batch_respects_extra_columns() {
    const UPLOAD_CSV: &str = "\
title,url,Mission,description,Citations,Impact
Yeast cultures in orbit,https://up.example/1,Artemis,Supplied abstract,12,High
Bacteria growth profile,,,,not-a-number,
";
    let mut rng = StdRng::seed_from_u64(22);
    let batch = build_batch(UPLOAD_CSV, 608, Provenance::UploadedData, &mut rng).unwrap();
    assert_eq!(batch.len(), 2);

    let first = &batch[0];
    assert_eq!(first.id, 609);
    assert_eq!(first.mission, "Artemis");
    assert_eq!(first.abstract_text, "Supplied abstract");
    assert_eq!(first.citations, 12);
    assert_eq!(first.impact, Impact::High);
    assert_eq!(first.organism, Organism::Yeast);
    assert_eq!(first.source, Provenance::UploadedData);

    let second = &batch[1];
    assert_eq!(second.id, 610);
    assert_eq!(second.mission, "Custom");
    assert!(second.abstract_text.contains("Research data from uploaded file"));
    assert!(second.citations < 50); // unparsable citations fall back to random
    assert_eq!(second.impact, Impact::Medium);
}

#[test]
fn repeated_batches_never_collide_ids() {
    let mut rng = StdRng::seed_from_u64(23);
    let first = build_batch(PRIMARY_CSV, 0, Provenance::NasaPublications, &mut rng).unwrap();
    let second = build_batch(PRIMARY_CSV, first.len(), Provenance::Downloaded, &mut rng).unwrap();

    let mut ids: Vec<u64> =
        first.iter().chain(second.iter()).map(|r| r.id).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
    assert!(second.iter().all(|r| r.id > first.len() as u64));
}

#[test]
fn classification_is_deterministic_across_batches() {
    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(2);
    let a = build_batch(PRIMARY_CSV, 0, Provenance::NasaPublications, &mut rng_a).unwrap();
    let b = build_batch(PRIMARY_CSV, 0, Provenance::NasaPublications, &mut rng_b).unwrap();
    // different RNG seeds only perturb synthetic fields, never classification
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.topic, y.topic);
        assert_eq!(x.organism, y.organism);
        assert_eq!(x.year, y.year);
        assert_eq!(x.title, y.title);
    }
}
