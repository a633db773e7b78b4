//! Property-based tests for the GFF3 reader/writer pair.
//!
//! Uses proptest to check the round-trip invariant over randomized models:
//! writing a model as GFF3 and re-parsing it yields the same feature
//! count, the same attribute keys/values, the same verbatim
//! score/strand/phase strings (empty stays empty), and identical sequence
//! letters.

use proptest::prelude::*;
use seqannot::{build_gff, parse_gff, AnnotatedSequence, Feature};
use std::collections::HashMap;

/// Names and sources must survive a tab-delimited line unchanged.
fn arb_token() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,9}"
}

fn arb_attributes() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map(
        "[A-Za-z_]{1,10}",
        // Values may be empty (boolean qualifiers) and may contain spaces,
        // but not the ';'/'='/tab separators.
        "[A-Za-z0-9 .]{0,12}",
        0..4,
    )
}

fn arb_score() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(".".to_string()),
        (0u32..1000u32).prop_map(|score| score.to_string()),
    ]
}

fn arb_strand() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just(".".to_string()),
    ]
}

fn arb_phase() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("0".to_string()),
        Just("1".to_string()),
        Just("2".to_string()),
    ]
}

fn arb_feature() -> impl Strategy<Value = Feature> {
    (
        arb_token(),
        arb_token(),
        arb_token(),
        1i64..1_000_000i64,
        1i64..1_000_000i64,
        arb_score(),
        arb_strand(),
        arb_phase(),
        arb_attributes(),
    )
        .prop_map(
            |(name, source, feature_type, start, end, score, strand, phase, attributes)| Feature {
                name,
                source,
                feature_type,
                start,
                end,
                score,
                strand,
                phase,
                attributes,
                ..Feature::default()
            },
        )
}

fn arb_model() -> impl Strategy<Value = AnnotatedSequence> {
    (
        arb_token(),
        prop::collection::vec(arb_feature(), 0..6),
        "[acgtACGT]{0,200}",
    )
        .prop_map(|(name, features, letters)| {
            let mut record = AnnotatedSequence::default();
            record.meta.name = name;
            record.meta.gff_version = "3".to_string();
            record.meta.region_start = 1;
            record.meta.region_end = 1000;
            record.features = features;
            record.sequence.sequence = letters;
            record
        })
}

proptest! {
    #[test]
    fn prop_gff_round_trip(original in arb_model()) {
        let reparsed = parse_gff(&build_gff(&original)).unwrap();

        prop_assert_eq!(reparsed.features.len(), original.features.len());
        for (reparsed_feature, original_feature) in
            reparsed.features.iter().zip(&original.features)
        {
            prop_assert_eq!(&reparsed_feature.name, &original_feature.name);
            prop_assert_eq!(&reparsed_feature.source, &original_feature.source);
            prop_assert_eq!(
                &reparsed_feature.feature_type,
                &original_feature.feature_type
            );
            prop_assert_eq!(reparsed_feature.start, original_feature.start);
            prop_assert_eq!(reparsed_feature.end, original_feature.end);
            prop_assert_eq!(&reparsed_feature.score, &original_feature.score);
            prop_assert_eq!(&reparsed_feature.strand, &original_feature.strand);
            prop_assert_eq!(&reparsed_feature.phase, &original_feature.phase);
            prop_assert_eq!(&reparsed_feature.attributes, &original_feature.attributes);
        }
        prop_assert_eq!(&reparsed.sequence.sequence, &original.sequence.sequence);
    }

    #[test]
    fn prop_region_line_preserved(start in 1i64..10_000, end in 1i64..10_000) {
        let mut record = AnnotatedSequence::default();
        record.meta.name = "chr1".to_string();
        record.meta.region_start = start;
        record.meta.region_end = end;

        let reparsed = parse_gff(&build_gff(&record)).unwrap();
        prop_assert_eq!(reparsed.meta.region_start, start);
        prop_assert_eq!(reparsed.meta.region_end, end);
    }
}
