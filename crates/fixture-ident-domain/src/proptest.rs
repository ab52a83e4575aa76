//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - configuration hash determinism and field-order independence
//! - which fields participate in identity
//! - part number derivation never failing

use crate::config::EncoderConfig;
use crate::config_hash::{canonical_config_json, compute_config_hash};
use crate::engine::encode_batch;
use crate::model::{ConfiguredFixture, EndType, FixtureRequest, UserSegment};
use crate::output_level::{OutputLevel, closest_level};
use crate::part_number::derive_part_number;
use crate::test_support::{MemorySource, catalog};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Link values: a mix of ids known to the test catalog, unknown ids, and absent links.
fn arb_link() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(vec![
            "TEST-TEMPLATE",
            "TAPE-FS-30",
            "LENS-CLEAR",
            "MOUNT-SURFACE",
            "FINISH-01",
            "ENV-DRY",
        ])
        .prop_map(|s| Some(s.to_string())),
        prop::string::string_regex("[A-Z][A-Z0-9-]{0,15}")
            .unwrap()
            .prop_map(Some),
    ]
}

fn arb_segments() -> impl Strategy<Value = Vec<UserSegment>> {
    prop::collection::vec(1u32..5000, 1..5).prop_map(|lengths| {
        let last = lengths.len();
        lengths
            .into_iter()
            .enumerate()
            .map(|(i, mm)| UserSegment {
                segment_index: i as u32 + 1,
                requested_length_mm: mm,
                end_type: if i + 1 == last {
                    EndType::Endcap
                } else {
                    EndType::Jumper
                },
                ..UserSegment::default()
            })
            .collect()
    })
}

/// One value for each tracked field, in declaration order.
#[derive(Clone, Debug)]
struct Selections {
    links: Vec<Option<String>>,
    length_mm: Option<u32>,
}

fn arb_selections() -> impl Strategy<Value = Selections> {
    (
        prop::collection::vec(arb_link(), 10),
        prop::option::of(0u32..20_000),
    )
        .prop_map(|(links, length_mm)| Selections { links, length_mm })
}

fn arb_fixture() -> impl Strategy<Value = ConfiguredFixture> {
    (arb_selections(), any::<bool>(), arb_segments()).prop_map(|(sel, multi, segments)| {
        let mut f = ConfiguredFixture::default();
        for i in 0..11 {
            apply(&mut f, i, &sel);
        }
        f.is_multi_segment = multi;
        f.user_segments = segments;
        f
    })
}

/// Assign tracked field `i` from the selections.
fn apply(f: &mut ConfiguredFixture, i: usize, sel: &Selections) {
    let link = |n: usize| sel.links[n].clone();
    match i {
        0 => f.fixture_template = link(0),
        1 => f.tape_offering = link(1),
        2 => f.lens_appearance = link(2),
        3 => f.mounting_method = link(3),
        4 => f.finish = link(4),
        5 => f.environment_rating = link(5),
        6 => f.power_feed_type = link(6),
        7 => f.endcap_style_start = link(7),
        8 => f.endcap_style_end = link(8),
        9 => f.endcap_color = link(9),
        _ => f.requested_overall_length_mm = sel.length_mm,
    }
}

// ============================================================================
// Property tests: configuration hash
// ============================================================================

proptest! {
    /// Assigning the same values in any order yields the same digest.
    #[test]
    fn hash_is_independent_of_assignment_order(
        sel in arb_selections(),
        order in Just((0usize..11).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let mut in_order = ConfiguredFixture::default();
        for i in 0..11 {
            apply(&mut in_order, i, &sel);
        }

        let mut shuffled = ConfiguredFixture::default();
        for i in order {
            apply(&mut shuffled, i, &sel);
        }

        prop_assert_eq!(compute_config_hash(&in_order), compute_config_hash(&shuffled));
    }

    /// Separately constructed equal configurations hash and encode identically.
    #[test]
    fn equal_configurations_share_identity(f in arb_fixture()) {
        let copy: ConfiguredFixture =
            serde_json::from_value(serde_json::to_value(&f).unwrap()).unwrap();
        let cfg = EncoderConfig::default();
        let source = catalog();

        prop_assert_eq!(compute_config_hash(&f), compute_config_hash(&copy));
        prop_assert_eq!(
            derive_part_number(&f, &source, &cfg),
            derive_part_number(&copy, &source, &cfg)
        );
    }

    /// Untracked fields never participate in identity.
    #[test]
    fn untracked_fields_are_ignored(
        f in arb_fixture(),
        engine in prop::option::of("[0-9]\\.[0-9]\\.[0-9]"),
        notes in prop::option::of(".{0,40}"),
    ) {
        let mut other = f.clone();
        other.engine_version = engine;
        other.notes = notes;
        prop_assert_eq!(compute_config_hash(&f), compute_config_hash(&other));
    }

    /// Single-segment identity ignores the segment list entirely.
    #[test]
    fn single_segment_ignores_segment_list(f in arb_fixture(), segments in arb_segments()) {
        let mut a = f.clone();
        a.is_multi_segment = false;
        let mut b = a.clone();
        b.user_segments = segments;
        prop_assert_eq!(canonical_config_json(&a), canonical_config_json(&b));
    }

    /// Changing the requested length always changes the hash.
    #[test]
    fn length_change_changes_hash(f in arb_fixture(), delta in 1u32..1000) {
        let mut other = f.clone();
        other.requested_overall_length_mm = Some(f.requested_overall_length_mm.unwrap_or(0) + delta);
        prop_assert_ne!(compute_config_hash(&f), compute_config_hash(&other));
    }
}

// ============================================================================
// Property tests: part number and output selection
// ============================================================================

proptest! {
    /// Derivation never panics and always has the fixed segment layout.
    #[test]
    fn part_number_layout_is_fixed(f in arb_fixture()) {
        let pn = derive_part_number(&f, &MemorySource::new(), &EncoderConfig::default());
        let parts: Vec<&str> = pn.split('-').collect();
        let expected = if f.is_multi_segment { 11 } else { 10 };
        prop_assert_eq!(parts.len(), expected);
        prop_assert_eq!(parts[0], "ILL");
        for (i, code) in parts[1..9].iter().enumerate() {
            // Output code: empty (not a placeholder) when a tape is linked but no tiers exist.
            let has_tape = f.tape_offering.as_deref().is_some_and(|t| !t.is_empty());
            if i == 4 && has_tape {
                prop_assert_eq!(*code, "");
            } else {
                prop_assert_eq!(*code, "XX");
            }
        }
        if f.is_multi_segment {
            prop_assert_eq!(parts[10], "J");
        }
    }

    /// The selected tier is never farther from the target than any other tier, and is the
    /// first such tier in order.
    #[test]
    fn closest_level_is_first_minimum(
        values in prop::collection::vec(0u32..2000, 1..12),
        target in 0u32..2000,
    ) {
        let mut values = values;
        values.sort();
        let levels: Vec<OutputLevel> = values
            .iter()
            .enumerate()
            .map(|(i, v)| OutputLevel {
                name: format!("L{i}"),
                value: f64::from(*v),
                sku_code: Some(format!("S{i}")),
            })
            .collect();

        let target = f64::from(target);
        let chosen = closest_level(&levels, target).unwrap();
        let best = levels
            .iter()
            .map(|l| (l.value - target).abs())
            .fold(f64::INFINITY, f64::min);
        let first = levels.iter().find(|l| (l.value - target).abs() == best).unwrap();

        prop_assert_eq!(&chosen.name, &first.name);
    }

    /// Batch encoding reports exactly one unique configuration per distinct hash.
    #[test]
    fn batch_unique_count_matches_distinct_hashes(
        fixtures in prop::collection::vec(arb_fixture(), 0..8),
        repeat in 0usize..8,
    ) {
        let mut requests: Vec<FixtureRequest> = fixtures
            .iter()
            .cloned()
            .map(|fixture| FixtureRequest { label: None, fixture })
            .collect();
        if let Some(first) = requests.first().cloned() {
            for _ in 0..repeat {
                requests.push(first.clone());
            }
        }

        let outcome = encode_batch(&requests, &catalog(), &EncoderConfig::default());
        let distinct: std::collections::BTreeSet<String> =
            requests.iter().map(|r| compute_config_hash(&r.fixture)).collect();

        prop_assert_eq!(outcome.data.unique_configurations as usize, distinct.len());
        prop_assert_eq!(outcome.data.requests as usize, requests.len());
        prop_assert_eq!(
            outcome.data.reused as usize,
            requests.len() - distinct.len()
        );
    }
}
