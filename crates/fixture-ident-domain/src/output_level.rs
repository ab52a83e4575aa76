//! Fixture output tier selection.
//!
//! A fixture's light output is the tape's nominal output attenuated by the lens. The result is
//! snapped to the nearest manufacturable fixture-level tier.

use crate::source::{
    AttributeSource, OrderBy, RecordQuery, lookup_number, lookup_text, value_as_number,
    value_as_text,
};
use crate::model::ConfiguredFixture;
use fixture_ident_types::ids::*;
use serde_json::json;

/// A fixture-level output tier.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputLevel {
    pub name: String,
    pub value: f64,
    pub sku_code: Option<String>,
}

/// `round(tape_value * transmission_pct / 100)`, ties to even.
pub fn fixture_output_value(tape_value: f64, transmission_pct: f64) -> f64 {
    (tape_value * (transmission_pct / 100.0)).round_ties_even()
}

/// Fixture-level tiers in ascending value order. Rows without a value count as 0.
pub fn fixture_levels<S: AttributeSource + ?Sized>(source: &S) -> Vec<OutputLevel> {
    let query = RecordQuery::new(DOCTYPE_OUTPUT_LEVEL)
        .filter(FIELD_IS_FIXTURE_LEVEL, json!(true))
        .fields(&[FIELD_NAME, FIELD_VALUE, FIELD_SKU_CODE])
        .order_by(OrderBy::asc(FIELD_VALUE));

    source
        .list_records(&query)
        .into_iter()
        .map(|r| OutputLevel {
            name: r.get(FIELD_NAME).and_then(value_as_text).unwrap_or_default(),
            value: r.get(FIELD_VALUE).and_then(value_as_number).unwrap_or(0.0),
            sku_code: r.get(FIELD_SKU_CODE).and_then(value_as_text),
        })
        .collect()
}

/// The tier numerically closest to `target`. On equal distance the earliest tier wins.
pub fn closest_level(levels: &[OutputLevel], target: f64) -> Option<&OutputLevel> {
    levels
        .iter()
        .min_by(|a, b| (a.value - target).abs().total_cmp(&(b.value - target).abs()))
}

/// The output segment code for a fixture.
///
/// `None` when the fixture has no tape offering (the caller renders a placeholder).
/// `Some("")` when there are no fixture-level tiers or the chosen tier has no SKU code.
pub fn fixture_output_code<S: AttributeSource + ?Sized>(
    fixture: &ConfiguredFixture,
    source: &S,
) -> Option<String> {
    let tape = fixture.tape_offering.as_deref().filter(|t| !t.is_empty())?;

    let output_level = lookup_text(source, DOCTYPE_TAPE_OFFERING, Some(tape), FIELD_OUTPUT_LEVEL);
    let tape_value = lookup_number(
        source,
        DOCTYPE_OUTPUT_LEVEL,
        output_level.as_deref(),
        FIELD_VALUE,
    )
    .unwrap_or(0.0);
    let transmission = lookup_number(
        source,
        DOCTYPE_LENS_APPEARANCE,
        fixture.lens_appearance.as_deref(),
        FIELD_TRANSMISSION,
    )
    // A zero transmission is an unset field, not an opaque lens.
    .filter(|t| *t != 0.0)
    .unwrap_or(100.0);

    let target = fixture_output_value(tape_value, transmission);
    let levels = fixture_levels(source);
    let code = match closest_level(&levels, target) {
        Some(level) => {
            tracing::debug!(
                target_value = target,
                level = %level.name,
                level_value = level.value,
                "selected fixture output level"
            );
            level.sku_code.clone().unwrap_or_default()
        }
        None => {
            tracing::debug!(target_value = target, "no fixture-level output levels");
            String::new()
        }
    };
    Some(code)
}
