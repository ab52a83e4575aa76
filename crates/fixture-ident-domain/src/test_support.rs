use crate::model::ConfiguredFixture;
use crate::source::{AttributeSource, Direction, Record, RecordQuery, value_as_number};
use fixture_ident_types::ids::*;
use serde_json::{Value, json};
use std::cmp::Ordering;

/// Insertion-ordered in-memory reference tables.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    rows: Vec<(String, String, Record)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, doctype: &str, id: &str, fields: &[(&str, Value)]) -> Self {
        let mut record = Record::new();
        record.insert(FIELD_NAME.to_string(), json!(id));
        for (k, v) in fields {
            record.insert((*k).to_string(), v.clone());
        }
        self.rows.push((doctype.to_string(), id.to_string(), record));
        self
    }

    pub fn with_output_level(self, id: &str, value: f64, sku: &str, fixture_level: bool) -> Self {
        self.with(
            DOCTYPE_OUTPUT_LEVEL,
            id,
            &[
                (FIELD_VALUE, json!(value)),
                (FIELD_SKU_CODE, json!(sku)),
                (FIELD_IS_FIXTURE_LEVEL, json!(fixture_level)),
            ],
        )
    }
}

impl AttributeSource for MemorySource {
    fn lookup_field(&self, doctype: &str, record_id: &str, field: &str) -> Option<Value> {
        self.rows
            .iter()
            .find(|(d, id, _)| d == doctype && id == record_id)
            .and_then(|(_, _, r)| r.get(field).cloned())
            .filter(|v| !v.is_null())
    }

    fn list_records(&self, query: &RecordQuery<'_>) -> Vec<Record> {
        let mut out: Vec<Record> = self
            .rows
            .iter()
            .filter(|(d, _, _)| d == query.doctype)
            .filter(|(_, _, r)| {
                query
                    .filters
                    .iter()
                    .all(|(f, v)| r.get(*f) == Some(v))
            })
            .map(|(_, _, r)| r.clone())
            .collect();

        if let Some(order) = query.order_by {
            out.sort_by(|a, b| {
                let av = a.get(order.field).and_then(value_as_number);
                let bv = b.get(order.field).and_then(value_as_number);
                let ord = av
                    .unwrap_or(0.0)
                    .partial_cmp(&bv.unwrap_or(0.0))
                    .unwrap_or(Ordering::Equal);
                match order.direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            });
        }
        out
    }
}

/// The reference data used across encoder tests.
///
/// Template `TEST-TEMPLATE` (SH01), tape `TAPE-FS-30` (FS, 3000K -> 30, 800 lm),
/// lens `LENS-CLEAR` (MC, 75%), mounting `MOUNT-SURFACE` (SV), finish `FINISH-01` (WH),
/// environment `ENV-DRY` (I), fixture-level output tiers 500/M and 600/H, and feed
/// directions End/E, Back/B, Left/L.
pub fn catalog() -> MemorySource {
    MemorySource::new()
        .with(
            DOCTYPE_FIXTURE_TEMPLATE,
            "TEST-TEMPLATE",
            &[(FIELD_DEFAULT_PROFILE_FAMILY, json!("SH01"))],
        )
        .with(
            DOCTYPE_TAPE_OFFERING,
            "TAPE-FS-30",
            &[
                (FIELD_LED_PACKAGE, json!("FS")),
                (FIELD_CCT, json!("3000K")),
                (FIELD_OUTPUT_LEVEL, json!("OL-800")),
            ],
        )
        .with(DOCTYPE_CCT, "3000K", &[(FIELD_CODE, json!("30"))])
        .with(
            DOCTYPE_LENS_APPEARANCE,
            "LENS-CLEAR",
            &[(FIELD_CODE, json!("MC")), (FIELD_TRANSMISSION, json!(75))],
        )
        .with(DOCTYPE_MOUNTING_METHOD, "MOUNT-SURFACE", &[(FIELD_CODE, json!("SV"))])
        .with(DOCTYPE_FINISH, "FINISH-01", &[(FIELD_CODE, json!("WH"))])
        .with(DOCTYPE_ENVIRONMENT_RATING, "ENV-DRY", &[(FIELD_CODE, json!("I"))])
        .with_output_level("OL-800", 800.0, "800", false)
        .with_output_level("FL-500", 500.0, "M", true)
        .with_output_level("FL-600", 600.0, "H", true)
        .with(DOCTYPE_FEED_DIRECTION, "End", &[(FIELD_CODE, json!("E"))])
        .with(DOCTYPE_FEED_DIRECTION, "Back", &[(FIELD_CODE, json!("B"))])
        .with(DOCTYPE_FEED_DIRECTION, "Left", &[(FIELD_CODE, json!("L"))])
}

/// A fully linked single-segment fixture against [`catalog`].
pub fn fixture() -> ConfiguredFixture {
    ConfiguredFixture {
        fixture_template: Some("TEST-TEMPLATE".to_string()),
        tape_offering: Some("TAPE-FS-30".to_string()),
        lens_appearance: Some("LENS-CLEAR".to_string()),
        mounting_method: Some("MOUNT-SURFACE".to_string()),
        finish: Some("FINISH-01".to_string()),
        environment_rating: Some("ENV-DRY".to_string()),
        power_feed_type: Some("END".to_string()),
        endcap_style_start: Some("FLAT".to_string()),
        endcap_style_end: Some("FLAT".to_string()),
        endcap_color: Some("ENDCAP-WHITE".to_string()),
        requested_overall_length_mm: Some(1000),
        ..ConfiguredFixture::default()
    }
}
