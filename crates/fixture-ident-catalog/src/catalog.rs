use fixture_ident_domain::source::{
    AttributeSource, Direction, Record, RecordQuery, value_as_number,
};
use fixture_ident_types::ids::FIELD_NAME;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// In-memory reference tables keyed by doctype, then record id.
///
/// Natural row order within a table is record-id order, which keeps scans deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    tables: BTreeMap<String, BTreeMap<String, Record>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a record. `name` is always set to the record id.
    pub fn insert(&mut self, doctype: &str, id: &str, mut fields: Record) {
        fields.insert(FIELD_NAME.to_string(), Value::String(id.to_string()));
        self.tables
            .entry(doctype.to_string())
            .or_default()
            .insert(id.to_string(), fields);
    }

    pub fn table_len(&self, doctype: &str) -> usize {
        self.tables.get(doctype).map_or(0, BTreeMap::len)
    }

    pub fn record_count(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    pub fn doctypes(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl AttributeSource for Catalog {
    fn lookup_field(&self, doctype: &str, record_id: &str, field: &str) -> Option<Value> {
        self.tables
            .get(doctype)?
            .get(record_id)?
            .get(field)
            .filter(|v| !v.is_null())
            .cloned()
    }

    fn list_records(&self, query: &RecordQuery<'_>) -> Vec<Record> {
        let Some(table) = self.tables.get(query.doctype) else {
            return Vec::new();
        };

        let mut rows: Vec<&Record> = table
            .values()
            .filter(|r| {
                query
                    .filters
                    .iter()
                    .all(|(f, want)| values_match(r.get(*f), want))
            })
            .collect();

        if let Some(order) = query.order_by {
            // Stable: equal keys keep record-id order.
            rows.sort_by(|a, b| {
                let ord = compare_values(a.get(order.field), b.get(order.field));
                match order.direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            });
        }

        rows.into_iter().map(|r| project(r, &query.fields)).collect()
    }
}

fn project(record: &Record, fields: &[&str]) -> Record {
    if fields.is_empty() {
        return record.clone();
    }
    let mut out = Record::new();
    for f in fields.iter().copied().chain(std::iter::once(FIELD_NAME)) {
        if let Some(v) = record.get(f) {
            out.insert(f.to_string(), v.clone());
        }
    }
    out
}

/// Check fields are stored as `true`/`false` or `1`/`0`; both spellings match either filter.
fn values_match(actual: Option<&Value>, want: &Value) -> bool {
    let Some(actual) = actual else {
        return want.is_null();
    };
    match (actual, want) {
        (Value::Bool(a), Value::Number(n)) | (Value::Number(n), Value::Bool(a)) => {
            n.as_f64() == Some(if *a { 1.0 } else { 0.0 })
        }
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => actual == want,
    }
}

/// Numeric comparison, with numeric strings read as numbers. Values with no numeric reading
/// (missing, null, free text) sort before every number and compare equal among themselves.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.and_then(value_as_number);
    let b = b.and_then(value_as_number);
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_ident_domain::model::ConfiguredFixture;
    use fixture_ident_domain::output_level::fixture_output_code;
    use fixture_ident_domain::source::OrderBy;
    use fixture_ident_types::ids::*;
    use serde_json::json;

    fn rec(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn levels() -> Catalog {
        let mut c = Catalog::new();
        c.insert("OL", "a", rec(&[("value", json!(600)), ("flag", json!(1))]));
        c.insert("OL", "b", rec(&[("value", json!(500)), ("flag", json!(true))]));
        c.insert("OL", "c", rec(&[("value", json!(600)), ("flag", json!(1))]));
        c.insert("OL", "d", rec(&[("value", json!(100)), ("flag", json!(0))]));
        c.insert("OL", "e", rec(&[("flag", json!(1))]));
        c
    }

    fn names(rows: &[Record]) -> Vec<&str> {
        rows.iter()
            .map(|r| r.get("name").and_then(Value::as_str).unwrap_or(""))
            .collect()
    }

    #[test]
    fn lookup_sets_name_and_hides_nulls() {
        let mut c = Catalog::new();
        c.insert("T", "x", rec(&[("code", json!("MC")), ("gone", Value::Null)]));

        assert_eq!(c.lookup_field("T", "x", "code"), Some(json!("MC")));
        assert_eq!(c.lookup_field("T", "x", "name"), Some(json!("x")));
        assert_eq!(c.lookup_field("T", "x", "gone"), None);
        assert_eq!(c.lookup_field("T", "y", "code"), None);
        assert_eq!(c.lookup_field("U", "x", "code"), None);
    }

    #[test]
    fn bool_and_numeric_flags_match_either_filter() {
        let c = levels();
        let q = RecordQuery::new("OL").filter("flag", json!(true));
        assert_eq!(names(&c.list_records(&q)), vec!["a", "b", "c", "e"]);

        let q = RecordQuery::new("OL").filter("flag", json!(0));
        assert_eq!(names(&c.list_records(&q)), vec!["d"]);
    }

    #[test]
    fn ascending_order_is_stable_with_missing_first() {
        let c = levels();
        let q = RecordQuery::new("OL")
            .filter("flag", json!(true))
            .order_by(OrderBy::asc("value"));
        assert_eq!(names(&c.list_records(&q)), vec!["e", "b", "a", "c"]);
    }

    #[test]
    fn descending_order_reverses_keys() {
        let c = levels();
        let q = RecordQuery::new("OL").order_by(OrderBy {
            field: "value",
            direction: Direction::Descending,
        });
        assert_eq!(names(&c.list_records(&q)), vec!["a", "c", "b", "d", "e"]);
    }

    #[test]
    fn numeric_strings_sort_among_numbers() {
        let mut c = Catalog::new();
        c.insert("OL", "a", rec(&[("value", json!("500"))]));
        c.insert("OL", "b", rec(&[("value", json!(600))]));
        c.insert("OL", "c", rec(&[("value", json!("75.5"))]));
        c.insert("OL", "d", rec(&[("value", json!("n/a"))]));

        let q = RecordQuery::new("OL").order_by(OrderBy::asc("value"));
        assert_eq!(names(&c.list_records(&q)), vec!["d", "c", "a", "b"]);
    }

    #[test]
    fn string_tier_values_select_the_nearest_tier() {
        let mut c = Catalog::new();
        c.insert(
            DOCTYPE_TAPE_OFFERING,
            "T",
            rec(&[(FIELD_OUTPUT_LEVEL, json!("OL-550"))]),
        );
        c.insert(
            DOCTYPE_OUTPUT_LEVEL,
            "OL-550",
            rec(&[(FIELD_VALUE, json!(550)), (FIELD_IS_FIXTURE_LEVEL, json!(0))]),
        );
        c.insert(
            DOCTYPE_OUTPUT_LEVEL,
            "A",
            rec(&[
                (FIELD_VALUE, json!("500")),
                (FIELD_SKU_CODE, json!("M")),
                (FIELD_IS_FIXTURE_LEVEL, json!(1)),
            ]),
        );
        c.insert(
            DOCTYPE_OUTPUT_LEVEL,
            "B",
            rec(&[
                (FIELD_VALUE, json!(600)),
                (FIELD_SKU_CODE, json!("H")),
                (FIELD_IS_FIXTURE_LEVEL, json!(1)),
            ]),
        );
        let fixture = ConfiguredFixture {
            tape_offering: Some("T".to_string()),
            ..ConfiguredFixture::default()
        };

        // 550 is equidistant; the lower tier comes first once "500" sorts as a number.
        assert_eq!(fixture_output_code(&fixture, &c).as_deref(), Some("M"));
    }

    #[test]
    fn projection_keeps_requested_fields_and_name() {
        let c = levels();
        let q = RecordQuery::new("OL").fields(&["value"]);
        let rows = c.list_records(&q);
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["name", "value"]);
    }

    #[test]
    fn unknown_table_scans_empty() {
        assert!(levels().list_records(&RecordQuery::new("nope")).is_empty());
    }
}
