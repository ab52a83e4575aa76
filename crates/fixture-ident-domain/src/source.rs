//! The attribute lookup seam.
//!
//! The encoder never touches storage. Callers hand it an [`AttributeSource`] that answers
//! point lookups and small reference-table scans; the catalog crate provides an in-memory one.

use serde_json::Value;
use std::collections::BTreeMap;

/// A projected reference-table row: field name -> value. Always carries `name` (the record id).
pub type Record = BTreeMap<String, Value>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderBy<'a> {
    pub field: &'a str,
    pub direction: Direction,
}

impl<'a> OrderBy<'a> {
    pub fn asc(field: &'a str) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }
}

/// A table scan: equality filters, a field projection, and an optional ordering.
#[derive(Clone, Debug)]
pub struct RecordQuery<'a> {
    pub doctype: &'a str,
    pub filters: Vec<(&'a str, Value)>,
    pub fields: Vec<&'a str>,
    pub order_by: Option<OrderBy<'a>>,
}

impl<'a> RecordQuery<'a> {
    pub fn new(doctype: &'a str) -> Self {
        Self {
            doctype,
            filters: Vec::new(),
            fields: Vec::new(),
            order_by: None,
        }
    }

    pub fn filter(mut self, field: &'a str, value: Value) -> Self {
        self.filters.push((field, value));
        self
    }

    pub fn fields(mut self, fields: &[&'a str]) -> Self {
        self.fields.extend_from_slice(fields);
        self
    }

    pub fn order_by(mut self, order: OrderBy<'a>) -> Self {
        self.order_by = Some(order);
        self
    }
}

/// Read-only access to reference tables.
///
/// Implementations must be deterministic: the same query against the same data returns rows
/// in the same order. Ties under `order_by` keep the source's natural order.
pub trait AttributeSource {
    /// Point lookup. `None` when the record or the field is missing.
    fn lookup_field(&self, doctype: &str, record_id: &str, field: &str) -> Option<Value>;

    /// Table scan.
    fn list_records(&self, query: &RecordQuery<'_>) -> Vec<Record>;
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn lookup_field(&self, doctype: &str, record_id: &str, field: &str) -> Option<Value> {
        (**self).lookup_field(doctype, record_id, field)
    }

    fn list_records(&self, query: &RecordQuery<'_>) -> Vec<Record> {
        (**self).list_records(query)
    }
}

/// Look up a short code. Null, empty, and whitespace-only strings count as absent.
pub fn lookup_text<S: AttributeSource + ?Sized>(
    source: &S,
    doctype: &str,
    record_id: Option<&str>,
    field: &str,
) -> Option<String> {
    let record_id = record_id.filter(|id| !id.is_empty())?;
    let value = source.lookup_field(doctype, record_id, field)?;
    value_as_text(&value)
}

/// Look up a numeric field. Numeric strings are accepted; anything else counts as absent.
pub fn lookup_number<S: AttributeSource + ?Sized>(
    source: &S,
    doctype: &str,
    record_id: Option<&str>,
    field: &str,
) -> Option<f64> {
    let record_id = record_id.filter(|id| !id.is_empty())?;
    let value = source.lookup_field(doctype, record_id, field)?;
    value_as_number(&value)
}

pub fn value_as_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

pub fn value_as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
