use crate::catalog::Catalog;
use crate::error::CatalogError;
use anyhow::Context;
use fixture_ident_domain::model::FixtureRequest;
use fixture_ident_domain::source::Record;
use fixture_ident_types::ids::{FIELD_NAME, TABLE_ALIASES, doctype_for_alias};
use serde::Deserialize;
use serde_json::Value;

pub fn parse_catalog_toml(text: &str) -> anyhow::Result<Catalog> {
    let doc: toml::Table = toml::from_str(text).context("parse catalog TOML")?;
    let value = serde_json::to_value(doc).context("convert catalog TOML")?;
    Ok(catalog_from_value(value)?)
}

pub fn parse_catalog_json(text: &str) -> anyhow::Result<Catalog> {
    let value: Value = serde_json::from_str(text).context("parse catalog JSON")?;
    Ok(catalog_from_value(value)?)
}

/// `{ table: { record_id: { field: value } } }`, where `table` is an alias or a doctype.
fn catalog_from_value(value: Value) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();

    let Value::Object(tables) = value else {
        return Err(CatalogError::NotATable {
            table: "<root>".to_string(),
        });
    };

    for (table, records) in tables {
        let Some(doctype) = doctype_for_alias(&table) else {
            let expected = TABLE_ALIASES
                .iter()
                .map(|(alias, _)| *alias)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(CatalogError::UnknownTable { table, expected });
        };

        let Value::Object(records) = records else {
            return Err(CatalogError::NotATable { table });
        };

        for (id, fields) in records {
            if id.trim().is_empty() {
                return Err(CatalogError::EmptyRecordId { table, id });
            }
            let Value::Object(fields) = fields else {
                return Err(CatalogError::RecordNotATable { table, id });
            };
            let fields: Record = fields.into_iter().collect();

            if let Some(name) = fields.get(FIELD_NAME) {
                if name.as_str() != Some(id.as_str()) {
                    return Err(CatalogError::NameMismatch {
                        table,
                        id,
                        name: name.to_string(),
                    });
                }
            }

            catalog.insert(doctype, &id, fields);
        }
    }

    tracing::debug!(records = catalog.record_count(), "parsed catalog");
    Ok(catalog)
}

#[derive(Debug, Default, Deserialize)]
struct RequestsFile {
    #[serde(default)]
    fixture: Vec<FixtureRequest>,
}

/// `[[fixture]]` array of tables.
pub fn parse_requests_toml(text: &str) -> anyhow::Result<Vec<FixtureRequest>> {
    let file: RequestsFile = toml::from_str(text).context("parse fixture requests TOML")?;
    Ok(file.fixture)
}

/// A top-level JSON array of fixture objects.
pub fn parse_requests_json(text: &str) -> anyhow::Result<Vec<FixtureRequest>> {
    serde_json::from_str(text).context("parse fixture requests JSON")
}
