//! JSON Schemas for the report and config formats.

use anyhow::Context;
use fixture_ident_settings::FixtureIdentConfigV1;
use fixture_ident_types::EncodeReport;
use schemars::schema_for;

/// A published schema and its conventional filename.
#[derive(Clone, Copy, Debug)]
pub struct SchemaSpec {
    pub filename: &'static str,
    pub generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(EncodeReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(FixtureIdentConfigV1)
}

/// Every schema this tool publishes.
pub fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "fixture-ident.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "fixture-ident.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Pretty-printed JSON with a trailing newline.
pub fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}
