//! Catalog adapters: load attribute reference tables and fixture requests from disk.
//!
//! This crate is allowed to do filesystem IO. Everything it loads is handed to the domain
//! crate through the [`AttributeSource`](fixture_ident_domain::AttributeSource) seam.

#![forbid(unsafe_code)]

mod catalog;
mod error;
mod parse;

use anyhow::Context;
use camino::Utf8Path;
use fixture_ident_domain::FixtureRequest;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use parse::{parse_catalog_json, parse_catalog_toml, parse_requests_json, parse_requests_toml};

/// Input formats, chosen by file extension. Anything other than `.json` is read as TOML.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        }
    }
}

/// Load an attribute catalog (`.toml` or `.json`).
pub fn load_catalog(path: &Utf8Path) -> anyhow::Result<Catalog> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let catalog = match FileFormat::from_path(path) {
        FileFormat::Toml => parse_catalog_toml(&text),
        FileFormat::Json => parse_catalog_json(&text),
    }
    .with_context(|| format!("load catalog {path}"))?;

    tracing::debug!(%path, records = catalog.record_count(), "loaded catalog");
    Ok(catalog)
}

/// Load fixture requests: `[[fixture]]` tables in TOML, or a top-level JSON array.
pub fn load_requests(path: &Utf8Path) -> anyhow::Result<Vec<FixtureRequest>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let requests = match FileFormat::from_path(path) {
        FileFormat::Toml => parse_requests_toml(&text),
        FileFormat::Json => parse_requests_json(&text),
    }
    .with_context(|| format!("load fixture requests {path}"))?;

    tracing::debug!(%path, requests = requests.len(), "loaded fixture requests");
    Ok(requests)
}
