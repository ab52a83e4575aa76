//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::FixtureIdentConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `fixture-ident.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<FixtureIdentConfigV1> {
    let cfg: FixtureIdentConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the encoder config (profile preset + file values + overrides).
pub fn resolve_config(
    cfg: FixtureIdentConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
