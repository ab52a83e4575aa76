use crate::{model::FixtureIdentConfigV1, presets};
use anyhow::Context;
use fixture_ident_domain::EncoderConfig;

pub const SCHEMA_CONFIG_V1: &str = "fixture-ident.config.v1";

const KNOWN_PROFILES: &[&str] = &["standard", "preview"];

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub prefix: Option<String>,
    pub placeholder: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub encoder: EncoderConfig,
}

pub fn resolve_config(
    cfg: FixtureIdentConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref() {
        if schema != SCHEMA_CONFIG_V1 {
            anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
        }
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());
    if !KNOWN_PROFILES.contains(&profile.as_str()) {
        anyhow::bail!("unknown profile: {profile} (expected standard|preview)");
    }

    let mut encoder = presets::preset(&profile);

    if let Some(prefix) = overrides.prefix.clone().or(cfg.prefix.clone()) {
        encoder.prefix = validate_segment("prefix", prefix)?;
    }

    if let Some(placeholder) = overrides.placeholder.clone().or(cfg.placeholder.clone()) {
        encoder.placeholder = validate_segment("placeholder", placeholder)?;
    }

    if let Some(suffix) = cfg.multi_segment_suffix.clone() {
        encoder.multi_segment_suffix = validate_segment("multi_segment_suffix", suffix)?;
    }

    if let Some(len) = cfg.item_code_hash_len {
        encoder.item_code_hash_len =
            parse_hash_len(len).with_context(|| format!("invalid item_code_hash_len: {len}"))?;
    }

    Ok(ResolvedConfig { encoder })
}

/// Segments are joined with `-`, so they must be non-empty and dash-free.
fn validate_segment(name: &str, value: String) -> anyhow::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        anyhow::bail!("{name} must not be empty");
    }
    if trimmed.contains('-') {
        anyhow::bail!("{name} must not contain '-': {trimmed}");
    }
    Ok(trimmed.to_string())
}

fn parse_hash_len(v: u32) -> anyhow::Result<usize> {
    match v {
        1..=64 => Ok(v as usize),
        _ => anyhow::bail!("expected a value between 1 and 64"),
    }
}
