//! The `encode` use case: resolve config, encode a batch of requests, and produce a report.

use anyhow::Context;
use fixture_ident_domain::{AttributeSource, FixtureRegistry, FixtureRequest, encode_batch};
use fixture_ident_settings::{FixtureIdentConfigV1, Overrides, ResolvedConfig};
use fixture_ident_types::{EncodeReport, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

/// Input for the encode use case.
pub struct EncodeInput<'a> {
    /// Attribute lookups (usually a loaded catalog).
    pub source: &'a dyn AttributeSource,
    pub requests: &'a [FixtureRequest],
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the encode use case.
#[derive(Clone, Debug)]
pub struct EncodeOutput {
    pub report: EncodeReport,
    pub resolved_config: ResolvedConfig,
    /// Every distinct configuration seen in the batch.
    pub registry: FixtureRegistry,
}

/// Parse (empty is allowed, defaults apply) and resolve the encoder config.
pub fn resolve_encoder_config(
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        FixtureIdentConfigV1::default()
    } else {
        fixture_ident_settings::parse_config_toml(config_text).context("parse config")?
    };

    fixture_ident_settings::resolve_config(cfg, overrides).context("resolve config")
}

pub fn run_encode(input: EncodeInput<'_>) -> anyhow::Result<EncodeOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve_encoder_config(input.config_text, input.overrides)?;
    let outcome = encode_batch(input.requests, input.source, &resolved.encoder);

    let finished_at = OffsetDateTime::now_utc();

    tracing::info!(
        profile = %outcome.data.profile,
        requests = outcome.data.requests,
        unique = outcome.data.unique_configurations,
        reused = outcome.data.reused,
        disambiguated = outcome.data.disambiguated,
        "encoded fixture batch"
    );

    let report = EncodeReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "fixture-ident".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        data: outcome.data,
        fixtures: outcome.fixtures,
    };

    Ok(EncodeOutput {
        report,
        resolved_config: resolved,
        registry: outcome.registry,
    })
}
