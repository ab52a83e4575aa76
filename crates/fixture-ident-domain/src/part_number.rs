//! Part number derivation.
//!
//! Format: `{prefix}-{profile}-{led}-{env}-{cct}-{output}-{lens}-{mount}-{finish}-{inches}`
//! with an optional trailing `-{multi_segment_suffix}`.
//!
//! Derivation never fails. Any link that is absent, dangling, or resolves to an empty code is
//! rendered as the configured placeholder.

use crate::config::EncoderConfig;
use crate::length::length_segment;
use crate::model::ConfiguredFixture;
use crate::output_level::fixture_output_code;
use crate::source::{AttributeSource, lookup_text};
use fixture_ident_types::PartNumberSegments;
use fixture_ident_types::ids::*;

/// Resolve every part-number segment for a fixture.
pub fn derive_segments<S: AttributeSource + ?Sized>(
    fixture: &ConfiguredFixture,
    source: &S,
    cfg: &EncoderConfig,
) -> PartNumberSegments {
    let or_placeholder = |segment: &str, code: Option<String>| match code {
        Some(c) => c,
        None => {
            tracing::debug!(segment, placeholder = %cfg.placeholder, "attribute code unresolved");
            cfg.placeholder.clone()
        }
    };

    let tape = fixture.tape_offering.as_deref();
    let cct_name = lookup_text(source, DOCTYPE_TAPE_OFFERING, tape, FIELD_CCT);

    PartNumberSegments {
        profile: or_placeholder(
            "profile",
            lookup_text(
                source,
                DOCTYPE_FIXTURE_TEMPLATE,
                fixture.fixture_template.as_deref(),
                FIELD_DEFAULT_PROFILE_FAMILY,
            ),
        ),
        led_package: or_placeholder(
            "led_package",
            lookup_text(source, DOCTYPE_TAPE_OFFERING, tape, FIELD_LED_PACKAGE),
        ),
        environment: or_placeholder(
            "environment",
            lookup_text(
                source,
                DOCTYPE_ENVIRONMENT_RATING,
                fixture.environment_rating.as_deref(),
                FIELD_CODE,
            ),
        ),
        cct: or_placeholder(
            "cct",
            lookup_text(source, DOCTYPE_CCT, cct_name.as_deref(), FIELD_CODE),
        ),
        fixture_output: or_placeholder("fixture_output", fixture_output_code(fixture, source)),
        lens: or_placeholder(
            "lens",
            lookup_text(
                source,
                DOCTYPE_LENS_APPEARANCE,
                fixture.lens_appearance.as_deref(),
                FIELD_CODE,
            ),
        ),
        mounting: or_placeholder(
            "mounting",
            lookup_text(
                source,
                DOCTYPE_MOUNTING_METHOD,
                fixture.mounting_method.as_deref(),
                FIELD_CODE,
            ),
        ),
        finish: or_placeholder(
            "finish",
            lookup_text(source, DOCTYPE_FINISH, fixture.finish.as_deref(), FIELD_CODE),
        ),
        length_inches: length_segment(fixture.requested_overall_length_mm),
        multi_segment: fixture
            .is_multi_segment
            .then(|| cfg.multi_segment_suffix.clone()),
    }
}

/// Join resolved segments into the part number string.
pub fn render_part_number(segments: &PartNumberSegments, cfg: &EncoderConfig) -> String {
    let mut parts: Vec<&str> = vec![
        cfg.prefix.as_str(),
        segments.profile.as_str(),
        segments.led_package.as_str(),
        segments.environment.as_str(),
        segments.cct.as_str(),
        segments.fixture_output.as_str(),
        segments.lens.as_str(),
        segments.mounting.as_str(),
        segments.finish.as_str(),
        segments.length_inches.as_str(),
    ];
    if let Some(suffix) = segments.multi_segment.as_deref() {
        parts.push(suffix);
    }
    parts.join("-")
}

/// Derive the human-readable part number for a fixture.
pub fn derive_part_number<S: AttributeSource + ?Sized>(
    fixture: &ConfiguredFixture,
    source: &S,
    cfg: &EncoderConfig,
) -> String {
    render_part_number(&derive_segments(fixture, source, cfg), cfg)
}
