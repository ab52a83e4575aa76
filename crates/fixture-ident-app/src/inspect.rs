//! The `inspect` use case: show how one request's identity is computed.

use fixture_ident_domain::part_number::render_part_number;
use fixture_ident_domain::{
    AttributeSource, EncoderConfig, FixtureRequest, canonical_config_json, compute_config_hash,
    configured_item_code, derive_feed_codes, derive_segments,
};
use fixture_ident_types::{FeedDirectionCodes, PartNumberSegments};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectOutput {
    pub label: Option<String>,
    /// The exact text that is hashed.
    pub canonical_json: String,
    pub config_hash: String,
    pub item_code: String,
    /// Before any registry disambiguation.
    pub part_number: String,
    pub segments: PartNumberSegments,
    pub feed: FeedDirectionCodes,
}

pub fn run_inspect<S: AttributeSource + ?Sized>(
    request: &FixtureRequest,
    source: &S,
    cfg: &EncoderConfig,
) -> InspectOutput {
    let fixture = &request.fixture;
    let config_hash = compute_config_hash(fixture);
    let segments = derive_segments(fixture, source, cfg);
    let feed = derive_feed_codes(fixture, source, cfg);

    InspectOutput {
        label: request.label.clone(),
        canonical_json: canonical_config_json(fixture),
        item_code: configured_item_code(&cfg.prefix, &config_hash, cfg.item_code_hash_len),
        part_number: render_part_number(&segments, cfg),
        config_hash,
        segments,
        feed,
    }
}

/// Format an inspection for terminal display.
pub fn format_inspection(out: &InspectOutput) -> String {
    let s = &out.segments;
    let mut text = String::new();

    if let Some(label) = &out.label {
        text.push_str(&format!("label:        {label}\n"));
    }
    text.push_str(&format!("part number:  {}\n", out.part_number));
    text.push_str(&format!("item code:    {}\n", out.item_code));
    text.push_str(&format!("config hash:  {}\n", out.config_hash));
    text.push_str(&format!("canonical:    {}\n", out.canonical_json));
    text.push_str("segments:\n");
    for (name, value) in [
        ("profile", &s.profile),
        ("led_package", &s.led_package),
        ("environment", &s.environment),
        ("cct", &s.cct),
        ("fixture_output", &s.fixture_output),
        ("lens", &s.lens),
        ("mounting", &s.mounting),
        ("finish", &s.finish),
        ("length_inches", &s.length_inches),
    ] {
        text.push_str(&format!("  {name:<15} {value}\n"));
    }
    if let Some(suffix) = &s.multi_segment {
        text.push_str(&format!("  {:<15} {suffix}\n", "multi_segment"));
    }

    let feed = &out.feed;
    text.push_str("feed:\n");
    if feed.segments.is_empty() {
        text.push_str(&format!("  {:<15} {}\n", "start", feed.start_code));
        text.push_str(&format!("  {:<15} {}\n", "end", feed.end_code));
    } else {
        for seg in &feed.segments {
            text.push_str(&format!(
                "  segment {:<7} {} / {}\n",
                seg.segment_index, seg.start_feed_direction_code, seg.end_feed_direction_code
            ));
        }
    }

    text
}
