use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for encode reports.
pub const SCHEMA_REPORT_V1: &str = "fixture-ident.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Resolved per-attribute codes that make up a part number.
///
/// Every field holds the final rendered text, placeholders included, so the
/// breakdown always reassembles into the emitted part number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PartNumberSegments {
    pub profile: String,
    pub led_package: String,
    pub environment: String,
    pub cct: String,
    pub fixture_output: String,
    pub lens: String,
    pub mounting: String,
    pub finish: String,
    pub length_inches: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_segment: Option<String>,
}

/// Feed-direction SKU codes for one fixture.
///
/// Single-segment fixtures fill `start_*`/`end_*`; multi-segment fixtures carry one entry per
/// user segment instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeedDirectionCodes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_direction: Option<String>,
    #[serde(default)]
    pub start_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_direction: Option<String>,
    #[serde(default)]
    pub end_code: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SegmentFeedCodes>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SegmentFeedCodes {
    pub segment_index: u32,
    pub start_feed_direction_code: String,
    /// Empty when the segment ends in an endcap.
    pub end_feed_direction_code: String,
}

/// One encoded configuration request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EncodedFixture {
    /// Position of the request in the input file (0-based).
    pub index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Lowercase SHA-256 hex digest of the canonical configuration.
    pub config_hash: String,
    pub part_number: String,
    pub item_code: String,
    /// True when an earlier request in the same run already registered this configuration.
    pub reused: bool,
    pub segments: PartNumberSegments,
    #[serde(default)]
    pub feed: FeedDirectionCodes,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EncodeData {
    pub profile: String,
    pub requests: u32,
    pub unique_configurations: u32,
    pub reused: u32,
    /// Part numbers that needed a disambiguation suffix.
    pub disambiguated: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EncodeReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub data: EncodeData,
    pub fixtures: Vec<EncodedFixture>,
}
