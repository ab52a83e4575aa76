use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `fixture-ident.toml` schema v1.
///
/// Every field is optional; unset fields fall back to the selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FixtureIdentConfigV1 {
    /// Optional schema string for tooling (`fixture-ident.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile: `standard` (default) or `preview`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Leading part-number segment, e.g. `ILL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Rendered in place of unresolved attribute codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Trailing segment for multi-segment fixtures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_segment_suffix: Option<String>,

    /// Hash digits carried into item codes (1..=64).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_code_hash_len: Option<u32>,
}
