use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Field names that make up a fixture's identity, in canonical (sorted) order.
pub const TRACKED_FIELDS: [&str; 11] = [
    "endcap_color",
    "endcap_style_end",
    "endcap_style_start",
    "environment_rating",
    "finish",
    "fixture_template",
    "lens_appearance",
    "mounting_method",
    "power_feed_type",
    "requested_overall_length_mm",
    "tape_offering",
];

/// A fixture configuration as selected by a customer.
///
/// Link fields hold record ids in the reference tables, not resolved codes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredFixture {
    #[serde(default)]
    pub fixture_template: Option<String>,
    #[serde(default)]
    pub tape_offering: Option<String>,
    #[serde(default)]
    pub lens_appearance: Option<String>,
    #[serde(default)]
    pub mounting_method: Option<String>,
    #[serde(default)]
    pub finish: Option<String>,
    #[serde(default)]
    pub environment_rating: Option<String>,
    #[serde(default)]
    pub power_feed_type: Option<String>,
    #[serde(default)]
    pub endcap_style_start: Option<String>,
    #[serde(default)]
    pub endcap_style_end: Option<String>,
    #[serde(default)]
    pub endcap_color: Option<String>,
    #[serde(default)]
    pub requested_overall_length_mm: Option<u32>,
    /// Single-segment feed directions (record ids in the feed-direction table). The end
    /// defaults to an endcap.
    #[serde(default)]
    pub feed_direction_start: Option<String>,
    #[serde(default)]
    pub feed_direction_end: Option<String>,

    #[serde(default)]
    pub is_multi_segment: bool,
    #[serde(default)]
    pub user_segments: Vec<UserSegment>,

    /// Not part of identity.
    #[serde(default)]
    pub engine_version: Option<String>,
    /// Not part of identity.
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndType {
    Jumper,
    #[default]
    Endcap,
}

impl EndType {
    pub fn as_str(self) -> &'static str {
        match self {
            EndType::Jumper => "Jumper",
            EndType::Endcap => "Endcap",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSegment {
    pub segment_index: u32,
    pub requested_length_mm: u32,
    pub end_type: EndType,
    #[serde(default)]
    pub start_feed_direction: Option<String>,
    /// Ignored when `end_type` is `Endcap`.
    #[serde(default)]
    pub end_feed_direction: Option<String>,
}

/// An encode request: a configuration plus an optional caller label (e.g. a schedule line).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureRequest {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(flatten)]
    pub fixture: ConfiguredFixture,
}

impl ConfiguredFixture {
    /// Identity fields as a sorted map. Absent values are explicit nulls.
    ///
    /// Multi-segment fixtures add `is_multi_segment` and `user_segments`. Feed directions are
    /// added only when set, so a single-segment fixture without them contributes exactly
    /// [`TRACKED_FIELDS`].
    pub fn identity_fields(&self) -> BTreeMap<&'static str, Value> {
        let link = |v: &Option<String>| v.as_deref().map_or(Value::Null, |s| json!(s));

        let mut m = BTreeMap::new();
        m.insert("endcap_color", link(&self.endcap_color));
        m.insert("endcap_style_end", link(&self.endcap_style_end));
        m.insert("endcap_style_start", link(&self.endcap_style_start));
        m.insert("environment_rating", link(&self.environment_rating));
        m.insert("finish", link(&self.finish));
        m.insert("fixture_template", link(&self.fixture_template));
        m.insert("lens_appearance", link(&self.lens_appearance));
        m.insert("mounting_method", link(&self.mounting_method));
        m.insert("power_feed_type", link(&self.power_feed_type));
        m.insert(
            "requested_overall_length_mm",
            self.requested_overall_length_mm
                .map_or(Value::Null, |mm| json!(mm)),
        );
        m.insert("tape_offering", link(&self.tape_offering));

        if !self.is_multi_segment {
            if let Some(start) = &self.feed_direction_start {
                m.insert("feed_direction_start", json!(start));
            }
            if let Some(end) = &self.feed_direction_end {
                m.insert("feed_direction_end", json!(end));
            }
        }

        if self.is_multi_segment {
            m.insert("is_multi_segment", json!(true));
            let segments: Vec<Value> = self
                .user_segments
                .iter()
                .map(UserSegment::identity_value)
                .collect();
            m.insert("user_segments", Value::Array(segments));
        }

        m
    }
}

impl UserSegment {
    /// Keys are inserted in sorted order so the object is canonical under either serde_json
    /// map representation.
    fn identity_value(&self) -> Value {
        let mut m = serde_json::Map::new();
        if let Some(end) = &self.end_feed_direction {
            m.insert("end_feed_direction".to_string(), json!(end));
        }
        m.insert("end_type".to_string(), json!(self.end_type.as_str()));
        m.insert(
            "requested_length_mm".to_string(),
            json!(self.requested_length_mm),
        );
        m.insert("segment_index".to_string(), json!(self.segment_index));
        if let Some(start) = &self.start_feed_direction {
            m.insert("start_feed_direction".to_string(), json!(start));
        }
        Value::Object(m)
    }
}
