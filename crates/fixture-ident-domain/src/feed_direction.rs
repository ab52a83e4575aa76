//! Feed-direction SKU codes.
//!
//! Directions are record ids in the feed-direction table (`End`, `Back`, ...). A direction of
//! `Endcap` means the run terminates without a feed.

use crate::config::EncoderConfig;
use crate::model::{ConfiguredFixture, EndType, UserSegment};
use crate::source::{AttributeSource, lookup_text};
use fixture_ident_types::ids::{DOCTYPE_FEED_DIRECTION, FIELD_CODE};
use fixture_ident_types::{FeedDirectionCodes, SegmentFeedCodes};

pub const ENDCAP_DIRECTION: &str = "Endcap";
/// End code for a single-segment run closed by an endcap.
pub const ENDCAP_FEED_CODE: &str = "C";

/// Codes used when the table has no record for a well-known direction.
const FALLBACK_CODES: &[(&str, &str)] = &[
    ("End", "E"),
    ("Back", "B"),
    ("Left", "L"),
    ("Right", "R"),
];

/// Resolve one direction to its code: the table first, then the built-in codes, then the
/// placeholder. `None` and empty directions resolve to an empty code.
pub fn feed_direction_code<S: AttributeSource + ?Sized>(
    direction: Option<&str>,
    source: &S,
    cfg: &EncoderConfig,
) -> String {
    let Some(direction) = direction.filter(|d| !d.is_empty()) else {
        return String::new();
    };

    if let Some(code) = lookup_text(source, DOCTYPE_FEED_DIRECTION, Some(direction), FIELD_CODE) {
        return code;
    }
    if let Some((_, code)) = FALLBACK_CODES.iter().find(|(d, _)| *d == direction) {
        tracing::debug!(direction, code, "feed direction not in catalog, using built-in code");
        return (*code).to_string();
    }

    tracing::debug!(direction, placeholder = %cfg.placeholder, "feed direction code unresolved");
    cfg.placeholder.clone()
}

fn segment_codes<S: AttributeSource + ?Sized>(
    segment: &UserSegment,
    source: &S,
    cfg: &EncoderConfig,
) -> SegmentFeedCodes {
    let end_feed_direction_code = match segment.end_type {
        EndType::Endcap => String::new(),
        EndType::Jumper => feed_direction_code(segment.end_feed_direction.as_deref(), source, cfg),
    };

    SegmentFeedCodes {
        segment_index: segment.segment_index,
        start_feed_direction_code: feed_direction_code(
            segment.start_feed_direction.as_deref(),
            source,
            cfg,
        ),
        end_feed_direction_code,
    }
}

/// Feed-direction codes for a fixture.
///
/// Single-segment: the start direction resolves through the table; the end defaults to an
/// endcap (`C`). Multi-segment: one entry per user segment, with the end code cleared for
/// segments that end in an endcap.
pub fn derive_feed_codes<S: AttributeSource + ?Sized>(
    fixture: &ConfiguredFixture,
    source: &S,
    cfg: &EncoderConfig,
) -> FeedDirectionCodes {
    if fixture.is_multi_segment {
        return FeedDirectionCodes {
            segments: fixture
                .user_segments
                .iter()
                .map(|s| segment_codes(s, source, cfg))
                .collect(),
            ..FeedDirectionCodes::default()
        };
    }

    let end_direction = fixture
        .feed_direction_end
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| ENDCAP_DIRECTION.to_string());
    let end_code = if end_direction == ENDCAP_DIRECTION {
        ENDCAP_FEED_CODE.to_string()
    } else {
        feed_direction_code(Some(&end_direction), source, cfg)
    };

    FeedDirectionCodes {
        start_direction: fixture.feed_direction_start.clone(),
        start_code: feed_direction_code(fixture.feed_direction_start.as_deref(), source, cfg),
        end_direction: Some(end_direction),
        end_code,
        segments: Vec::new(),
    }
}
