//! Stable DTOs and identifiers used across the fixture-ident workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted encode report
//! - reference-table (doctype) names and field names read by the encoder

#![forbid(unsafe_code)]

pub mod ids;
pub mod receipt;

pub use receipt::{
    EncodeData, EncodeReport, EncodedFixture, FeedDirectionCodes, PartNumberSegments,
    SCHEMA_REPORT_V1, SegmentFeedCodes, ToolMeta,
};
