//! Deterministic identity for configured lighting fixtures.
//!
//! Two keys are derived from a [`ConfiguredFixture`]:
//!
//! - a part number such as `ILL-SH01-FS-I-30-H-MC-SV-WH-39.4`, assembled from per-attribute
//!   short codes looked up through an [`AttributeSource`], with `XX` standing in for anything
//!   that cannot be resolved;
//! - a configuration hash, the SHA-256 of the fixture's canonical sorted-key JSON.
//!
//! ```
//! use fixture_ident::{ConfiguredFixture, compute_config_hash};
//!
//! let a = ConfiguredFixture {
//!     finish: Some("FINISH-01".to_string()),
//!     requested_overall_length_mm: Some(1000),
//!     ..ConfiguredFixture::default()
//! };
//! let b = a.clone();
//! assert_eq!(compute_config_hash(&a), compute_config_hash(&b));
//! ```

#![forbid(unsafe_code)]

pub use fixture_ident_domain::length::format_length_inches;
pub use fixture_ident_domain::{
    AttributeSource, ConfiguredFixture, Direction, EncodeOutcome, EncoderConfig, EndType,
    FixtureRegistry, FixtureRequest, OrderBy, Record, RecordQuery, Registration,
    RegisteredFixture, UserSegment, canonical_config_json, compute_config_hash,
    configured_item_code, derive_part_number, derive_segments, encode_batch,
};
pub use fixture_ident_types::{EncodeData, EncodedFixture, PartNumberSegments};
