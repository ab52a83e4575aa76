//! Pure configuration-identity encoding (no IO).
//!
//! Input: a configured fixture plus an attribute source supplied by the caller.
//! Output: part number, configuration hash, and item code.

#![forbid(unsafe_code)]

pub mod config;
pub mod config_hash;
pub mod feed_direction;
pub mod length;
pub mod model;
pub mod output_level;
pub mod part_number;
pub mod registry;
pub mod source;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use config::EncoderConfig;
pub use config_hash::{canonical_config_json, compute_config_hash, configured_item_code};
pub use engine::{EncodeOutcome, encode_batch};
pub use feed_direction::derive_feed_codes;
pub use model::{ConfiguredFixture, EndType, FixtureRequest, UserSegment};
pub use part_number::{derive_part_number, derive_segments};
pub use registry::{FixtureRegistry, Registration, RegisteredFixture};
pub use source::{AttributeSource, Direction, OrderBy, Record, RecordQuery};
