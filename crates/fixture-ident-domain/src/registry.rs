//! Configuration dedup keyed by configuration hash.
//!
//! A hash is computed for every registration. A configuration seen before gets its existing
//! record back untouched; a new one has its part number derived exactly once.

use crate::config::EncoderConfig;
use crate::config_hash::{compute_config_hash, configured_item_code};
use crate::feed_direction::derive_feed_codes;
use crate::model::ConfiguredFixture;
use crate::part_number::{derive_segments, render_part_number};
use crate::source::AttributeSource;
use fixture_ident_types::{FeedDirectionCodes, PartNumberSegments};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub struct RegisteredFixture {
    pub config_hash: String,
    /// Immutable once assigned.
    pub part_number: String,
    pub item_code: String,
    pub segments: PartNumberSegments,
    pub feed: FeedDirectionCodes,
    pub fixture: ConfiguredFixture,
    /// Number of registrations that resolved to this record.
    pub occurrences: u32,
    /// True when the part number carries a disambiguation suffix.
    pub disambiguated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Registration<'a> {
    Created(&'a RegisteredFixture),
    Reused(&'a RegisteredFixture),
}

impl<'a> Registration<'a> {
    pub fn record(&self) -> &'a RegisteredFixture {
        match self {
            Registration::Created(r) | Registration::Reused(r) => r,
        }
    }

    pub fn is_reused(&self) -> bool {
        matches!(self, Registration::Reused(_))
    }
}

#[derive(Clone, Debug, Default)]
pub struct FixtureRegistry {
    by_hash: BTreeMap<String, RegisteredFixture>,
    /// part number -> config hash
    part_numbers: BTreeMap<String, String>,
}

impl FixtureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }

    pub fn get(&self, config_hash: &str) -> Option<&RegisteredFixture> {
        self.by_hash.get(config_hash)
    }

    pub fn find_by_part_number(&self, part_number: &str) -> Option<&RegisteredFixture> {
        self.part_numbers
            .get(part_number)
            .and_then(|h| self.by_hash.get(h))
    }

    /// Records in hash order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredFixture> {
        self.by_hash.values()
    }

    /// Register a configuration, reusing the existing record when the hash is known.
    pub fn register<S: AttributeSource + ?Sized>(
        &mut self,
        fixture: &ConfiguredFixture,
        source: &S,
        cfg: &EncoderConfig,
    ) -> Registration<'_> {
        let config_hash = compute_config_hash(fixture);

        let created = match self.by_hash.get_mut(&config_hash) {
            Some(existing) => {
                existing.occurrences += 1;
                tracing::debug!(%config_hash, "configuration already registered");
                false
            }
            None => {
                let record = self.new_record(fixture, source, cfg, config_hash.clone());
                self.part_numbers
                    .insert(record.part_number.clone(), config_hash.clone());
                self.by_hash.insert(config_hash.clone(), record);
                true
            }
        };

        let record = &self.by_hash[&config_hash];
        if created {
            Registration::Created(record)
        } else {
            Registration::Reused(record)
        }
    }

    fn new_record<S: AttributeSource + ?Sized>(
        &self,
        fixture: &ConfiguredFixture,
        source: &S,
        cfg: &EncoderConfig,
        config_hash: String,
    ) -> RegisteredFixture {
        let segments = derive_segments(fixture, source, cfg);
        let base = render_part_number(&segments, cfg);
        let (part_number, disambiguated) = self.unique_part_number(base);
        let item_code = configured_item_code(&cfg.prefix, &config_hash, cfg.item_code_hash_len);
        let feed = derive_feed_codes(fixture, source, cfg);

        tracing::debug!(%config_hash, %part_number, %item_code, "registered configuration");

        RegisteredFixture {
            config_hash,
            part_number,
            item_code,
            segments,
            feed,
            fixture: fixture.clone(),
            occurrences: 1,
            disambiguated,
        }
    }

    /// The part number omits power feed and endcap selections, so two distinct
    /// configurations can render the same text. Later ones get `-2`, `-3`, ...
    fn unique_part_number(&self, base: String) -> (String, bool) {
        if !self.part_numbers.contains_key(&base) {
            return (base, false);
        }
        let mut n: u32 = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.part_numbers.contains_key(&candidate) {
                tracing::debug!(%base, %candidate, "part number collision");
                return (candidate, true);
            }
            n += 1;
        }
    }
}
