use crate::config::EncoderConfig;
use crate::model::FixtureRequest;
use crate::registry::FixtureRegistry;
use crate::source::AttributeSource;
use fixture_ident_types::{EncodeData, EncodedFixture};

#[derive(Clone, Debug)]
pub struct EncodeOutcome {
    /// One entry per request, in input order.
    pub fixtures: Vec<EncodedFixture>,
    pub data: EncodeData,
    pub registry: FixtureRegistry,
}

/// Encode every request in order, collapsing identical configurations.
pub fn encode_batch<S: AttributeSource + ?Sized>(
    requests: &[FixtureRequest],
    source: &S,
    cfg: &EncoderConfig,
) -> EncodeOutcome {
    let mut registry = FixtureRegistry::new();
    let mut fixtures = Vec::with_capacity(requests.len());

    for (index, request) in requests.iter().enumerate() {
        let registration = registry.register(&request.fixture, source, cfg);
        let reused = registration.is_reused();
        let record = registration.record();

        fixtures.push(EncodedFixture {
            index: count_u32(index),
            label: request.label.clone(),
            config_hash: record.config_hash.clone(),
            part_number: record.part_number.clone(),
            item_code: record.item_code.clone(),
            reused,
            segments: record.segments.clone(),
            feed: record.feed.clone(),
        });
    }

    let data = EncodeData {
        profile: cfg.profile.clone(),
        requests: count_u32(fixtures.len()),
        unique_configurations: count_u32(registry.len()),
        reused: count_u32(fixtures.iter().filter(|f| f.reused).count()),
        disambiguated: count_u32(registry.iter().filter(|r| r.disambiguated).count()),
    };

    EncodeOutcome {
        fixtures,
        data,
        registry,
    }
}

/// Report counters saturate rather than wrap.
fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
