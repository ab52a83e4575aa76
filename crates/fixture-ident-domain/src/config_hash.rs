use crate::model::ConfiguredFixture;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Canonical JSON for a fixture's identity: compact, keys sorted, absent fields as `null`.
///
/// Identity fields:
/// - the eleven selection links plus `requested_overall_length_mm`
/// - `is_multi_segment` and `user_segments`, for multi-segment fixtures only
pub fn canonical_config_json(fixture: &ConfiguredFixture) -> String {
    // Built from a sorted map and rendered through `Value`'s `Display`, which cannot fail.
    let fields: serde_json::Map<String, Value> = fixture
        .identity_fields()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    Value::Object(fields).to_string()
}

/// Compute the stable SHA-256 configuration hash (lowercase hex, 64 chars).
pub fn compute_config_hash(fixture: &ConfiguredFixture) -> String {
    let canonical = canonical_config_json(fixture);

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

/// Manufacturing item code: `{prefix}-{first hash_len hex digits, uppercased}`.
pub fn configured_item_code(prefix: &str, config_hash: &str, hash_len: usize) -> String {
    let short: String = config_hash.chars().take(hash_len).collect();
    format!("{prefix}-{}", short.to_ascii_uppercase())
}
