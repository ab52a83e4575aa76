/// Rendering knobs for part numbers and item codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    pub profile: String,
    /// Leading segment of part numbers and item codes.
    pub prefix: String,
    /// Substituted for any attribute code that cannot be resolved.
    pub placeholder: String,
    /// Trailing segment appended for multi-segment fixtures.
    pub multi_segment_suffix: String,
    /// Number of hash hex digits used in item codes (1..=64).
    pub item_code_hash_len: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            profile: "standard".to_string(),
            prefix: "ILL".to_string(),
            placeholder: "XX".to_string(),
            multi_segment_suffix: "J".to_string(),
            item_code_hash_len: 8,
        }
    }
}
