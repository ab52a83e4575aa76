/// Exact by definition.
pub const MM_PER_INCH: f64 = 25.4;

/// Millimeters to inches, or `None` for an absent or zero length.
pub fn mm_to_inches(mm: Option<u32>) -> Option<f64> {
    match mm {
        None | Some(0) => None,
        Some(mm) => Some(f64::from(mm) / MM_PER_INCH),
    }
}

/// Inches with a fixed number of decimals, e.g. `1000` -> `"39.4"` at precision 1.
pub fn format_length_inches(mm: Option<u32>, precision: usize) -> Option<String> {
    mm_to_inches(mm).map(|inches| format!("{inches:.precision$}"))
}

/// The part-number length segment: one decimal, `"0"` when no length was requested.
pub fn length_segment(mm: Option<u32>) -> String {
    format_length_inches(mm, 1).unwrap_or_else(|| "0".to_string())
}
