//! Human-readable byte count formatting

/// Binary magnitude units, 1024 apart.
const UNITS: [&str; 9] = [
    "Bytes", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB",
];

/// Magnitude index for a byte count, clamped to the unit table.
/// A `u64` tops out below `ZiB` so the clamp is headroom, not a branch
/// reachable from real input.
fn unit_index(bytes: u64) -> usize {
    debug_assert!(bytes > 0);
    let index = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    index.min(UNITS.len() - 1)
}

/// Format a byte count as `"<value> <unit>"`, e.g. `1536` -> `"1.5 KiB"`.
///
/// Zero renders as the literal `"0 Bytes"`. The value is rounded to
/// `decimals` fractional digits with insignificant trailing zeros
/// stripped.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let index = unit_index(bytes);
    let value = bytes as f64 / 1024_f64.powi(index as i32);

    let rendered = format!("{value:.decimals$}");
    let rendered = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };

    format!("{} {}", rendered, UNITS[index])
}

/// `format_bytes` with the default two fractional digits.
pub fn human_size(bytes: u64) -> String {
    format_bytes(bytes, 2)
}
