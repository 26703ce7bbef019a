//! Human-readable hash rates.

use alloc::string::String;

const SUFFIXES: [&str; 4] = ["h", "Kh", "Mh", "Gh"];

/// Format a hash rate, e.g. `12.35 Mh`.
///
/// Scales down by 1000 at most three times, so very large rates stay in `Gh`.
pub fn format_hashrate(rate: f64) -> String {
    let mut scaled = rate;
    let mut unit = 0;
    while scaled >= 1000.0 && unit < SUFFIXES.len() - 1 {
        scaled /= 1000.0;
        unit += 1;
    }
    alloc::format!("{:.2} {}", scaled, SUFFIXES[unit])
}
