/// Number of raw device ticks per second.
pub const TICKS_PER_SECOND: f64 = 10_000.0;

/// Parses a lap count or raw time. Anything that is not a non-negative integer reads as 0.
pub fn parse_count(value: &str) -> u64 {
    value.trim().parse::<u64>().unwrap_or(0)
}

/// Converts a raw fixed-point device time into seconds.
pub fn ticks_to_seconds(raw: u64) -> f64 {
    if raw > 0 {
        raw as f64 / TICKS_PER_SECOND
    } else {
        0.0
    }
}

/// `parse_count` followed by `ticks_to_seconds`.
pub fn parse_seconds(value: &str) -> f64 {
    ticks_to_seconds(parse_count(value))
}
