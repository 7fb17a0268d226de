use crate::ini::RawConfig;

use log::debug;
use regex::Regex;

use std::sync::LazyLock;

static SLOT_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^slot_(\d+)_").expect("static regex is valid"));

/// Lane number encoded in a key such as `slot_3_pilot_name`.
pub fn slot_of_key(key: &str) -> Option<u32> {
    SLOT_KEY
        .captures(key)
        .and_then(|caps| caps[1].parse::<u32>().ok())
}

/// Highest lane number referenced anywhere in the file, 0 when no lane key exists.
///
/// Track hardware varies, so the lane count is never assumed.
pub fn detect_slot_count(config: &RawConfig) -> u32 {
    let max_slot = config
        .all_keys()
        .filter_map(slot_of_key)
        .max()
        .unwrap_or(0);

    debug!("Detected {} slots", max_slot);
    max_slot
}
