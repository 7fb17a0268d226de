use crate::ini::RawConfig;
use crate::model::{Pilot, RankingEntry};
use crate::schema::{
    PILOTS_SECTION, RESULT_BEST_TIMES_SECTION, RESULT_GAP_SECTION, RESULT_LAPS_SECTION,
    RESULT_PILOTS_SECTION,
};
use crate::units::{parse_count, parse_seconds};

use indexmap::IndexMap;

/// Official ranking, in the order the device listed it. It is not re-sorted.
pub fn build_ranking(config: &RawConfig) -> Vec<RankingEntry> {
    let Some(result_pilots) = config.section(RESULT_PILOTS_SECTION) else {
        return Vec::new();
    };

    result_pilots
        .iter()
        .map(|(id, name)| RankingEntry {
            competitor_id: id.clone(),
            name: unquote(name).to_owned(),
            lap_count: parse_count(config.get_or(RESULT_LAPS_SECTION, id, "0")),
            gap: config.get_or(RESULT_GAP_SECTION, id, "0").to_owned(),
            best_lap_seconds: parse_seconds(config.get_or(RESULT_BEST_TIMES_SECTION, id, "0")),
        })
        .collect()
}

/// Registered pilots by id.
pub fn build_pilots(config: &RawConfig) -> IndexMap<String, Pilot> {
    config
        .section(PILOTS_SECTION)
        .map(|pilots| {
            pilots
                .iter()
                .map(|(id, name)| {
                    (
                        id.clone(),
                        Pilot {
                            name: unquote(name).to_owned(),
                        },
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}
