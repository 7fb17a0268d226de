use crate::ini::{self, RawConfig, Section};
use crate::model::{LaneResult, Race, Session};
use crate::slots::slot_of_key;
use crate::units::{parse_count, parse_seconds};

use indexmap::IndexMap;
use log::{info, warn};
use regex::Regex;

use std::collections::BTreeMap;
use std::sync::LazyLock;

static RACE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^race_(\d+)_(\d+)$").expect("static regex is valid"));

/// `(race_id, session_id)` for a section named `race_<r>_<s>`.
///
/// Zero or out of range ids are rejected.
pub fn parse_race_section(name: &str) -> Option<(u32, u32)> {
    let caps = RACE_SECTION.captures(name)?;
    let race_id = caps[1].parse::<u32>().ok().filter(|id| *id > 0);
    let session_id = caps[2].parse::<u32>().ok().filter(|id| *id > 0);

    match (race_id, session_id) {
        (Some(r), Some(s)) => Some((r, s)),
        _ => {
            warn!("Ignoring section `{}`: race and session ids must be positive", name);
            None
        }
    }
}

/// Groups every `race_<r>_<s>` section into races and sessions, both ascending by id.
pub fn build_races(config: &RawConfig, slot_count: u32) -> Vec<Race> {
    let mut grouped: BTreeMap<u32, BTreeMap<u32, &Section>> = BTreeMap::new();

    for name in config.section_names() {
        if let Some((race_id, session_id)) = parse_race_section(name) {
            if let Some(section) = config.section(name) {
                grouped
                    .entry(race_id)
                    .or_default()
                    .insert(session_id, section);
            }
        }
    }

    let races: Vec<Race> = grouped
        .into_iter()
        .map(|(race_id, sessions)| Race {
            race_id,
            name: format!("Bateria {race_id}"),
            sessions: sessions
                .into_iter()
                .map(|(session_id, section)| build_session(session_id, section, slot_count))
                .collect(),
        })
        .collect();

    info!(
        "Grouped {} races with {} sessions",
        races.len(),
        races.iter().map(|r| r.sessions.len()).sum::<usize>()
    );

    races
}

fn build_session(session_id: u32, section: &Section, slot_count: u32) -> Session {
    // Only lanes this section mentions; lane numbers in other sections may be huge.
    let mut lanes: Vec<u32> = section
        .keys()
        .filter_map(|key| slot_of_key(key))
        .filter(|slot| (1..=slot_count).contains(slot))
        .collect();
    lanes.sort_unstable();
    lanes.dedup();

    let slots: IndexMap<String, LaneResult> = lanes
        .into_iter()
        .filter_map(|slot| lane_result(section, slot).map(|lane| (slot.to_string(), lane)))
        .collect();

    Session { session_id, slots }
}

/// `None` when nobody drove the lane in this session.
fn lane_result(section: &Section, slot: u32) -> Option<LaneResult> {
    let field = |name: &str, default: &'static str| -> String {
        ini::get_or(section, &format!("slot_{slot}_{name}"), default).to_owned()
    };

    let pilot_name = field("pilot_name", "");
    let pilot_name = pilot_name.trim();
    if pilot_name.is_empty() {
        return None;
    }

    Some(LaneResult {
        competitor_id: field("pilot_number", "0"),
        name: pilot_name.to_owned(),
        lap_count: parse_count(&field("laps", "0")),
        best_lap_seconds: parse_seconds(&field("best", "0")),
    })
}
