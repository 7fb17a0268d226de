//! Per-pilot standings summarised from a converted [`EventDocument`].
//!
//! The official ranking stays authoritative for lap totals and gaps; everything else
//! (sessions driven, best lap, lane breakdowns) is collected from the race sessions.

use crate::model::EventDocument;
use crate::units::parse_count;

use indexmap::IndexMap;
use serde::Serialize;

/// Lane colours, indexed by lane number starting at 1.
pub const LANE_NAMES: [&str; 8] = [
    "Vermelha", "Branca", "Verde", "Laranja", "Azul", "Amarela", "Roxa", "Preta",
];

const NO_TIME: &str = "---";
const DEFAULT_ZONE: &str = "000";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PilotStanding {
    pub competitor_id: String,
    pub name: String,
    pub total_laps: u64,
    pub penalties: u64,
    pub zone: String,
    pub gap: String,
    pub sessions: u64,
    pub best_time: String,
    /// Laps per counted session, one decimal with a comma separator (`"12,5"`).
    pub average_laps: String,
    pub is_overall_best: bool,
    pub best_lane_name: String,
    pub laps_per_lane: IndexMap<String, u64>,
    pub times_per_lane: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings {
    pub pilots: Vec<PilotStanding>,
    /// `None` when nobody set a lap time.
    pub overall_best_time: Option<String>,
    pub best_time_per_lane: IndexMap<String, String>,
}

pub fn lane_name(lane: u32) -> &'static str {
    (lane as usize)
        .checked_sub(1)
        .and_then(|idx| LANE_NAMES.get(idx))
        .copied()
        .unwrap_or(NO_TIME)
}

fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.3}")
}

impl Standings {
    pub fn from_document(document: &EventDocument) -> Self {
        let mut pilots: Vec<PilotStanding> = Vec::with_capacity(document.pilots.len());
        let mut overall_best: Option<f64> = None;
        let mut pilot_best_times: Vec<Option<f64>> = Vec::with_capacity(document.pilots.len());
        let mut best_per_lane: IndexMap<String, f64> = IndexMap::new();

        for (id, pilot) in &document.pilots {
            let mut summed_laps: u64 = 0;
            let mut sessions = 0;
            let mut best: Option<(f64, u32)> = None;
            let mut laps_per_lane = IndexMap::new();
            let mut times_per_lane = IndexMap::new();

            let lanes = document
                .races
                .iter()
                .flat_map(|race| race.sessions.iter())
                .flat_map(|session| session.slots.iter())
                .filter(|(_, lane)| lane.competitor_id == *id);

            for (lane_key, lane) in lanes {
                if lane.lap_count > 0 {
                    sessions += 1;
                }
                summed_laps = summed_laps.saturating_add(lane.lap_count);
                laps_per_lane.insert(lane_key.clone(), lane.lap_count);

                let time = lane.best_lap_seconds;
                if time > 0.0 {
                    times_per_lane.insert(lane_key.clone(), format_seconds(time));

                    let lane_best = best_per_lane.entry(lane_key.clone()).or_insert(time);
                    *lane_best = lane_best.min(time);

                    if best.is_none_or(|(current, _)| time < current) {
                        best = Some((time, lane_key.parse().unwrap_or(1)));
                    }
                } else {
                    times_per_lane.insert(lane_key.clone(), NO_TIME.to_owned());
                }
            }

            if let Some((time, _)) = best {
                if overall_best.is_none_or(|current| time < current) {
                    overall_best = Some(time);
                }
            }

            let official = document
                .official_ranking
                .iter()
                .find(|entry| entry.competitor_id == *id);
            let total_laps = official.map_or(summed_laps, |entry| entry.lap_count);
            let gap = official.map_or_else(|| "0".to_owned(), |entry| entry.gap.clone());

            let average = if sessions > 0 {
                total_laps as f64 / sessions as f64
            } else {
                0.0
            };

            pilot_best_times.push(best.map(|(time, _)| time));
            pilots.push(PilotStanding {
                competitor_id: id.clone(),
                name: pilot.name.clone(),
                total_laps,
                penalties: document
                    .raw_results
                    .penaltys
                    .get(id)
                    .map_or(0, |p| parse_count(p)),
                zone: document
                    .raw_results
                    .zones
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_ZONE.to_owned()),
                gap,
                sessions,
                best_time: format_seconds(best.map_or(0.0, |(time, _)| time)),
                average_laps: format!("{average:.1}").replace('.', ","),
                is_overall_best: false,
                best_lane_name: lane_name(best.map_or(1, |(_, lane)| lane)).to_owned(),
                laps_per_lane,
                times_per_lane,
            });
        }

        // Ties are judged on the displayed precision.
        if let Some(overall) = overall_best.map(format_seconds) {
            for (standing, best) in pilots.iter_mut().zip(&pilot_best_times) {
                standing.is_overall_best = best.map(format_seconds).as_ref() == Some(&overall);
            }
        }

        pilots.sort_by(|a, b| b.total_laps.cmp(&a.total_laps));

        Standings {
            pilots,
            overall_best_time: overall_best.map(format_seconds),
            best_time_per_lane: best_per_lane
                .into_iter()
                .map(|(lane, time)| (lane, format_seconds(time)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventConverter;
    use jiff::Timestamp;
    use pretty_assertions::assert_eq;

    const EVENT: &str = "\
[config]
name=Teste
[pilots]
7=Ayrton
12=Nelson
30=Emerson
[races]
count=1
[gp_result_pilots]
12=Nelson
7=Ayrton
[gp_result_laps]
12=40
7=38
[gp_result_gap]
7=2 laps
[gp_result_penaltys]
7=1
[gp_result_zone]
12=123
[race_1_1]
slot_1_pilot_name=Ayrton
slot_1_pilot_number=7
slot_1_laps=20
slot_1_best=99000
slot_2_pilot_name=Nelson
slot_2_pilot_number=12
slot_2_laps=21
slot_2_best=98000
[race_1_2]
slot_1_pilot_name=Nelson
slot_1_pilot_number=12
slot_1_laps=19
slot_1_best=0
slot_2_pilot_name=Ayrton
slot_2_pilot_number=7
slot_2_laps=18
slot_2_best=97500
";

    fn standings_of(text: &str) -> Standings {
        let document = EventConverter::from_buffer(text.as_bytes().to_vec(), "event.ini")
            .with_configuration(crate::ConvertSettings::new().now(Timestamp::UNIX_EPOCH))
            .convert()
            .unwrap();
        Standings::from_document(&document)
    }

    fn standings() -> Standings {
        standings_of(EVENT)
    }

    const UNRANKED_HEADER: &str = "\
[config]
[pilots]
7=Ayrton
12=Nelson
[races]
[gp_result_pilots]
[gp_result_laps]
";

    #[test]
    fn test_sorted_by_official_laps() {
        let standings = standings();

        assert_eq!(
            standings
                .pilots
                .iter()
                .map(|p| (p.competitor_id.as_str(), p.total_laps))
                .collect::<Vec<_>>(),
            vec![("12", 40), ("7", 38), ("30", 0)]
        );
    }

    #[test]
    fn test_pilot_breakdown() {
        let standings = standings();
        let ayrton = &standings.pilots[1];

        assert_eq!(ayrton.sessions, 2);
        assert_eq!(ayrton.best_time, "9.750");
        assert_eq!(ayrton.best_lane_name, "Branca");
        assert_eq!(ayrton.average_laps, "19,0");
        assert_eq!(ayrton.gap, "2 laps");
        assert_eq!(ayrton.penalties, 1);
        assert_eq!(ayrton.zone, "000");
        assert!(ayrton.is_overall_best);
        assert_eq!(ayrton.times_per_lane["1"], "9.900");

        let nelson = &standings.pilots[0];
        assert_eq!(nelson.zone, "123");
        assert_eq!(nelson.gap, "0");
        assert_eq!(nelson.times_per_lane["1"], "---");
        assert!(!nelson.is_overall_best);
    }

    #[test]
    fn test_pilot_who_never_drove() {
        let standings = standings();
        let emerson = &standings.pilots[2];

        assert_eq!(emerson.sessions, 0);
        assert_eq!(emerson.best_time, "0.000");
        assert_eq!(emerson.average_laps, "0,0");
        assert_eq!(emerson.best_lane_name, "Vermelha");
        assert!(emerson.laps_per_lane.is_empty());
    }

    #[test]
    fn test_overall_and_per_lane_bests() {
        let standings = standings();

        assert_eq!(standings.overall_best_time.as_deref(), Some("9.750"));
        assert_eq!(standings.best_time_per_lane["1"], "9.900");
        assert_eq!(standings.best_time_per_lane["2"], "9.750");
    }

    #[test]
    fn test_lane_names() {
        assert_eq!(lane_name(1), "Vermelha");
        assert_eq!(lane_name(8), "Preta");
        assert_eq!(lane_name(0), "---");
        assert_eq!(lane_name(9), "---");
    }

    #[test]
    fn test_summed_laps_saturate() {
        let standings = standings_of(&format!(
            "{UNRANKED_HEADER}\
[race_1_1]
slot_1_pilot_name=Ayrton
slot_1_pilot_number=7
slot_1_laps=18446744073709551615
[race_1_2]
slot_1_pilot_name=Ayrton
slot_1_pilot_number=7
slot_1_laps=18446744073709551615
"
        ));

        assert_eq!(standings.pilots[0].competitor_id, "7");
        assert_eq!(standings.pilots[0].total_laps, u64::MAX);
        assert_eq!(standings.pilots[0].sessions, 2);
    }

    #[test]
    fn test_times_equal_at_display_precision_share_overall_best() {
        let standings = standings_of(&format!(
            "{UNRANKED_HEADER}\
[race_1_1]
slot_1_pilot_name=Ayrton
slot_1_pilot_number=7
slot_1_laps=10
slot_1_best=97500
slot_2_pilot_name=Nelson
slot_2_pilot_number=12
slot_2_laps=10
slot_2_best=97504
"
        ));

        assert_eq!(standings.overall_best_time.as_deref(), Some("9.750"));
        assert!(standings.pilots.iter().all(|p| p.is_overall_best));
    }
}
