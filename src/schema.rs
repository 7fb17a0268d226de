use crate::err::SchemaError;
use crate::ini::RawConfig;

pub const CONFIG_SECTION: &str = "config";
pub const PILOTS_SECTION: &str = "pilots";
pub const RACES_SECTION: &str = "races";
pub const RESULT_PILOTS_SECTION: &str = "gp_result_pilots";
pub const RESULT_LAPS_SECTION: &str = "gp_result_laps";
pub const RESULT_BEST_TIMES_SECTION: &str = "gp_result_best_times";
pub const RESULT_GAP_SECTION: &str = "gp_result_gap";
pub const RESULT_ZONE_SECTION: &str = "gp_result_zone";
pub const RESULT_PENALTIES_SECTION: &str = "gp_result_penaltys";

/// The first session of the first race; every usable file has it.
pub const BASE_SESSION_SECTION: &str = "race_1_1";

pub const MANDATORY_SECTIONS: [&str; 5] = [
    CONFIG_SECTION,
    PILOTS_SECTION,
    RACES_SECTION,
    RESULT_PILOTS_SECTION,
    RESULT_LAPS_SECTION,
];

/// Checks the structural skeleton of a parsed timing file.
pub fn validate(config: &RawConfig) -> Result<(), SchemaError> {
    let missing_sections: Vec<&'static str> = MANDATORY_SECTIONS
        .iter()
        .copied()
        .filter(|name| !config.has_section(name))
        .collect();
    let missing_base_session = !config.has_section(BASE_SESSION_SECTION);

    if missing_sections.is_empty() && !missing_base_session {
        Ok(())
    } else {
        Err(SchemaError {
            missing_sections,
            missing_base_session,
        })
    }
}
