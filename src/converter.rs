use crate::decode::{decode_file_contents, read_raw};
use crate::err::Result;
use crate::ini::{RawConfig, Section};
use crate::metadata::extract_metadata;
use crate::model::{DOCUMENT_VERSION, DocumentMetadata, EventDocument, RawBlock, RawResults};
use crate::races::build_races;
use crate::ranking::{build_pilots, build_ranking};
use crate::schema::{
    RESULT_BEST_TIMES_SECTION, RESULT_GAP_SECTION, RESULT_LAPS_SECTION, RESULT_PENALTIES_SECTION,
    RESULT_ZONE_SECTION, validate,
};
use crate::settings::ConvertSettings;
use crate::slots::detect_slot_count;

use log::debug;

use std::path::{Path, PathBuf};

/// Turns one timing file into an [`EventDocument`].
///
/// ```no_run
/// use slotchrono::{ConvertSettings, EventConverter};
///
/// let document = EventConverter::from_path("20241012213455_gt3.ini")
///     .unwrap()
///     .with_configuration(ConvertSettings::new().club("asa").track("azul"))
///     .convert()
///     .unwrap();
///
/// println!("{} races", document.races.len());
/// ```
pub struct EventConverter {
    input: PathBuf,
    data: Vec<u8>,
    settings: ConvertSettings,
}

impl EventConverter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = read_raw(path)?;

        Ok(EventConverter {
            input: path.to_path_buf(),
            data,
            settings: ConvertSettings::default(),
        })
    }

    /// `file_name` takes the place of the input path; its base name may carry the event timestamp.
    pub fn from_buffer(data: Vec<u8>, file_name: impl AsRef<Path>) -> Self {
        EventConverter {
            input: file_name.as_ref().to_path_buf(),
            data,
            settings: ConvertSettings::default(),
        }
    }

    pub fn with_configuration(mut self, configuration: ConvertSettings) -> Self {
        self.settings = configuration;
        self
    }

    pub fn settings(&self) -> &ConvertSettings {
        &self.settings
    }

    /// Decodes and parses the input, without validating it.
    pub fn raw_config(&self) -> Result<RawConfig> {
        let text = decode_file_contents(
            self.data.clone(),
            &self.input,
            self.settings.get_ansi_codec(),
        )?;

        Ok(RawConfig::parse(&text))
    }

    pub fn convert(&self) -> Result<EventDocument> {
        let config = self.raw_config()?;
        validate(&config)?;

        let now = self.settings.get_now();
        let slot_count = detect_slot_count(&config);

        debug!("Building event document for {}", self.input.display());

        Ok(EventDocument {
            org_car_version: DOCUMENT_VERSION.to_owned(),
            club: self.settings.get_club().to_owned(),
            track: self.settings.get_track().to_owned(),
            event: extract_metadata(&config, &self.input, now),
            metadata: DocumentMetadata {
                slots: slot_count,
                generated_at: now.to_string(),
            },
            official_ranking: build_ranking(&config),
            pilots: build_pilots(&config),
            races: build_races(&config, slot_count),
            raw_results: RawResults {
                laps: raw_block(config.section(RESULT_LAPS_SECTION)),
                best_times: raw_block(config.section(RESULT_BEST_TIMES_SECTION)),
                gaps: raw_block(config.section(RESULT_GAP_SECTION)),
                zones: raw_block(config.section(RESULT_ZONE_SECTION)),
                penaltys: raw_block(config.section(RESULT_PENALTIES_SECTION)),
            },
        })
    }
}

/// Verbatim copy of a section, empty when the section is absent.
fn raw_block(section: Option<&Section>) -> RawBlock {
    section.cloned().unwrap_or_default()
}
