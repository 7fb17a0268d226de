//! The normalized event document, in output field order.
//!
//! Field names on the wire follow the format consumed by the report tooling
//! (`p_id`, `laps`, `best_lap`, ...); the Rust names describe what the values are.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DOCUMENT_VERSION: &str = "1.1";

/// Raw key/value passthrough, in source order.
pub type RawBlock = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDocument {
    pub org_car_version: String,
    pub club: String,
    pub track: String,
    pub event: EventMetadata,
    pub metadata: DocumentMetadata,
    pub official_ranking: Vec<RankingEntry>,
    pub pilots: IndexMap<String, Pilot>,
    pub races: Vec<Race>,
    pub raw_results: RawResults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub title: String,
    pub slug: String,
    #[serde(rename = "date_ini")]
    pub date_declared: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub slots: u32,
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    #[serde(rename = "p_id")]
    pub competitor_id: String,
    pub name: String,
    #[serde(rename = "laps")]
    pub lap_count: u64,
    /// Opaque display string from the device, possibly lap-prefixed.
    pub gap: String,
    #[serde(rename = "best_lap")]
    pub best_lap_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub race_id: u32,
    pub name: String,
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "session")]
    pub session_id: u32,
    /// Keyed by lane number, ascending. Lanes nobody drove are absent.
    pub slots: IndexMap<String, LaneResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneResult {
    #[serde(rename = "p_id")]
    pub competitor_id: String,
    pub name: String,
    #[serde(rename = "laps")]
    pub lap_count: u64,
    #[serde(rename = "best")]
    pub best_lap_seconds: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResults {
    pub laps: RawBlock,
    pub best_times: RawBlock,
    pub gaps: RawBlock,
    pub zones: RawBlock,
    pub penaltys: RawBlock,
}
