#![deny(unused_must_use)]
#![forbid(unsafe_code)]
// Don't allow dbg! prints in release.
#![cfg_attr(not(debug_assertions), deny(clippy::dbg_macro))]

pub mod converter;
pub mod decode;
pub mod err;
pub mod humanize;
pub mod ini;
pub mod json_output;
pub mod metadata;
pub mod model;
pub mod races;
pub mod ranking;
pub mod schema;
pub mod settings;
pub mod slots;
pub mod standings;
pub mod units;

pub use converter::EventConverter;
pub use err::{ConvertError, Result};
pub use humanize::humanize;
pub use ini::RawConfig;
pub use json_output::{STDOUT_SENTINEL, to_json_string, write_output};
pub use metadata::slugify;
pub use model::{EventDocument, LaneResult, Race, RankingEntry, Session};
pub use settings::ConvertSettings;
pub use standings::Standings;

// Reexport so downstream users can name codecs without depending on `encoding` directly.
pub use encoding;
