use encoding::EncodingRef;
use encoding::all::WINDOWS_1252;
use jiff::Timestamp;

use std::fmt;

#[derive(Clone)]
pub struct ConvertSettings {
    club: String,
    track: String,
    /// Pretty print the output with two space indentation.
    indent: bool,
    /// Codec used for files that are not valid UTF-8.
    ansi_codec: EncodingRef,
    /// Fixed clock for `generated_at` and the fallback timestamp.
    now: Option<Timestamp>,
}

impl fmt::Debug for ConvertSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertSettings")
            .field("club", &self.club)
            .field("track", &self.track)
            .field("indent", &self.indent)
            .field("ansi_codec", &self.ansi_codec.name())
            .field("now", &self.now)
            .finish()
    }
}

impl PartialEq for ConvertSettings {
    fn eq(&self, other: &ConvertSettings) -> bool {
        self.ansi_codec.name() == other.ansi_codec.name()
            && self.club == other.club
            && self.track == other.track
            && self.indent == other.indent
            && self.now == other.now
    }
}

impl Default for ConvertSettings {
    fn default() -> Self {
        ConvertSettings {
            club: String::new(),
            track: String::new(),
            indent: true,
            ansi_codec: WINDOWS_1252,
            now: None,
        }
    }
}

impl ConvertSettings {
    pub fn new() -> Self {
        ConvertSettings::default()
    }

    /// Club identifier, stored upper-cased.
    pub fn club(mut self, club: impl AsRef<str>) -> Self {
        self.club = club.as_ref().to_uppercase();
        self
    }

    /// Track identifier, stored upper-cased.
    pub fn track(mut self, track: impl AsRef<str>) -> Self {
        self.track = track.as_ref().to_uppercase();
        self
    }

    pub fn indent(mut self, pretty: bool) -> Self {
        self.indent = pretty;
        self
    }

    pub fn ansi_codec(mut self, ansi_codec: EncodingRef) -> Self {
        self.ansi_codec = ansi_codec;
        self
    }

    /// Pins the clock. Output is byte-for-byte reproducible with a pinned clock.
    pub fn now(mut self, now: Timestamp) -> Self {
        self.now = Some(now);
        self
    }

    pub fn get_club(&self) -> &str {
        &self.club
    }

    pub fn get_track(&self) -> &str {
        &self.track
    }

    pub fn should_indent(&self) -> bool {
        self.indent
    }

    pub fn get_ansi_codec(&self) -> EncodingRef {
        self.ansi_codec
    }

    pub fn get_now(&self) -> Timestamp {
        self.now.unwrap_or_else(Timestamp::now)
    }
}
