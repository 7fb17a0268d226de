use crate::ini::RawConfig;
use crate::model::EventMetadata;
use crate::schema::CONFIG_SECTION;

use jiff::Timestamp;
use jiff::tz::TimeZone;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_TITLE: &str = "Corrida";
pub const DEFAULT_SLUG: &str = "corrida";

/// `YYYYMMDDHHMMSS`, as embedded in exported file names.
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

static FILENAME_TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{14}").expect("static regex is valid"));

pub fn extract_metadata(config: &RawConfig, input: &Path, now: Timestamp) -> EventMetadata {
    let title = config
        .get_or(CONFIG_SECTION, "name", DEFAULT_TITLE)
        .trim_matches('"')
        .to_owned();

    EventMetadata {
        slug: slugify(&title),
        date_declared: config.get_or(CONFIG_SECTION, "date", "").to_owned(),
        timestamp: timestamp_from_filename(input)
            .unwrap_or_else(|| format_local_timestamp(now)),
        title,
    }
}

/// Makes a URL and filename safe identifier out of an event title.
///
/// `"CONFRATERNIZAÇÃO 2024"` becomes `"confraternizacao_2024"`. Never fails and never returns an
/// empty string.
pub fn slugify(text: &str) -> String {
    let ascii: String = text
        .nfkd()
        .filter(char::is_ascii)
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_ascii_whitespace())
        .collect();

    let slug = ascii
        .split_ascii_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_ascii_lowercase();

    if slug.is_empty() {
        DEFAULT_SLUG.to_owned()
    } else {
        slug
    }
}

/// The first run of 14 digits in the file name, if any.
pub fn timestamp_from_filename(input: &Path) -> Option<String> {
    let name = input.file_name()?.to_string_lossy();
    FILENAME_TIMESTAMP
        .find(&name)
        .map(|m| m.as_str().to_owned())
}

pub fn format_local_timestamp(now: Timestamp) -> String {
    now.to_zoned(TimeZone::system())
        .strftime(TIMESTAMP_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify_strips_accents() {
        assert_eq!(slugify("CONFRATERNIZAÇÃO"), "confraternizacao");
        assert_eq!(slugify("Clássico de Verão"), "classico_de_verao");
    }

    #[test]
    fn test_slugify_drops_punctuation_and_collapses_whitespace() {
        assert_eq!(slugify("  GP   São Paulo!! (8/8) "), "gp_sao_paulo_88");
        assert_eq!(slugify("DTM-E round"), "dtm-e_round");
    }

    #[test]
    fn test_slugify_empty_input_falls_back() {
        assert_eq!(slugify(""), DEFAULT_SLUG);
        assert_eq!(slugify("   "), DEFAULT_SLUG);
        assert_eq!(slugify("!!!"), DEFAULT_SLUG);
    }

    #[test]
    fn test_slugify_is_a_fixed_point_on_its_output() {
        for title in [
            "Noite do GT3",
            "Ação Ñandú Œuvre",
            "1ª Etapa – Final",
            "Corrida",
            "ÀÉÎÕÜ çñ",
        ] {
            let slug = slugify(title);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
                "unexpected char in {slug}"
            );
            assert_eq!(slugify(&slug), slug);
        }
    }

    #[test]
    fn test_timestamp_from_filename() {
        assert_eq!(
            timestamp_from_filename(Path::new("/data/20241012213455_gt3.ini")),
            Some("20241012213455".to_owned())
        );
        assert_eq!(
            timestamp_from_filename(Path::new("/data/20241012213455/gt3.ini")),
            None,
            "only the base name is searched"
        );
        assert_eq!(timestamp_from_filename(Path::new("result.ini")), None);
    }

    #[test]
    fn test_title_is_unquoted_with_fallback() {
        let config = RawConfig::parse("[config]\nname=\"Noite do GT3\"\ndate=12/10/2024\n");
        let now = Timestamp::UNIX_EPOCH;
        let meta = extract_metadata(&config, Path::new("x_20240101120000.ini"), now);

        assert_eq!(meta.title, "Noite do GT3");
        assert_eq!(meta.slug, "noite_do_gt3");
        assert_eq!(meta.date_declared, "12/10/2024");
        assert_eq!(meta.timestamp, "20240101120000");

        let empty = RawConfig::parse("[config]\n");
        let meta = extract_metadata(&empty, Path::new("x.ini"), now);
        assert_eq!(meta.title, DEFAULT_TITLE);
        assert_eq!(meta.slug, DEFAULT_SLUG);
        assert_eq!(meta.timestamp.len(), 14);
    }
}
