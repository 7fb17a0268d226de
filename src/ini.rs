//! Section-delimited key/value parser for timing device result files.
//!
//! The dialect is deliberately forgiving: malformed lines are skipped, repeated sections merge and
//! repeated keys keep their first position with the last value. Section and key names are
//! case-insensitive; both are stored lower-cased in file order.

use indexmap::IndexMap;
use log::warn;

pub type Section = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    sections: IndexMap<String, Section>,
}

impl RawConfig {
    pub fn parse(text: &str) -> Self {
        let mut sections: IndexMap<String, Section> = IndexMap::new();
        let mut current: Option<String> = None;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim().to_lowercase();
                sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let Some(section) = current.as_ref().and_then(|name| sections.get_mut(name)) else {
                warn!("Line {}: entry outside of any section, skipping", line_no + 1);
                continue;
            };

            match split_entry(line) {
                Some((key, value)) => {
                    section.insert(key, value.to_owned());
                }
                None => warn!("Line {}: malformed entry `{}`, skipping", line_no + 1, line),
            }
        }

        RawConfig { sections }
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(&name.to_lowercase())
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(&name.to_lowercase())
    }

    /// Section names in file order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Every key of every section, in file order.
    pub fn all_keys(&self) -> impl Iterator<Item = &str> {
        self.sections
            .values()
            .flat_map(|section| section.keys().map(String::as_str))
    }

    /// Looks up `key` in `section`, returning `default` when either is absent.
    pub fn get_or<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.section(section)
            .map(|s| get_or(s, key, default))
            .unwrap_or(default)
    }
}

/// Case-insensitive lookup inside a single section.
pub fn get_or<'a>(section: &'a Section, key: &str, default: &'a str) -> &'a str {
    section
        .get(&key.to_lowercase())
        .map(String::as_str)
        .unwrap_or(default)
}

/// Splits `key = value` (or `key: value`) on the first delimiter.
fn split_entry(line: &str) -> Option<(String, &str)> {
    let idx = line.find(['=', ':'])?;
    let key = line[..idx].trim();

    if key.is_empty() {
        return None;
    }

    Some((key.to_lowercase(), line[idx + 1..].trim()))
}
