// src/config/model.rs

use std::collections::BTreeMap;

use serde::Serialize;

/// Key/value pairs of a single section, exactly as written in the file.
pub type RawSection = BTreeMap<String, String>;

/// Parsed but unvalidated configuration: section name -> key -> raw value.
///
/// Mirrors a file such as:
///
/// ```ini
/// [General]
/// ScanMemoryLimit=2048
/// PackageType=rpm
///
/// [Watchdog]
/// ConnectTimeout=30m
/// ```
///
/// Section and key names are case-sensitive. The map is never modified once
/// built; the validator only borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawConfig {
    sections: BTreeMap<String, RawSection>,
}

impl RawConfig {
    pub fn new(sections: BTreeMap<String, RawSection>) -> Self {
        Self { sections }
    }

    pub fn section(&self, name: &str) -> Option<&RawSection> {
        self.sections.get(name)
    }

    /// Raw value of `section.key`, if both exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, RawSection> {
        self.sections
    }
}

impl From<BTreeMap<String, RawSection>> for RawConfig {
    fn from(sections: BTreeMap<String, RawSection>) -> Self {
        Self::new(sections)
    }
}

impl<S, K, V, I> FromIterator<(S, I)> for RawConfig
where
    S: Into<String>,
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        let sections = iter
            .into_iter()
            .map(|(name, entries)| {
                let entries = entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect();
                (name.into(), entries)
            })
            .collect();
        Self { sections }
    }
}
