#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ini_preflight::config::{RawConfig, RawSection};

/// A fully valid `[General]` section, in schema order.
pub const VALID_GENERAL: &[(&str, &str)] = &[
    ("ScanMemoryLimit", "8192"),
    ("PackageType", "rpm"),
    ("ExecArgMax", "10"),
    ("AdditionalDNSLookup", "no"),
    ("CoreDumps", "yes"),
    ("RevealSensitiveInfoInTraces", "NO"),
    ("ExecEnvMax", "100"),
    ("MaxInotifyWatches", "1000000"),
    ("CoreDumpsPath", "/var/opt/kaspersky/kesl/common/dumps"),
    ("UseFanotify", "false"),
    ("KsvlaMode", "FALSE"),
    ("MachineId", "7d2c5a8b-3a1f-4e6d-9c0b-2f4e8a1d6c3e"),
    ("StartupTraces", "yes"),
    ("MaxInotifyInstances", "1024"),
    ("Locale", "en_US.UTF-8"),
];

/// A fully valid `[Watchdog]` section, in schema order.
pub const VALID_WATCHDOG: &[(&str, &str)] = &[
    ("ConnectTimeout", "10m"),
    ("MaxVirtualMemory", "off"),
    ("MaxMemory", "AUTO"),
    ("PingInterval", "10000"),
];

/// Render sections as INI text, preserving the given order.
pub fn render_ini(sections: &[(&str, &[(&str, &str)])]) -> String {
    let mut out = String::new();
    for (name, entries) in sections {
        out.push('[');
        out.push_str(name);
        out.push_str("]\n");
        for (key, value) in entries.iter() {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// INI text of a document that passes validation.
pub fn valid_sample_ini() -> String {
    render_ini(&[("General", VALID_GENERAL), ("Watchdog", VALID_WATCHDOG)])
}

/// Write `contents` as `<dir>/<name>` and return the path.
pub fn write_ini(dir: &Path, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

/// Builder for `RawConfig`, starting from a valid document.
#[derive(Debug, Clone)]
pub struct RawConfigBuilder {
    sections: BTreeMap<String, RawSection>,
}

impl RawConfigBuilder {
    /// Start from the valid sample document.
    pub fn valid() -> Self {
        let mut builder = Self::empty();
        builder = builder.with_section("General", VALID_GENERAL);
        builder.with_section("Watchdog", VALID_WATCHDOG)
    }

    /// Start with no sections at all.
    pub fn empty() -> Self {
        Self {
            sections: BTreeMap::new(),
        }
    }

    pub fn with_section(mut self, name: &str, entries: &[(&str, &str)]) -> Self {
        let section = self.sections.entry(name.to_string()).or_default();
        for (key, value) in entries {
            section.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Set (or add) a single value, creating the section if needed.
    pub fn set(mut self, section: &str, key: &str, value: &str) -> Self {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn remove_field(mut self, section: &str, key: &str) -> Self {
        if let Some(s) = self.sections.get_mut(section) {
            s.remove(key);
        }
        self
    }

    pub fn remove_section(mut self, section: &str) -> Self {
        self.sections.remove(section);
        self
    }

    pub fn build(self) -> RawConfig {
        RawConfig::new(self.sections)
    }
}

impl Default for RawConfigBuilder {
    fn default() -> Self {
        Self::valid()
    }
}
