// src/config/loader.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use tracing::{debug, info};

use crate::config::model::{RawConfig, RawSection};
use crate::errors::{PreflightError, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::settings::Settings;

/// Identifier used when the CLI is given no `--file`.
pub const DEFAULT_CONFIG_NAME: &str = "config";

pub const INI_EXTENSION: &str = "ini";

/// Loads INI files from a base directory into [`RawConfig`].
#[derive(Debug, Clone)]
pub struct IniLoader<F: FileSystem = RealFileSystem> {
    ini_dir: PathBuf,
    fs: F,
}

impl IniLoader<RealFileSystem> {
    pub fn new(settings: &Settings) -> Self {
        Self::with_fs(settings.ini_dir.clone(), RealFileSystem)
    }
}

impl<F: FileSystem> IniLoader<F> {
    pub fn with_fs(ini_dir: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            ini_dir: ini_dir.into(),
            fs,
        }
    }

    pub fn ini_dir(&self) -> &Path {
        &self.ini_dir
    }

    /// Turn a config identifier into the path that will be read.
    ///
    /// - Absolute identifiers are used as-is.
    /// - Relative identifiers are joined onto the configured directory.
    /// - An identifier without an extension gets `.ini` appended, so
    ///   `"config"` and `"config.ini"` name the same file.
    pub fn resolve(&self, identifier: &str) -> PathBuf {
        let mut path = PathBuf::from(identifier);
        if path.extension().is_none() {
            path.set_extension(INI_EXTENSION);
        }
        if path.is_absolute() {
            path
        } else {
            self.ini_dir.join(path)
        }
    }

    /// Resolve `identifier` and load the file it names.
    pub fn load(&self, identifier: &str) -> Result<RawConfig> {
        self.load_path(&self.resolve(identifier))
    }

    /// Read and parse an INI file at an already resolved path.
    pub fn load_path(&self, path: &Path) -> Result<RawConfig> {
        debug!(?path, "loading INI configuration");

        if !self.fs.exists(path) {
            return Err(PreflightError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = self
            .fs
            .read_to_string(path)
            .map_err(|source| PreflightError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let raw = parse_ini(&contents).map_err(|message| PreflightError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        info!(?path, sections = raw.len(), "configuration file loaded");
        Ok(raw)
    }
}

/// Section whose keys are inherited by every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Parse INI text into sections, keeping every value verbatim.
///
/// Beyond the grammar itself this rejects what a strict INI reader would:
/// keys outside any section, a section header repeated, or a key repeated
/// within one section.
///
/// `[DEFAULT]` is not returned as a section. Its keys are copied into every
/// other section that does not set them itself.
pub fn parse_ini(contents: &str) -> std::result::Result<RawConfig, String> {
    let opt = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(contents, opt).map_err(|e| e.to_string())?;

    let mut sections: BTreeMap<String, RawSection> = BTreeMap::new();
    let mut defaults: Option<RawSection> = None;

    for (name, props) in ini.iter() {
        let Some(name) = name else {
            if let Some((key, _)) = props.iter().next() {
                return Err(format!("key '{key}' appears before any [section] header"));
            }
            continue;
        };

        let seen = if name == DEFAULT_SECTION {
            defaults.is_some()
        } else {
            sections.contains_key(name)
        };
        if seen {
            return Err(format!("section [{name}] is declared more than once"));
        }

        let mut entries = RawSection::new();
        for (key, value) in props.iter() {
            if entries.insert(key.to_string(), value.to_string()).is_some() {
                return Err(format!("key '{key}' is repeated in section [{name}]"));
            }
        }

        if name == DEFAULT_SECTION {
            defaults = Some(entries);
        } else {
            sections.insert(name.to_string(), entries);
        }
    }

    if let Some(defaults) = defaults {
        for entries in sections.values_mut() {
            for (key, value) in &defaults {
                entries.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
    }

    Ok(RawConfig::new(sections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    fn loader(fs: MockFileSystem) -> IniLoader<MockFileSystem> {
        IniLoader::with_fs("/etc/agent", fs)
    }

    #[test]
    fn resolve_appends_extension_and_joins_base() {
        let l = loader(MockFileSystem::new());
        assert_eq!(l.resolve("config"), PathBuf::from("/etc/agent/config.ini"));
        assert_eq!(l.resolve("config.ini"), PathBuf::from("/etc/agent/config.ini"));
        assert_eq!(l.resolve("sub/other.conf"), PathBuf::from("/etc/agent/sub/other.conf"));
        assert_eq!(l.resolve("/tmp/x.ini"), PathBuf::from("/tmp/x.ini"));
    }

    #[test]
    fn load_preserves_case_and_raw_values() {
        let fs = MockFileSystem::new().with_file(
            "/etc/agent/config.ini",
            "[General]\nScanMemoryLimit = 2048\nLocale=\"en_US\"\n\n[Watchdog]\nConnectTimeout=30m\n",
        );
        let raw = loader(fs).load("config").unwrap();

        assert_eq!(raw.get("General", "ScanMemoryLimit"), Some("2048"));
        assert_eq!(raw.get("General", "Locale"), Some("\"en_US\""));
        assert_eq!(raw.get("Watchdog", "ConnectTimeout"), Some("30m"));
        assert_eq!(raw.get("general", "ScanMemoryLimit"), None);
        assert_eq!(raw.get("General", "scanmemorylimit"), None);
    }

    #[test]
    fn missing_file_is_reported_before_reading() {
        let err = loader(MockFileSystem::new()).load("absent").unwrap_err();
        match err {
            PreflightError::FileNotFound { path } => {
                assert_eq!(path, PathBuf::from("/etc/agent/absent.ini"))
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let fs = MockFileSystem::new().with_file("/etc/agent/bin.ini", vec![0xffu8, 0xfe, 0x00]);
        let err = loader(fs).load("bin").unwrap_err();
        assert!(matches!(err, PreflightError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = parse_ini("[General]\nCoreDumps=yes\nCoreDumps=no\n").unwrap_err();
        assert!(err.contains("CoreDumps"), "{err}");
    }

    #[test]
    fn rejects_duplicate_sections() {
        let err = parse_ini("[Watchdog]\nPingInterval=100\n[Watchdog]\nMaxMemory=off\n").unwrap_err();
        assert!(err.contains("[Watchdog]"), "{err}");
    }

    #[test]
    fn default_section_is_inherited_not_listed() {
        let raw = parse_ini(
            "[DEFAULT]\nCoreDumps=no\nPingInterval=500\n\n[General]\nCoreDumps=yes\n\n[Watchdog]\nMaxMemory=off\n",
        )
        .unwrap();

        assert_eq!(raw.section_names().collect::<Vec<_>>(), vec!["General", "Watchdog"]);
        assert_eq!(raw.get("General", "CoreDumps"), Some("yes"));
        assert_eq!(raw.get("General", "PingInterval"), Some("500"));
        assert_eq!(raw.get("Watchdog", "CoreDumps"), Some("no"));
        assert_eq!(raw.get("Watchdog", "MaxMemory"), Some("off"));
    }

    #[test]
    fn rejects_duplicate_default_sections() {
        let err = parse_ini("[DEFAULT]\nA=1\n[DEFAULT]\nB=2\n").unwrap_err();
        assert!(err.contains("[DEFAULT]"), "{err}");
    }

    #[test]
    fn inline_comment_markers_stay_in_the_value() {
        let raw = parse_ini("[General]\nLocale = en_US ; note\n").unwrap();
        assert_eq!(raw.get("General", "Locale"), Some("en_US ; note"));
    }

    #[test]
    fn rejects_keys_outside_sections() {
        let err = parse_ini("CoreDumps=yes\n[General]\n").unwrap_err();
        assert!(err.contains("before any [section]"), "{err}");
    }

    #[test]
    fn parse_errors_carry_the_path() {
        let fs = MockFileSystem::new().with_file("/etc/agent/broken.ini", "[General\nA=1\n");
        let err = loader(fs).load("broken").unwrap_err();
        match err {
            PreflightError::Parse { path, .. } => {
                assert_eq!(path, PathBuf::from("/etc/agent/broken.ini"))
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_yields_no_sections() {
        assert!(parse_ini("").unwrap().is_empty());
        assert!(parse_ini("; comment only\n").unwrap().is_empty());
    }
}
