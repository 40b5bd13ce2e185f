// src/settings.rs

//! Process-wide settings, resolved once at startup.
//!
//! Sources, lowest to highest priority:
//! 1. built-in default (`/var/opt/kaspersky`)
//! 2. `INI_PATH` in a `.env` file in the working directory
//! 3. `INI_PATH` in the process environment
//!
//! The resolved [`Settings`] value is handed to the loader explicitly;
//! nothing else reads the environment.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{PreflightError, Result};

/// Environment variable naming the directory that holds configuration files.
pub const INI_PATH_ENV: &str = "INI_PATH";

pub const DEFAULT_INI_DIR: &str = "/var/opt/kaspersky";

/// Dotenv file consulted by [`Settings::from_env`].
pub const ENV_FILE: &str = ".env";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base directory relative identifiers are resolved against.
    pub ini_dir: PathBuf,
}

impl Settings {
    pub fn new(ini_dir: impl Into<PathBuf>) -> Self {
        Self {
            ini_dir: ini_dir.into(),
        }
    }

    /// Read settings from `./.env` and the process environment.
    pub fn from_env() -> Result<Self> {
        Self::load(Path::new(ENV_FILE), |key| std::env::var(key).ok())
    }

    /// Layer `env_file` (if it exists) under the variables from `lookup`.
    ///
    /// A malformed env file is a parse error; a missing one is skipped.
    pub fn load(env_file: &Path, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(dir) = non_empty(lookup(INI_PATH_ENV)) {
            debug!(%dir, "using {INI_PATH_ENV} from process environment");
            return Ok(Self::new(dir));
        }
        if let Some(dir) = non_empty(read_env_file(env_file)?) {
            debug!(%dir, ?env_file, "using {INI_PATH_ENV} from env file");
            return Ok(Self::new(dir));
        }
        Ok(Self::default())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_INI_DIR)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// Keys match case-insensitively; the last assignment wins.
fn read_env_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let parse_error = |e: dotenvy::Error| PreflightError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut found = None;
    for item in dotenvy::from_path_iter(path).map_err(parse_error)? {
        let (key, value) = item.map_err(parse_error)?;
        if key.eq_ignore_ascii_case(INI_PATH_ENV) {
            found = Some(value);
        }
    }
    Ok(found)
}
