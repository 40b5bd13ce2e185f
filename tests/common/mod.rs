#![allow(dead_code)]

use std::error::Error;
use std::path::Path;

use ini_preflight::config::IniLoader;
use ini_preflight::settings::Settings;

pub type TestResult = Result<(), Box<dyn Error>>;

/// Loader reading real files from `dir`.
pub fn loader_for(dir: &Path) -> IniLoader {
    IniLoader::new(&Settings::new(dir))
}
