// src/config/mod.rs

//! Reading configuration files into raw section maps.
//!
//! Responsibilities:
//! - Define the untyped data model handed to the validator (`model.rs`).
//! - Resolve an identifier against the configured directory and parse the
//!   INI file found there (`loader.rs`).
//!
//! No type coercion happens here; every value stays the string it was in
//! the file.

pub mod loader;
pub mod model;

pub use loader::{DEFAULT_CONFIG_NAME, DEFAULT_SECTION, INI_EXTENSION, IniLoader};
pub use model::{RawConfig, RawSection};
