// src/errors.rs

//! Crate-wide error type for failures that stop a run before validation.
//!
//! Schema violations are not errors; they are returned as data by
//! [`crate::validate::validate`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, PreflightError>;
