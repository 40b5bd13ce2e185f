// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod schema;
pub mod settings;
pub mod validate;

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use crate::cli::CliArgs;
use crate::config::{IniLoader, RawConfig};
use crate::fs::FileSystem;
use crate::settings::Settings;
use crate::validate::{ValidationResult, validate};

/// Final answer of one check, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    /// `0` when the file passed, `1` when it did not.
    ///
    /// Infrastructure errors never reach a verdict; `main` exits with `2`
    /// for those.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Verdict::Passed => ExitCode::SUCCESS,
            Verdict::Failed => ExitCode::from(1),
        }
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - path resolution against the configured directory
/// - INI loading
/// - validation
/// - the report on stdout
pub fn run(args: &CliArgs, settings: &Settings) -> Result<Verdict> {
    let loader = IniLoader::new(settings);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    check(&loader, &args.file, &mut out)
}

/// Load `identifier` through `loader`, validate it and write the report to
/// `out`.
///
/// Loader failures (missing file, unreadable file, bad INI syntax) are
/// returned as errors and nothing is validated. Everything found by the
/// validator is reported and turned into [`Verdict::Failed`].
pub fn check<F: FileSystem, W: Write>(
    loader: &IniLoader<F>,
    identifier: &str,
    out: &mut W,
) -> Result<Verdict> {
    let path = loader.resolve(identifier);
    let raw = loader
        .load_path(&path)
        .with_context(|| format!("loading configuration {identifier:?}"))?;

    dump_raw(&raw);

    let outcome = guarded(|| validate(&raw));
    write_outcome(&path, outcome.as_ref(), out)
}

/// Run a validation closure, turning a panic into `None` instead of
/// unwinding into the caller.
fn guarded<V: FnOnce() -> ValidationResult>(run: V) -> Option<ValidationResult> {
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(result) => Some(result),
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!(%msg, "validator aborted unexpectedly");
            None
        }
    }
}

/// Report a validation outcome; `None` means the validator did not finish.
fn write_outcome<W: Write>(
    path: &Path,
    outcome: Option<&ValidationResult>,
    out: &mut W,
) -> Result<Verdict> {
    match outcome {
        Some(result) => report(path, result, out),
        None => {
            writeln!(out, "FAIL {}: internal validation error", path.display())?;
            Ok(Verdict::Failed)
        }
    }
}

fn report<W: Write>(path: &Path, result: &ValidationResult, out: &mut W) -> Result<Verdict> {
    match result {
        ValidationResult::Valid(_) => {
            info!(?path, "configuration passed validation");
            writeln!(out, "OK {}: configuration is valid", path.display())?;
            Ok(Verdict::Passed)
        }
        ValidationResult::Invalid(violations) => {
            for v in violations {
                warn!(
                    section = %v.section,
                    field = v.field.as_deref().unwrap_or("-"),
                    reason = %v.reason,
                    "schema violation"
                );
            }
            error!(?path, count = violations.len(), "configuration failed validation");

            writeln!(
                out,
                "FAIL {}: {} violation(s)",
                path.display(),
                violations.len()
            )?;
            for v in violations {
                writeln!(out, "  {v}")?;
            }
            Ok(Verdict::Failed)
        }
    }
}

/// Log the parsed document before it is validated.
fn dump_raw(raw: &RawConfig) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    match toml::to_string(raw) {
        Ok(rendered) => debug!("parsed configuration:\n{rendered}"),
        Err(e) => debug!(error = %e, "could not render parsed configuration"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    #[test]
    fn empty_file_fails_with_both_sections_missing() {
        let fs = MockFileSystem::new().with_file("/cfg/empty.ini", "");
        let loader = IniLoader::with_fs("/cfg", fs);
        let mut out = Vec::new();

        let verdict = check(&loader, "empty", &mut out).unwrap();

        assert_eq!(verdict, Verdict::Failed);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "FAIL /cfg/empty.ini: 2 violation(s)\n  [General]: missing section\n  [Watchdog]: missing section\n"
        );
    }

    #[test]
    fn guarded_passes_results_through() {
        let raw = RawConfig::default();
        let result = guarded(|| validate(&raw)).unwrap();
        assert_eq!(result.violations().len(), 2);
    }

    #[test]
    fn panicking_validator_is_reported_as_failure() {
        let outcome = guarded(|| panic!("coercion blew up"));
        assert!(outcome.is_none());

        let mut out = Vec::new();
        let verdict = write_outcome(Path::new("/cfg/agent.ini"), outcome.as_ref(), &mut out).unwrap();

        assert_eq!(verdict, Verdict::Failed);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "FAIL /cfg/agent.ini: internal validation error\n"
        );
    }
}
