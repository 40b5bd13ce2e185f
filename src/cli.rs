// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::Parser;

use crate::config::DEFAULT_CONFIG_NAME;

/// Command-line arguments for `ini-preflight`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ini-preflight",
    version,
    about = "Validate an INI configuration file before it is deployed.",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file to check.
    ///
    /// Relative names are looked up in the directory given by `INI_PATH`;
    /// `.ini` is appended when the name has no extension.
    #[arg(short = 'f', long = "file", value_name = "NAME", default_value = DEFAULT_CONFIG_NAME)]
    pub file: String,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_defaults_to_config() {
        let args = CliArgs::try_parse_from(["ini-preflight"]).unwrap();
        assert_eq!(args.file, "config");
    }

    #[test]
    fn short_and_long_file_flag() {
        let args = CliArgs::try_parse_from(["ini-preflight", "-f", "agent"]).unwrap();
        assert_eq!(args.file, "agent");
        let args = CliArgs::try_parse_from(["ini-preflight", "--file", "/tmp/a.ini"]).unwrap();
        assert_eq!(args.file, "/tmp/a.ini");
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(CliArgs::try_parse_from(["ini-preflight", "--once"]).is_err());
    }
}
