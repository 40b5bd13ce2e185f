// src/schema/standard.rs

//! The schema every deployed configuration file is checked against.

use super::field::{FieldKind, FieldSpec, FormatRule, Schema, SectionSpec};

/// Accepted spellings for boolean-like switches. Matching is exact.
pub const BOOL_LITERALS: &[&str] = &["true", "false", "yes", "no", "TRUE", "FALSE", "YES", "NO"];

pub const PACKAGE_TYPES: &[&str] = &["rpm", "deb", "RPM", "DEB"];

/// Non-numeric values allowed for the watchdog memory limits.
pub const MEMORY_LITERALS: &[&str] = &["off", "auto", "OFF", "AUTO"];

const LOCALE_PATTERN: &str = r"^[a-zA-Z]{2}_[A-Z]{2}(\.UTF-8)?$";

const fn boolean(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, FieldKind::Literal(BOOL_LITERALS))
}

const fn integer(name: &'static str, min: i64, max: i64) -> FieldSpec {
    FieldSpec::new(name, FieldKind::Integer { min, max })
}

const GENERAL: &[FieldSpec] = &[
    integer("ScanMemoryLimit", 1024, 8192),
    FieldSpec::new("PackageType", FieldKind::Literal(PACKAGE_TYPES)),
    integer("ExecArgMax", 10, 100),
    boolean("AdditionalDNSLookup"),
    boolean("CoreDumps"),
    boolean("RevealSensitiveInfoInTraces"),
    integer("ExecEnvMax", 10, 100),
    integer("MaxInotifyWatches", 1000, 1_000_000),
    FieldSpec::new("CoreDumpsPath", FieldKind::Formatted(FormatRule::StartsWith("/"))),
    boolean("UseFanotify"),
    boolean("KsvlaMode"),
    FieldSpec::new("MachineId", FieldKind::Uuid),
    boolean("StartupTraces"),
    integer("MaxInotifyInstances", 1024, 8192),
    FieldSpec::new("Locale", FieldKind::Formatted(FormatRule::Pattern(LOCALE_PATTERN))),
];

const WATCHDOG: &[FieldSpec] = &[
    FieldSpec::new(
        "ConnectTimeout",
        FieldKind::Formatted(FormatRule::SuffixedInteger { suffix: 'm', min: 1, max: 120 }),
    ),
    FieldSpec::new("MaxVirtualMemory", FieldKind::NumberOrLiteral(MEMORY_LITERALS)),
    FieldSpec::new("MaxMemory", FieldKind::NumberOrLiteral(MEMORY_LITERALS)),
    integer("PingInterval", 100, 10_000),
];

pub static STANDARD: Schema = Schema::new(&[
    SectionSpec::new("General", GENERAL),
    SectionSpec::new("Watchdog", WATCHDOG),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_general_then_watchdog() {
        let names: Vec<_> = STANDARD.section_names().collect();
        assert_eq!(names, vec!["General", "Watchdog"]);
        assert_eq!(STANDARD.field_count(), 19);
    }

    #[test]
    fn general_field_table() {
        let general = STANDARD.section("General").unwrap();
        assert_eq!(general.fields().len(), 15);
        assert_eq!(general.fields()[0].name, "ScanMemoryLimit");
        assert_eq!(general.fields()[14].name, "Locale");
        assert_eq!(
            general.field("MaxInotifyWatches").unwrap().kind,
            FieldKind::Integer { min: 1000, max: 1_000_000 }
        );
        assert_eq!(
            general.field("KsvlaMode").unwrap().kind,
            FieldKind::Literal(BOOL_LITERALS)
        );
        assert_eq!(general.field("MachineId").unwrap().kind, FieldKind::Uuid);
    }

    #[test]
    fn watchdog_field_table() {
        let watchdog = Schema::standard().section("Watchdog").unwrap();
        let names: Vec<_> = watchdog.fields().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["ConnectTimeout", "MaxVirtualMemory", "MaxMemory", "PingInterval"]
        );
        assert_eq!(
            watchdog.field("PingInterval").unwrap().kind,
            FieldKind::Integer { min: 100, max: 10_000 }
        );
    }
}
