// src/validate/report.rs

use std::fmt;

use crate::validate::typed::TypedConfig;

/// Why a single section or field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationReason {
    MissingSection,
    MissingField,
    NotNumeric,
    NotAllowedLiteral,
    NotNumericOrLiteral,
    NotValidUuid,
    OutOfRange,
    PatternMismatch,
    MissingPrefix(&'static str),
    MissingSuffix(char),
    PrefixOutOfRange { min: i64, max: i64 },
    /// The schema rule itself could not be evaluated.
    InvalidRule(String),
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationReason::MissingSection => f.write_str("missing section"),
            ViolationReason::MissingField => f.write_str("missing field"),
            ViolationReason::NotNumeric => f.write_str("not numeric"),
            ViolationReason::NotAllowedLiteral => f.write_str("not an allowed literal"),
            ViolationReason::NotNumericOrLiteral => {
                f.write_str("neither numeric nor an allowed literal")
            }
            ViolationReason::NotValidUuid => f.write_str("not a valid UUID"),
            ViolationReason::OutOfRange => f.write_str("out of range"),
            ViolationReason::PatternMismatch => f.write_str("pattern mismatch"),
            ViolationReason::MissingPrefix(prefix) => write!(f, "must start with '{prefix}'"),
            ViolationReason::MissingSuffix(suffix) => write!(f, "must end with '{suffix}'"),
            ViolationReason::PrefixOutOfRange { min, max } => {
                write!(f, "numeric prefix out of range {min}–{max}")
            }
            ViolationReason::InvalidRule(msg) => write!(f, "schema rule could not be applied: {msg}"),
        }
    }
}

/// One failed rule against one section or field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub section: String,
    /// `None` when the whole section is missing.
    pub field: Option<String>,
    /// `None` when there was no value to check.
    pub raw_value: Option<String>,
    pub reason: ViolationReason,
}

impl Violation {
    pub fn missing_section(section: &str) -> Self {
        Self {
            section: section.to_string(),
            field: None,
            raw_value: None,
            reason: ViolationReason::MissingSection,
        }
    }

    pub fn missing_field(section: &str, field: &str) -> Self {
        Self {
            section: section.to_string(),
            field: Some(field.to_string()),
            raw_value: None,
            reason: ViolationReason::MissingField,
        }
    }

    pub fn invalid_value(section: &str, field: &str, raw: &str, reason: ViolationReason) -> Self {
        Self {
            section: section.to_string(),
            field: Some(field.to_string()),
            raw_value: Some(raw.to_string()),
            reason,
        }
    }

    /// `Section.Field`, or just `Section` for section-level violations.
    pub fn location(&self) -> String {
        match &self.field {
            Some(field) => format!("{}.{}", self.section, field),
            None => self.section.clone(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.section)?;
        if let Some(field) = &self.field {
            write!(f, " {field}")?;
        }
        if let Some(raw) = &self.raw_value {
            write!(f, " = {raw:?}")?;
        }
        write!(f, ": {}", self.reason)
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(TypedConfig),
    /// Every violation found, in schema declaration order. Never empty.
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// Violations in order; empty for a valid document.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Invalid(v) => v,
        }
    }

    pub fn typed(&self) -> Option<&TypedConfig> {
        match self {
            ValidationResult::Valid(cfg) => Some(cfg),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn into_result(self) -> Result<TypedConfig, Vec<Violation>> {
        match self {
            ValidationResult::Valid(cfg) => Ok(cfg),
            ValidationResult::Invalid(v) => Err(v),
        }
    }
}
