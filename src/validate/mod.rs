// src/validate/mod.rs

//! Checks a [`RawConfig`] against a [`Schema`].
//!
//! Sections are visited in schema order and fields in declaration order, so
//! the violation list is the same on every run for the same input. The
//! validator never fails: every problem ends up in
//! [`ValidationResult::Invalid`].

pub mod coerce;
pub mod report;
pub mod typed;

use tracing::{debug, trace};

use crate::config::RawConfig;
use crate::schema::Schema;

pub use coerce::coerce;
pub use report::{ValidationResult, Violation, ViolationReason};
pub use typed::{TypedConfig, TypedSection, TypedValue};

/// Validate against the built-in `General`/`Watchdog` schema.
pub fn validate(raw: &RawConfig) -> ValidationResult {
    validate_against(Schema::standard(), raw)
}

/// Validate against an arbitrary schema.
///
/// - A missing section yields one `missing section` violation and none of
///   its fields are checked.
/// - A missing field yields one `missing field` violation.
/// - A present field yields at most one violation: the first rule it fails.
/// - Sections and fields the schema does not declare are ignored.
pub fn validate_against(schema: &Schema, raw: &RawConfig) -> ValidationResult {
    let mut violations = Vec::new();
    let mut typed = TypedConfig::default();

    for spec in schema.sections() {
        let Some(values) = raw.section(spec.name()) else {
            debug!(section = spec.name(), "required section is missing");
            violations.push(Violation::missing_section(spec.name()));
            continue;
        };

        let mut section = TypedSection::new(spec.name());

        for field in spec.fields() {
            let Some(value) = values.get(field.name) else {
                violations.push(Violation::missing_field(spec.name(), field.name));
                continue;
            };

            match coerce(&field.kind, value) {
                Ok(typed_value) => {
                    trace!(
                        section = spec.name(),
                        field = field.name,
                        kind = field.kind.label(),
                        "field accepted"
                    );
                    section.insert(field.name, typed_value);
                }
                Err(reason) => {
                    violations.push(Violation::invalid_value(
                        spec.name(),
                        field.name,
                        value,
                        reason,
                    ));
                }
            }
        }

        typed.push(section);
    }

    if violations.is_empty() {
        ValidationResult::Valid(typed)
    } else {
        debug!(count = violations.len(), "validation collected violations");
        ValidationResult::Invalid(violations)
    }
}
