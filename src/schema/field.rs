// src/schema/field.rs

use std::fmt;

/// How a raw string value is coerced and which constraint applies to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Base-10 integer within `min..=max`.
    Integer { min: i64, max: i64 },

    /// Floating point number, optionally bounded on either side.
    Float { min: Option<f64>, max: Option<f64> },

    /// Exact, case-sensitive membership in a fixed set of literals.
    ///
    /// Boolean-like fields use this too; their values stay strings.
    Literal(&'static [&'static str]),

    /// Either one of the literals or any number `f64` accepts.
    NumberOrLiteral(&'static [&'static str]),

    /// Free-form string that must satisfy a format rule.
    Formatted(FormatRule),

    /// Any RFC 4122 UUID, regardless of version.
    Uuid,
}

impl FieldKind {
    /// Short human-readable label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Integer { .. } => "integer",
            FieldKind::Float { .. } => "float",
            FieldKind::Literal(_) => "literal",
            FieldKind::NumberOrLiteral(_) => "number-or-literal",
            FieldKind::Formatted(_) => "formatted",
            FieldKind::Uuid => "uuid",
        }
    }
}

/// Format rules for `FieldKind::Formatted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Value must begin with the given prefix (e.g. an absolute path).
    StartsWith(&'static str),

    /// Value must match the regular expression.
    Pattern(&'static str),

    /// Value is an integer immediately followed by `suffix`, e.g. `30m`.
    /// The integer part must lie within `min..=max`.
    SuffixedInteger { suffix: char, min: i64, max: i64 },
}

/// One expected key within a section. Every declared field is required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A named section and its fields, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpec {
    name: &'static str,
    fields: &'static [FieldSpec],
}

impl SectionSpec {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The full set of sections a document must contain, each exactly once.
///
/// Sections not declared here are ignored by the validator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schema {
    sections: &'static [SectionSpec],
}

impl Schema {
    pub const fn new(sections: &'static [SectionSpec]) -> Self {
        Self { sections }
    }

    /// The built-in `General` + `Watchdog` schema.
    pub fn standard() -> &'static Schema {
        &super::standard::STANDARD
    }

    /// Sections in the order they are validated.
    pub fn sections(&self) -> &'static [SectionSpec] {
        self.sections
    }

    pub fn section(&self, name: &str) -> Option<&'static SectionSpec> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &'static str> {
        self.sections.iter().map(|s| s.name)
    }

    /// Total number of declared fields across all sections.
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatRule::StartsWith(prefix) => write!(f, "starts with '{prefix}'"),
            FormatRule::Pattern(pattern) => write!(f, "matches {pattern}"),
            FormatRule::SuffixedInteger { suffix, min, max } => {
                write!(f, "integer {min}..={max} followed by '{suffix}'")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("b", FieldKind::Uuid),
        FieldSpec::new("a", FieldKind::Integer { min: 0, max: 1 }),
    ];
    const ONE: Schema = Schema::new(&[SectionSpec::new("Only", FIELDS)]);

    #[test]
    fn fields_keep_declaration_order() {
        let section = ONE.section("Only").unwrap();
        let names: Vec<_> = section.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert!(ONE.section("only").is_none());
        assert!(ONE.section("Only").unwrap().field("A").is_none());
        assert_eq!(ONE.section("Only").unwrap().field("a").unwrap().kind.label(), "integer");
    }
}
