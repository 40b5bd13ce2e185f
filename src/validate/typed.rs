// src/validate/typed.rs

use uuid::Uuid;

/// A field value after coercion to its semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Integer(i64),
    Float(f64),
    /// One of a field's allowed literals, kept as written.
    Literal(String),
    /// A string that passed its format rule.
    Text(String),
    Uuid(Uuid),
    /// A `<n>m` duration, in minutes.
    Minutes(i64),
}

impl TypedValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(v) | TypedValue::Minutes(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Literal(s) | TypedValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            TypedValue::Uuid(id) => Some(*id),
            _ => None,
        }
    }
}

/// Coerced values of one section, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedSection {
    name: String,
    fields: Vec<(String, TypedValue)>,
}

impl TypedSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert(&mut self, field: impl Into<String>, value: TypedValue) {
        self.fields.push((field.into(), value));
    }

    pub fn get(&self, field: &str) -> Option<&TypedValue> {
        self.fields.iter().find(|(name, _)| name == field).map(|(_, v)| v)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.fields.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fully validated configuration. Only produced by the validator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypedConfig {
    sections: Vec<TypedSection>,
}

impl TypedConfig {
    pub(crate) fn push(&mut self, section: TypedSection) {
        self.sections.push(section);
    }

    pub fn section(&self, name: &str) -> Option<&TypedSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn sections(&self) -> &[TypedSection] {
        &self.sections
    }

    pub fn get(&self, section: &str, field: &str) -> Option<&TypedValue> {
        self.section(section).and_then(|s| s.get(field))
    }
}
