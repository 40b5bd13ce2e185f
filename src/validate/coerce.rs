// src/validate/coerce.rs

//! Per-kind coercion of a raw string into a [`TypedValue`].
//!
//! Each function returns the first failure only; once a value cannot be
//! coerced no further constraint on it is checked.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

use regex::Regex;
use uuid::Uuid;

use crate::schema::{FieldKind, FormatRule};
use crate::validate::report::ViolationReason;
use crate::validate::typed::TypedValue;

type Coerced = Result<TypedValue, ViolationReason>;

// Schema patterns are `'static`, so each one is compiled at most once.
static PATTERN_CACHE: LazyLock<Mutex<HashMap<&'static str, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn compiled(pattern: &'static str) -> Result<Regex, regex::Error> {
    let mut cache = PATTERN_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(re) = cache.get(pattern) {
        return Ok(re.clone());
    }
    let re = Regex::new(pattern)?;
    cache.insert(pattern, re.clone());
    Ok(re)
}

pub fn coerce(kind: &FieldKind, raw: &str) -> Coerced {
    match *kind {
        FieldKind::Integer { min, max } => integer(raw, min, max),
        FieldKind::Float { min, max } => float(raw, min, max),
        FieldKind::Literal(allowed) => literal(raw, allowed),
        FieldKind::NumberOrLiteral(allowed) => number_or_literal(raw, allowed),
        FieldKind::Formatted(rule) => formatted(raw, rule),
        FieldKind::Uuid => uuid(raw),
    }
}

fn integer(raw: &str, min: i64, max: i64) -> Coerced {
    let v: i64 = raw.parse().map_err(|_| ViolationReason::NotNumeric)?;
    if !(min..=max).contains(&v) {
        return Err(ViolationReason::OutOfRange);
    }
    Ok(TypedValue::Integer(v))
}

fn float(raw: &str, min: Option<f64>, max: Option<f64>) -> Coerced {
    let v: f64 = raw.parse().map_err(|_| ViolationReason::NotNumeric)?;
    let below = min.is_some_and(|min| v < min);
    let above = max.is_some_and(|max| v > max);
    if below || above {
        return Err(ViolationReason::OutOfRange);
    }
    Ok(TypedValue::Float(v))
}

fn literal(raw: &str, allowed: &[&str]) -> Coerced {
    if allowed.contains(&raw) {
        Ok(TypedValue::Literal(raw.to_string()))
    } else {
        Err(ViolationReason::NotAllowedLiteral)
    }
}

// Literals win over numbers so that e.g. "inf" could be declared as a literal.
fn number_or_literal(raw: &str, allowed: &[&str]) -> Coerced {
    if allowed.contains(&raw) {
        return Ok(TypedValue::Literal(raw.to_string()));
    }
    raw.parse::<f64>()
        .map(TypedValue::Float)
        .map_err(|_| ViolationReason::NotNumericOrLiteral)
}

fn formatted(raw: &str, rule: FormatRule) -> Coerced {
    match rule {
        FormatRule::StartsWith(prefix) => {
            if raw.starts_with(prefix) {
                Ok(TypedValue::Text(raw.to_string()))
            } else {
                Err(ViolationReason::MissingPrefix(prefix))
            }
        }
        FormatRule::Pattern(pattern) => {
            let re = compiled(pattern).map_err(|e| ViolationReason::InvalidRule(e.to_string()))?;
            if re.is_match(raw) {
                Ok(TypedValue::Text(raw.to_string()))
            } else {
                Err(ViolationReason::PatternMismatch)
            }
        }
        FormatRule::SuffixedInteger { suffix, min, max } => {
            let number = raw
                .strip_suffix(suffix)
                .ok_or(ViolationReason::MissingSuffix(suffix))?;
            let v: i64 = number.parse().map_err(|_| ViolationReason::NotNumeric)?;
            if !(min..=max).contains(&v) {
                return Err(ViolationReason::PrefixOutOfRange { min, max });
            }
            Ok(TypedValue::Minutes(v))
        }
    }
}

fn uuid(raw: &str) -> Coerced {
    Uuid::parse_str(raw)
        .map(TypedValue::Uuid)
        .map_err(|_| ViolationReason::NotValidUuid)
}
