//! Typed setting values and string type inference.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Date/time layouts probed in order. ISO forms are tried before
/// day-first forms so unambiguous input never depends on the host locale.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Date-only layouts; matches resolve to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// A setting value together with its inferred scalar type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Integer(i64),
    Boolean(bool),
    Float(f64),
    Timestamp(NaiveDateTime),
    Text(String),
}

impl TypedValue {
    /// Infers the most specific type for a raw setting string.
    ///
    /// Probes run in a fixed order so the narrower type always wins:
    /// "42" is an integer, never a float, and "true" is a boolean before
    /// any other parser gets a chance at it. Text is the unconditional
    /// fallback, so inference is total and never fails.
    pub fn infer(raw: &str) -> TypedValue {
        let s = raw.trim();

        if let Ok(n) = s.parse::<i64>() {
            return TypedValue::Integer(n);
        }

        if s.eq_ignore_ascii_case("true") {
            return TypedValue::Boolean(true);
        }
        if s.eq_ignore_ascii_case("false") {
            return TypedValue::Boolean(false);
        }

        // f64::from_str also accepts "inf"/"nan"; requiring a digit keeps
        // those as text.
        if s.contains(|c: char| c.is_ascii_digit()) {
            if let Ok(f) = s.parse::<f64>() {
                return TypedValue::Float(f);
            }
        }

        if let Some(ts) = parse_timestamp(s) {
            return TypedValue::Timestamp(ts);
        }

        TypedValue::Text(raw.to_string())
    }

    /// Short type tag used in trace output.
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::Integer(_) => "integer",
            TypedValue::Boolean(_) => "boolean",
            TypedValue::Float(_) => "float",
            TypedValue::Timestamp(_) => "timestamp",
            TypedValue::Text(_) => "text",
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            TypedValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            TypedValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Integer(n) => write!(f, "{}", n),
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::Float(v) => write!(f, "{}", v),
            TypedValue::Timestamp(ts) => write!(f, "{}", ts),
            TypedValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parses a date/time string against the known layouts, most specific
/// first.
pub(crate) fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}
