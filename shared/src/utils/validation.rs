//! Declarative form-field validation
//!
//! Endpoints declare the fields they accept as a list of [`FieldRule`]s and
//! run the whole form through [`validate_fields`]. Every rule is checked
//! independently and all failures are collected and returned together, so a
//! single request reports every problem at once. On success the caller gets
//! the coerced, typed values back.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

/// Date fields must match this exact format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The type a form field is coerced to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Signed integer
    Int,
    /// Floating point number
    Float,
    /// Calendar date in `YYYY-MM-DD` format
    Date,
    /// Free-form text, passed through unchanged
    Text,
}

impl FieldKind {
    /// Name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Date => "date",
            FieldKind::Text => "string",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declarative validation rule
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Form field name
    pub name: &'static str,
    /// Expected type
    pub kind: FieldKind,
    /// Whether an absent or empty value is an error
    pub required: bool,
}

impl FieldRule {
    /// A field that must be present and non-empty
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// A field that may be absent or empty
    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// A form value after successful coercion
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Text(String),
}

impl FieldValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Validate a string-keyed form against a rule set
///
/// Rules are evaluated independently: a required field that is absent or
/// empty yields `"<field> is required"`, a present value that fails coercion
/// yields `"<field> has invalid type, expected <kind>"`. All failures are
/// accumulated; the caller receives either every error or the full map of
/// coerced values. Optional fields that are absent or empty are simply
/// omitted from the result.
pub fn validate_fields(
    rules: &[FieldRule],
    form: &HashMap<String, String>,
) -> Result<HashMap<String, FieldValue>, Vec<String>> {
    let mut errors = Vec::new();
    let mut values = HashMap::new();

    for rule in rules {
        let raw = form
            .get(rule.name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty());

        match raw {
            None => {
                if rule.required {
                    errors.push(format!("{} is required", rule.name));
                }
            }
            Some(raw) => match coerce(raw, rule.kind) {
                Some(value) => {
                    values.insert(rule.name.to_string(), value);
                }
                None => {
                    errors.push(format!(
                        "{} has invalid type, expected {}",
                        rule.name, rule.kind
                    ));
                }
            },
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

fn coerce(raw: &str, kind: FieldKind) -> Option<FieldValue> {
    match kind {
        FieldKind::Int => raw.parse::<i64>().ok().map(FieldValue::Int),
        FieldKind::Float => raw.parse::<f64>().ok().map(FieldValue::Float),
        FieldKind::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .map(FieldValue::Date),
        FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
    }
}
