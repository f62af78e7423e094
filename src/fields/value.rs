//! Dynamic field payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that can be stored in a contact field.
///
/// Fields declare which kind of value they accept; offering the wrong kind
/// fails the field's validation with a `TypeMismatch` error rather than being
/// unrepresentable, matching the loosely-typed field slots this models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    /// Free-form text (names, phone numbers)
    Text(String),
    /// A calendar date (birthdays)
    Date(NaiveDate),
}

/// The kind of a [`Value`], used in validation error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Text,
    Date,
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Date(_) => ValueKind::Date,
        }
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Date(_) => None,
        }
    }

    /// The date, if this is a date value.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Text(_) => None,
            Value::Date(date) => Some(*date),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Date(date)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{}", text),
            Value::Date(date) => write!(f, "{}", date),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Text => write!(f, "text"),
            ValueKind::Date => write!(f, "date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::from("555-1234").kind(), ValueKind::Text);
        let date = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        assert_eq!(Value::from(date).kind(), ValueKind::Date);
    }

    #[test]
    fn test_value_accessors() {
        let value = Value::from("Alice");
        assert_eq!(value.as_text(), Some("Alice"));
        assert_eq!(value.as_date(), None);

        let date = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        let value = Value::from(date);
        assert_eq!(value.as_text(), None);
        assert_eq!(value.as_date(), Some(date));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::from("Alice")), "Alice");
        let date = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        assert_eq!(format!("{}", Value::from(date)), "1990-05-17");
    }
}
