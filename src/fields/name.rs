//! Name field.

use super::value::{Value, ValueKind};
use super::Validatable;
use crate::error::{FieldError, FieldResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name.
///
/// Unlike the other fields, a name is required: it always holds a value, and
/// that value must be non-empty text.
///
/// # Example
///
/// ```
/// use contact_book::Name;
///
/// let name = Name::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// assert!(Name::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    value: Value,
}

impl Validatable for Name {
    const FIELD: &'static str = "name";

    /// Fails with `RequiredField` when the candidate is absent or empty text,
    /// and with `TypeMismatch` when it is not text at all.
    fn validate(candidate: Option<&Value>) -> FieldResult<()> {
        match candidate {
            Some(Value::Text(text)) if !text.is_empty() => Ok(()),
            Some(Value::Text(_)) | None => Err(FieldError::RequiredField { field: Self::FIELD }),
            Some(other) => Err(FieldError::TypeMismatch {
                field: Self::FIELD,
                expected: ValueKind::Text,
                actual: other.kind(),
            }),
        }
    }
}

impl Name {
    /// Create a new Name, validating the value.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::RequiredField` if the value is empty, or
    /// `FieldError::TypeMismatch` if it is not text.
    pub fn new(value: impl Into<Value>) -> FieldResult<Self> {
        let value = value.into();
        Self::validate(Some(&value))?;
        Ok(Self { value })
    }

    /// Replace the value, validating the candidate first.
    ///
    /// On failure the previous value is retained.
    pub fn set(&mut self, value: impl Into<Value>) -> FieldResult<()> {
        let value = value.into();
        Self::validate(Some(&value))?;
        self.value = value;
        Ok(())
    }

    /// The current value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        // Constructor and setter only admit text values
        self.value.as_text().expect("name validated to be text")
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
