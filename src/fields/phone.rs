//! Phone field.

use super::value::{Value, ValueKind};
use super::Validatable;
use crate::error::{FieldError, FieldResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's phone number.
///
/// The value is optional; when present it must be text. No format or length
/// constraint is enforced beyond that.
///
/// # Example
///
/// ```
/// use contact_book::Phone;
///
/// let phone = Phone::new("+1-555-1234").unwrap();
/// assert_eq!(phone.as_str(), Some("+1-555-1234"));
/// assert_eq!(Phone::unset().as_str(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Phone {
    value: Option<Value>,
}

impl Validatable for Phone {
    const FIELD: &'static str = "phone";

    /// An unset value is always acceptable; a present value must be text.
    fn validate(candidate: Option<&Value>) -> FieldResult<()> {
        match candidate {
            None | Some(Value::Text(_)) => Ok(()),
            Some(other) => Err(FieldError::TypeMismatch {
                field: Self::FIELD,
                expected: ValueKind::Text,
                actual: other.kind(),
            }),
        }
    }
}

impl Phone {
    /// Create a new Phone holding the given value.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::TypeMismatch` if the value is not text.
    pub fn new(value: impl Into<Value>) -> FieldResult<Self> {
        let value = value.into();
        Self::validate(Some(&value))?;
        Ok(Self { value: Some(value) })
    }

    /// Create a Phone with no value.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Replace the value, validating the candidate first.
    ///
    /// On failure the previous value is retained.
    pub fn set(&mut self, value: impl Into<Value>) -> FieldResult<()> {
        let value = value.into();
        Self::validate(Some(&value))?;
        self.value = Some(value);
        Ok(())
    }

    /// The current value, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The phone number as a string slice, if set.
    pub fn as_str(&self) -> Option<&str> {
        // A present value is guaranteed text by validation
        self.value.as_ref().map(|v| {
            v.as_text().expect("phone validated to be text")
        })
    }
}

// Serde support - serialize as optional string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from optional string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Phone::new(s).map_err(serde::de::Error::custom),
            None => Ok(Phone::unset()),
        }
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().unwrap_or(""))
    }
}
