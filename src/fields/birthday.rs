//! Birthday field.

use super::value::{Value, ValueKind};
use super::Validatable;
use crate::error::{FieldError, FieldResult};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's birthday.
///
/// The value is optional; when present it must be a calendar date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::Birthday;
///
/// let date = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
/// let birthday = Birthday::new(date).unwrap();
/// assert_eq!(birthday.date(), Some(date));
/// assert_eq!(Birthday::unset().date(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Birthday {
    value: Option<Value>,
}

impl Validatable for Birthday {
    const FIELD: &'static str = "birthday";

    /// An unset value is always acceptable; a present value must be a date.
    fn validate(candidate: Option<&Value>) -> FieldResult<()> {
        match candidate {
            None | Some(Value::Date(_)) => Ok(()),
            Some(other) => Err(FieldError::TypeMismatch {
                field: Self::FIELD,
                expected: ValueKind::Date,
                actual: other.kind(),
            }),
        }
    }
}

impl Birthday {
    /// Create a new Birthday holding the given value.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::TypeMismatch` if the value is not a date.
    pub fn new(value: impl Into<Value>) -> FieldResult<Self> {
        let value = value.into();
        Self::validate(Some(&value))?;
        Ok(Self { value: Some(value) })
    }

    /// Create a Birthday with no value.
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

    /// The birthday as a calendar date, if set.
    pub fn date(&self) -> Option<NaiveDate> {
        // A present value is guaranteed a date by validation
        self.value.as_ref().map(|v| {
            v.as_date().expect("birthday validated to be a date")
        })
    }
}

// Serde support - serialize as optional ISO date
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.date().serialize(serializer)
    }
}

// Serde support - deserialize from optional date with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<NaiveDate>::deserialize(deserializer)? {
            Some(date) => Birthday::new(date).map_err(serde::de::Error::custom),
            None => Ok(Birthday::unset()),
        }
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date() {
            Some(date) => write!(f, "{}", date),
            None => Ok(()),
        }
    }
}
