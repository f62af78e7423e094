//! Validated contact fields.
//!
//! This module contains the value objects a [`Record`](crate::Record) is
//! composed of: a required [`Name`], optional [`Phone`] numbers, and an
//! optional [`Birthday`]. Each field guards its value behind a validation
//! gate: writes check the candidate value before committing, and a rejected
//! write leaves the previous value untouched. Reads never validate.

pub mod birthday;
pub mod name;
pub mod phone;
pub mod value;

pub use birthday::Birthday;
pub use name::Name;
pub use phone::Phone;
pub use value::{Value, ValueKind};

use crate::error::FieldResult;

/// Validation capability shared by all field types.
///
/// Each field supplies its own predicate; there is no common fallback
/// implementation, so every field that exists can always be validated.
pub trait Validatable {
    /// Field label used in validation error reports.
    const FIELD: &'static str;

    /// Check a candidate value against this field type's rules.
    ///
    /// `None` models an unset value; whether that is acceptable depends on
    /// the field (a name is required, a phone or birthday is not).
    fn validate(candidate: Option<&Value>) -> FieldResult<()>;
}
