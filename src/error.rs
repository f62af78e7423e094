//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::fields::ValueKind;
use thiserror::Error;

/// Errors that can occur when validating a field value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A mandatory field was given an empty or absent value
    #[error("{field} field is required")]
    RequiredField {
        /// Name of the field that rejected the write
        field: &'static str,
    },

    /// A value failed its field's type predicate
    #[error("{field} field expects a {expected} value, got {actual}")]
    TypeMismatch {
        /// Name of the field that rejected the write
        field: &'static str,
        /// The kind of value the field accepts
        expected: ValueKind,
        /// The kind of value that was offered
        actual: ValueKind,
    },
}

/// Errors that can occur when operating on an [`AddressBook`](crate::AddressBook).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Lookup, removal, or rename referenced a name absent from the book
    #[error("no record named '{0}'")]
    KeyNotFound(String),

    /// A field validation failure surfaced through a book operation
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Convenience type alias for Results with FieldError
pub type FieldResult<T> = Result<T, FieldError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;
