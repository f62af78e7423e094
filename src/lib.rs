//! Contact Book - an in-memory address book with validated fields.
//!
//! This library stores named contact records (name, phone numbers, optional
//! birthday), guards every field write behind a validation gate, and provides
//! paginated iteration over the collection plus a "days until next birthday"
//! calculation.
//!
//! # Architecture
//!
//! - **fields**: Validated value objects (Name, Phone, Birthday) and the
//!   dynamic `Value` payload they hold
//! - **record**: One contact composed of those fields
//! - **book**: The insertion-ordered, paginated collection of records
//! - **error**: Custom error types for precise error handling
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut record = Record::new("Alice", None).unwrap();
//! record.add_phone("+1-555-1234").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! for page in book.pages() {
//!     for (name, record) in page {
//!         println!("{}: {} phone(s)", name, record.phones().len());
//!     }
//! }
//! ```

// Re-export commonly used types
pub mod book;
pub mod error;
pub mod fields;
pub mod record;

pub use book::{AddressBook, Page, Pages};
pub use error::{BookError, BookResult, FieldError, FieldResult};
pub use fields::{Birthday, Name, Phone, Validatable, Value, ValueKind};
pub use record::Record;
