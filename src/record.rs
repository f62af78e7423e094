//! Record model representing one contact in the book.

use crate::error::FieldResult;
use crate::fields::{Birthday, Name, Phone, Value};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One contact: a required name, any number of phone numbers, and an
/// optional birthday.
///
/// Phones are kept in insertion order and duplicates are permitted. All
/// mutation goes through the record's own methods so that every write passes
/// the owning field's validation gate; a failed write leaves the record
/// exactly as it was.
///
/// # Example
///
/// ```
/// use contact_book::Record;
///
/// let mut record = Record::new("Alice", None).unwrap();
/// record.add_phone("+1-555-1234").unwrap();
/// assert_eq!(record.phones().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "is_unset")]
    birthday: Birthday,
}

fn is_unset(birthday: &Birthday) -> bool {
    birthday.value().is_none()
}

impl Record {
    /// Create a new record with the given name and optional birthday.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::RequiredField` if the name is empty.
    pub fn new(name: impl Into<Value>, birthday: Option<NaiveDate>) -> FieldResult<Self> {
        let name = Name::new(name)?;
        let birthday = match birthday {
            Some(date) => Birthday::new(date)?,
            None => Birthday::unset(),
        };
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday field.
    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    /// Rename the contact. Only the owning book may do this directly, so the
    /// book's key always matches the record's name.
    pub(crate) fn set_name(&mut self, name: impl Into<Value>) -> FieldResult<()> {
        self.name.set(name)
    }

    /// Set or replace the birthday.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::TypeMismatch` if the value is not a date.
    pub fn set_birthday(&mut self, value: impl Into<Value>) -> FieldResult<()> {
        self.birthday.set(value)
    }

    /// Append a phone number.
    ///
    /// The phone sequence is unchanged when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::TypeMismatch` if the value is not text.
    pub fn add_phone(&mut self, phone: impl Into<Value>) -> FieldResult<()> {
        let phone = Phone::new(phone)?;
        debug!(contact = self.name(), phone = %phone, "adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose value equals `phone`.
    ///
    /// Returns whether a phone was removed; an absent value is a no-op.
    pub fn remove_phone(&mut self, phone: impl Into<Value>) -> bool {
        let target = phone.into();
        match self.phones.iter().position(|p| p.value() == Some(&target)) {
            Some(index) => {
                self.phones.remove(index);
                debug!(contact = self.name(), phone = %target, "removed phone");
                true
            }
            None => false,
        }
    }

    /// Replace the first phone whose value equals `old_phone` with `new_phone`.
    ///
    /// Returns whether a match was found; an absent `old_phone` is a no-op.
    /// When `new_phone` fails validation the original value is retained.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::TypeMismatch` if `new_phone` is not text.
    pub fn edit_phone(
        &mut self,
        old_phone: impl Into<Value>,
        new_phone: impl Into<Value>,
    ) -> FieldResult<bool> {
        let target = old_phone.into();
        let edited = match self.phones.iter_mut().find(|p| p.value() == Some(&target)) {
            Some(phone) => {
                phone.set(new_phone)?;
                true
            }
            None => false,
        };
        if edited {
            debug!(contact = self.name(), old = %target, "edited phone");
        }
        Ok(edited)
    }

    /// Days from today (local clock) until the next occurrence of the
    /// birthday's month and day, or `None` when no birthday is set.
    ///
    /// A birthday occurring today yields 0. Feb 29 birthdays are observed on
    /// Mar 1 in non-leap years.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// [`days_to_birthday`](Self::days_to_birthday) against an explicit
    /// "today", for deterministic callers and tests.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.date()?;
        let mut next = occurrence_in(birthday, today.year());
        if next < today {
            next = occurrence_in(birthday, today.year() + 1);
        }
        Some((next - today).num_days())
    }
}

/// The birthday's observed date in the given year. Feb 29 falls back to
/// Mar 1 when the year is not a leap year.
fn occurrence_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
    })
}
