//! Address book: an insertion-ordered collection of records keyed by name.

use crate::error::{BookError, BookResult};
use crate::fields::{Name, Validatable, Value};
use crate::record::Record;
use indexmap::map::Slice;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One page of address-book entries, in insertion order.
pub type Page = Slice<String, Record>;

/// A collection of [`Record`]s keyed by contact name.
///
/// The book owns an ordered mapping internally; the key always equals the
/// record's current name, and renaming updates both together. Iteration is
/// insertion-ordered, entry-wise via [`iter`](Self::iter) or page-wise via
/// [`pages`](Self::pages).
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("Alice", None).unwrap());
/// book.add_record(Record::new("Bob", None).unwrap());
/// assert_eq!(book.len(), 2);
/// assert!(book.get("Alice").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Number of entries per page produced by [`pages`](Self::pages).
    pub const PAGE_SIZE: usize = 5;

    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a book from an initial set of records.
    ///
    /// Records are keyed by name in iteration order; a later record with the
    /// same name overwrites an earlier one.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a record with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    ///
    /// Renaming is not possible through this handle; use
    /// [`edit_record_name`](Self::edit_record_name) so the key stays in sync.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Insert a record under its name.
    ///
    /// An existing record with the same name is silently replaced,
    /// keeping its position in iteration order.
    pub fn add_record(&mut self, record: Record) {
        debug!(contact = record.name(), "adding record");
        self.records.insert(record.name().to_string(), record);
    }

    /// Remove and return the record with the given name.
    ///
    /// The insertion order of the remaining entries is preserved.
    ///
    /// # Errors
    ///
    /// Returns `BookError::KeyNotFound` if no record has that name.
    pub fn remove_record(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .shift_remove(name)
            .ok_or_else(|| BookError::KeyNotFound(name.to_string()))?;
        debug!(contact = name, "removed record");
        Ok(record)
    }

    /// Rename the record stored under `old_name` to `new_name`, moving it to
    /// the end of iteration order.
    ///
    /// The new name is validated before anything is removed, so a failed
    /// rename leaves the book completely unchanged.
    ///
    /// # Errors
    ///
    /// Returns `BookError::KeyNotFound` if `old_name` is absent, or a
    /// validation error if `new_name` is not a usable name.
    pub fn edit_record_name(
        &mut self,
        old_name: &str,
        new_name: impl Into<Value>,
    ) -> BookResult<()> {
        if !self.records.contains_key(old_name) {
            return Err(BookError::KeyNotFound(old_name.to_string()));
        }
        let new_name = new_name.into();
        Name::validate(Some(&new_name))?;

        let mut record = self
            .records
            .shift_remove(old_name)
            .ok_or_else(|| BookError::KeyNotFound(old_name.to_string()))?;
        record.set_name(new_name)?;
        debug!(old = old_name, new = record.name(), "renamed record");
        self.records.insert(record.name().to_string(), record);
        Ok(())
    }

    /// Iterate over entries one at a time, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Iterate over the book in pages of up to [`PAGE_SIZE`](Self::PAGE_SIZE)
    /// entries.
    ///
    /// Each call starts an independent pass from the beginning; the book
    /// keeps no cursor state. The pass is finite and never yields an empty
    /// page: an empty book yields no pages at all.
    pub fn pages(&self) -> Pages<'_> {
        self.pages_of(Self::PAGE_SIZE)
    }

    /// Like [`pages`](Self::pages) with a caller-chosen page size.
    ///
    /// A page size of zero yields no pages.
    pub fn pages_of(&self, page_size: usize) -> Pages<'_> {
        Pages {
            entries: self.records.as_slice(),
            cursor: 0,
            page_size,
        }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a String, &'a Record);
    type IntoIter = indexmap::map::Iter<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Lazy page-wise iterator over an [`AddressBook`].
///
/// Borrowed from the book by [`AddressBook::pages`]; every instance carries
/// its own cursor, so concurrent passes do not disturb each other.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    entries: &'a Page,
    cursor: usize,
    page_size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a Page;

    fn next(&mut self) -> Option<Self::Item> {
        if self.page_size == 0 || self.cursor >= self.entries.len() {
            return None;
        }
        let end = usize::min(self.cursor + self.page_size, self.entries.len());
        let page = self.entries.get_range(self.cursor..end)?;
        self.cursor = end;
        Some(page)
    }
}
