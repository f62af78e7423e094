//! Integration tests for the AddressBook collection: keying, renaming, and
//! paginated iteration.

use chrono::NaiveDate;
use contact_book::{AddressBook, BookError, FieldError, Record};

fn record(name: &str) -> Record {
    Record::new(name, None).unwrap()
}

fn names(book: &AddressBook) -> Vec<&str> {
    book.iter().map(|(name, _)| name).collect()
}

#[test]
fn test_key_always_matches_record_name() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice"));
    book.add_record(record("Bob"));

    book.edit_record_name("Alice", "Alicia").unwrap();

    for (key, record) in book.iter() {
        assert_eq!(key, record.name());
    }
    assert!(book.get("Alice").is_none());
    assert!(book.get("Alicia").is_some());
}

#[test]
fn test_rename_failure_is_atomic() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice"));
    let before = book.clone();

    // Absent key: nothing changes
    assert!(matches!(
        book.edit_record_name("Bob", "Robert"),
        Err(BookError::KeyNotFound(_))
    ));
    assert_eq!(book, before);

    // Invalid new name: the old entry is still in place
    assert!(matches!(
        book.edit_record_name("Alice", ""),
        Err(BookError::Field(FieldError::RequiredField { .. }))
    ));
    assert_eq!(book, before);
    assert_eq!(book.get("Alice").unwrap().name(), "Alice");
}

#[test]
fn test_renamed_entry_moves_to_end_of_pagination() {
    let mut book = AddressBook::new();
    for name in ["Alice", "Bob", "Carol"] {
        book.add_record(record(name));
    }

    book.edit_record_name("Alice", "Alicia").unwrap();

    let first_page = book.pages().next().unwrap();
    let order: Vec<&str> = first_page.keys().map(String::as_str).collect();
    assert_eq!(order, vec!["Bob", "Carol", "Alicia"]);
}

#[test]
fn test_pagination_shape_and_coverage() {
    let mut book = AddressBook::new();
    for i in 1..=12 {
        book.add_record(record(&format!("Contact {:02}", i)));
    }

    let mut seen = Vec::new();
    let mut sizes = Vec::new();
    for page in book.pages() {
        sizes.push(page.len());
        for (name, _) in page {
            seen.push(name.clone());
        }
    }

    assert_eq!(sizes, vec![5, 5, 2]);
    assert_eq!(seen, names(&book));
    assert_eq!(seen.len(), 12);
}

#[test]
fn test_pagination_reflects_current_contents() {
    let mut book = AddressBook::new();
    for name in ["Alice", "Bob", "Carol"] {
        book.add_record(record(name));
    }
    book.remove_record("Bob").unwrap();

    let pages: Vec<_> = book.pages().collect();
    assert_eq!(pages.len(), 1);
    let order: Vec<&str> = pages[0].keys().map(String::as_str).collect();
    assert_eq!(order, vec!["Alice", "Carol"]);
}

#[test]
fn test_full_workflow() {
    let birthday = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
    let mut alice = Record::new("Alice", Some(birthday)).unwrap();
    alice.add_phone("+1-555-1234").unwrap();
    alice.add_phone("+1-555-9876").unwrap();

    let mut book = AddressBook::from_records([alice, record("Bob")]);
    assert_eq!(book.len(), 2);

    // Edit a contact in place, then through the book's own operations
    book.get_mut("Alice")
        .unwrap()
        .edit_phone("+1-555-1234", "+1-555-0000")
        .unwrap();
    book.edit_record_name("Bob", "Robert").unwrap();

    let alice = book.get("Alice").unwrap();
    assert_eq!(alice.phones()[0].as_str(), Some("+1-555-0000"));
    assert!(alice.days_to_birthday().is_some());
    assert_eq!(names(&book), vec!["Alice", "Robert"]);

    // Serialize the whole book and read it back
    let json = serde_json::to_string(&book).unwrap();
    let parsed: AddressBook = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, book);
    assert_eq!(
        parsed.get("Alice").unwrap().birthday().date(),
        Some(birthday)
    );
}

#[test]
fn test_deserialization_rejects_invalid_records() {
    let json = r#"{"Alice": {"name": "Alice"}, "Bob": {"name": ""}}"#;
    let result: Result<AddressBook, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
