use contacts_core::{dispatch, AddressBook, BookStore, BookStoreBuilder, Input, Response};
use tempfile::TempDir;

/// Helper function to create a store inside a fresh temporary directory
#[allow(dead_code)]
pub fn create_test_store() -> (TempDir, BookStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("addressbook.json");
    let store = BookStoreBuilder::new()
        .with_data_path(Some(&path))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Runs one input line and returns the reply text
#[allow(dead_code)]
pub fn run(book: &mut AddressBook, line: &str) -> String {
    let input = Input::parse(line).expect("line should not be blank");
    match dispatch(&input, book) {
        Response::Message(message) => message,
        Response::Exit => panic!("unexpected exit for {line:?}"),
    }
}
