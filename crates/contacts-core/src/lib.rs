//! Core library for the contacts application.
//!
//! This crate provides the business logic of a small contact manager: the
//! validated contact models, the address book with its upcoming-birthday
//! query, the command handlers driven by the interactive CLI, and JSON file
//! persistence.
//!
//! # Architecture
//!
//! ```text
//! Input line → command::Input → handlers::dispatch → AddressBook / Record
//!                                                   ↕
//!                                           store::BookStore (load/save)
//! ```
//!
//! - **Models** ([`models`]): `Name`, `Phone`, `Birthday` and `Record`
//! - **Address book** ([`book`]): name-keyed collection and birthday query
//! - **Handlers** ([`handlers`]): one function per command, plus
//!   [`dispatch`], which turns every failure into a user-facing message
//! - **Store** ([`store`]): one load at start-up, one save at exit
//!
//! # Quick Start
//!
//! ```rust
//! use contacts_core::{dispatch, BookStoreBuilder, Input, Response};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let store = BookStoreBuilder::new()
//!     .with_data_path(Some(dir.path().join("book.json")))
//!     .build()?;
//!
//! let mut book = store.load()?;
//! for line in ["add Ann 0501234567", "add-birthday Ann 08.06.1990"] {
//!     if let Some(input) = Input::parse(line) {
//!         if let Response::Message(reply) = dispatch(&input, &mut book) {
//!             println!("{reply}");
//!         }
//!     }
//! }
//! store.save(&book)?;
//!
//! assert_eq!(store.load()?.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod book;
pub mod command;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use command::{Command, Input};
pub use error::{ContactsError, Result};
pub use handlers::{dispatch, Response};
pub use models::{Birthday, Name, Phone, Record};
pub use store::{BookStore, BookStoreBuilder};
