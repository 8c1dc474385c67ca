//! JSON file persistence for the address book.
//!
//! The whole book is read once when a session starts and written once when
//! it ends. Writes go to a temporary sibling file that is then renamed over
//! the target, so an interrupted save never leaves a truncated file behind.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "1",
//!   "records": [
//!     {
//!       "name": "Ann",
//!       "phones": ["0501234567"],
//!       "birthday": "1990-06-08"
//!     }
//!   ]
//! }
//! ```

mod builder;

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    book::AddressBook,
    error::{IoResultExt, Result},
    models::Record,
};

pub use builder::BookStoreBuilder;

/// Version written into every saved file.
const FILE_FORMAT_VERSION: &str = "1";

#[derive(Serialize)]
struct BookFileRef<'a> {
    version: &'static str,
    records: &'a [Record],
}

#[derive(Deserialize)]
struct BookFile {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    records: Vec<Record>,
}

/// Loads and saves an [`AddressBook`] at a fixed path.
#[derive(Debug, Clone)]
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the book from disk. A missing file yields an empty book.
    ///
    /// # Errors
    ///
    /// Returns `ContactsError::FileSystem` if the file exists but cannot be
    /// read, and `ContactsError::Serialization` if its contents are not a
    /// valid address book (including records that fail validation).
    pub fn load(&self) -> Result<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No address book at {}, starting empty",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e).fs_context(&self.path),
        };

        let file: BookFile = serde_json::from_str(&contents)?;
        if file.version.as_deref() != Some(FILE_FORMAT_VERSION) {
            debug!(
                "Address book version {:?} differs from {FILE_FORMAT_VERSION}",
                file.version
            );
        }

        let book = AddressBook::from_records(file.records);
        info!(
            "Loaded {} contact(s) from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    /// Writes the whole book, replacing the previous file atomically.
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        let json = serde_json::to_string_pretty(&BookFileRef {
            version: FILE_FORMAT_VERSION,
            records: book.records(),
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).fs_context(&tmp_path)?;
        fs::rename(&tmp_path, &self.path).fs_context(&self.path)?;

        info!("Saved {} contact(s) to {}", book.len(), self.path.display());
        Ok(())
    }
}
