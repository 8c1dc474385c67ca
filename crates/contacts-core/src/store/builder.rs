//! Builder for creating and configuring BookStore instances.

use std::path::{Path, PathBuf};

use super::BookStore;
use crate::error::{ContactsError, IoResultExt, Result};

/// Builder for creating and configuring BookStore instances.
#[derive(Debug, Clone, Default)]
pub struct BookStoreBuilder {
    data_path: Option<PathBuf>,
}

impl BookStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom address book file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/contacts/addressbook.json` or
    /// `~/.local/share/contacts/addressbook.json`
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `ContactsError::FileSystem` if the parent directory cannot be
    /// created
    /// Returns `ContactsError::XdgDirectory` if the default location cannot
    /// be resolved
    pub fn build(self) -> Result<BookStore> {
        let path = match self.data_path {
            Some(path) => path,
            None => Self::default_data_path()?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).fs_context(parent)?;
            }
        }

        Ok(BookStore::new(path))
    }

    /// Returns the default data path following XDG Base Directory
    /// specification.
    fn default_data_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("contacts")
            .place_data_file("addressbook.json")
            .map_err(|e| ContactsError::XdgDirectory(e.to_string()))
    }
}
