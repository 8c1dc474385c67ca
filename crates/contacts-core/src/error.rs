//! Error types for the contacts library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all address book operations.
#[derive(Error, Debug)]
pub enum ContactsError {
    /// Invalid input validation errors (phone, birthday, name)
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },
    /// A birthday was already attached to the record
    #[error("Birthday is already set for {name}.")]
    BirthdayAlreadySet { name: String },
    /// No record with the given name
    #[error("No contact found with name {name}.")]
    ContactNotFound { name: String },
    /// The record has no such phone number
    #[error("No phone number {phone} found for contact {name}.")]
    PhoneNotFound { name: String, phone: String },
    /// Wrong number of arguments for a command
    #[error("{} arguments. Usage: {usage}", arity_label(.found, .expected))]
    ArgumentCount {
        expected: usize,
        found: usize,
        usage: &'static str,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

fn arity_label(found: &usize, expected: &usize) -> &'static str {
    if found < expected {
        "Insufficient"
    } else {
        "Too many"
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ContactsError {
        ContactsError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ContactsError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait for mapping I/O results onto [`ContactsError::FileSystem`].
pub trait IoResultExt<T> {
    /// Attach the path the failed operation was working on.
    fn fs_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| ContactsError::file_system(path, e))
    }
}

/// Result type alias for address book operations
pub type Result<T> = std::result::Result<T, ContactsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count_messages() {
        let too_few = ContactsError::ArgumentCount {
            expected: 2,
            found: 1,
            usage: "add <name> <phone>",
        };
        assert_eq!(
            too_few.to_string(),
            "Insufficient arguments. Usage: add <name> <phone>"
        );

        let too_many = ContactsError::ArgumentCount {
            expected: 1,
            found: 3,
            usage: "phone <name>",
        };
        assert_eq!(
            too_many.to_string(),
            "Too many arguments. Usage: phone <name>"
        );
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = ContactsError::invalid_input("phone").with_reason("must be 10 digits");
        assert_eq!(err.to_string(), "Invalid phone: must be 10 digits");
    }

    #[test]
    fn test_fs_context_keeps_path() {
        let io: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io
            .fs_context(std::path::Path::new("/tmp/book.json"))
            .unwrap_err();
        assert!(matches!(err, ContactsError::FileSystem { .. }));
        assert!(err.to_string().contains("/tmp/book.json"));
    }
}
