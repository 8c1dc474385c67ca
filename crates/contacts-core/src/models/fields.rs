//! Validated value types that make up a contact record.

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{ContactsError, Result};

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Input and output format for birthdays (`dd.mm.yyyy`).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Contact name, used verbatim as the address book key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Creates a name, rejecting empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ContactsError::invalid_input("name").with_reason("name cannot be empty"));
        }
        Ok(Self(raw))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = ContactsError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl FromStr for Name {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phone number made of exactly [`PHONE_DIGITS`] ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Validates and wraps a phone number.
    ///
    /// # Errors
    ///
    /// * `ContactsError::InvalidInput` - When the value is not exactly ten
    ///   ASCII digits
    ///
    /// # Examples
    ///
    /// ```rust
    /// use contacts_core::models::Phone;
    ///
    /// let phone = Phone::new("0501234567")?;
    /// assert_eq!(phone.value(), "0501234567");
    ///
    /// assert!(Phone::new("050-123-45").is_err());
    /// # Ok::<(), contacts_core::ContactsError>(())
    /// ```
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.len() != PHONE_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ContactsError::invalid_input("phone number").with_reason(format!(
                "'{raw}' must consist of exactly {PHONE_DIGITS} digits"
            )));
        }
        Ok(Self(raw))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = ContactsError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl FromStr for Phone {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Birthday stored as a calendar date.
///
/// Parsed from and rendered as `dd.mm.yyyy`; persisted as an ISO 8601 date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(Date);

impl Birthday {
    /// Parses a `dd.mm.yyyy` string.
    ///
    /// Fails for malformed input and for dates that do not exist on the
    /// calendar, such as `31.02.2024`.
    pub fn parse(raw: &str) -> Result<Self> {
        Date::strptime(BIRTHDAY_FORMAT, raw.trim())
            .map(Self)
            .map_err(|e| {
                ContactsError::invalid_input("birthday").with_reason(format!(
                    "'{raw}' is not a valid date in DD.MM.YYYY format ({e})"
                ))
            })
    }

    pub fn date(&self) -> Date {
        self.0
    }

    pub fn month(&self) -> i8 {
        self.0.month()
    }

    pub fn day(&self) -> i8 {
        self.0.day()
    }
}

impl FromStr for Birthday {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DottedDate(self.0))
    }
}

/// Renders a date as `dd.mm.yyyy`.
pub struct DottedDate(pub Date);

impl fmt::Display for DottedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(BIRTHDAY_FORMAT))
    }
}
