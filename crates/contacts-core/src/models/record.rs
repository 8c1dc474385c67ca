//! A single contact: name, phone numbers and an optional birthday.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields::{Birthday, Name, Phone};
use crate::error::{ContactsError, Result};

/// Placeholder rendered for a missing birthday or an empty phone list.
pub const EMPTY_FIELD: &str = "----------";

/// Represents one contact in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, unique within a book
    name: Name,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<Phone>,

    /// Birthday, set at most once
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Creates a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validates `number` and appends it. Duplicates are kept.
    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        let phone = Phone::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes every phone equal to `number`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, number: &str) {
        self.phones.retain(|phone| phone.value() != number);
    }

    /// Replaces `old` with `new`.
    ///
    /// The new number is added before the old one is removed, so a record
    /// whose `old` number is missing simply gains `new`. Callers are expected
    /// to check [`Record::find_phone`] first. Replacing a number with itself
    /// leaves the list unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        if old == new {
            Phone::new(new)?;
            return Ok(());
        }
        self.add_phone(new)?;
        self.remove_phone(old);
        Ok(())
    }

    /// Returns the first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.value() == number)
    }

    /// Attaches a birthday parsed from `dd.mm.yyyy`.
    ///
    /// # Errors
    ///
    /// * `ContactsError::BirthdayAlreadySet` - When a birthday is already
    ///   attached; the existing value is kept
    /// * `ContactsError::InvalidInput` - When `raw` is not a valid date
    pub fn add_birthday(&mut self, raw: &str) -> Result<()> {
        if self.birthday.is_some() {
            return Err(ContactsError::BirthdayAlreadySet {
                name: self.name.to_string(),
            });
        }
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Human-readable birthday line for this contact.
    pub fn show_birthday(&self) -> String {
        match &self.birthday {
            Some(birthday) => format!("{}'s birthday is on {birthday}", self.name),
            None => "No birthday set".to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, birthday: ", self.name)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{birthday}")?,
            None => f.write_str(EMPTY_FIELD)?,
        }
        f.write_str(", phones: ")?;
        if self.phones.is_empty() {
            return f.write_str(EMPTY_FIELD);
        }
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{phone}")?;
        }
        Ok(())
    }
}
