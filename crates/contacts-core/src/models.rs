//! Data models for contacts.
//!
//! This module contains the domain models of the address book:
//!
//! - [`Name`], [`Phone`] and [`Birthday`]: validated value types. Each one
//!   rejects malformed input at construction time, so a value that exists is
//!   always well-formed.
//! - [`Record`]: one contact, owning a name, an ordered list of phones and an
//!   optional birthday.
//!
//! # Display
//!
//! Every model implements [`std::fmt::Display`]. Records render on a single
//! line:
//!
//! ```text
//! Contact name: Ann, birthday: 08.06.1990, phones: 0501234567; 0671234567
//! ```
//!
//! Missing values are shown as [`EMPTY_FIELD`].
//!
//! # Examples
//!
//! ```rust
//! use contacts_core::models::{Name, Record};
//!
//! let mut record = Record::new(Name::new("Ann")?);
//! record.add_phone("0501234567")?;
//! record.add_birthday("08.06.1990")?;
//!
//! assert_eq!(
//!     record.to_string(),
//!     "Contact name: Ann, birthday: 08.06.1990, phones: 0501234567"
//! );
//! assert_eq!(record.show_birthday(), "Ann's birthday is on 08.06.1990");
//! # Ok::<(), contacts_core::ContactsError>(())
//! ```

mod fields;
mod record;

#[cfg(test)]
mod tests;

pub use fields::{Birthday, DottedDate, Name, Phone, BIRTHDAY_FORMAT, PHONE_DIGITS};
pub use record::{Record, EMPTY_FIELD};
