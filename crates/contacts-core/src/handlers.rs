//! Command handlers for the interactive session.
//!
//! Each handler takes the argument list of one command and the address book,
//! performs the operation and returns the text to show the user:
//!
//! ```text
//! Input line → Input → dispatch → handler → AddressBook / Record → reply
//! ```
//!
//! Handlers return [`Result`] and propagate validation failures from the
//! models with `?`. [`dispatch`] is the single recovery boundary: it turns
//! every error (bad phone or date, unknown contact, wrong argument count)
//! into its message, so no command failure ends the session.
//!
//! ## Usage
//!
//! ```rust
//! use contacts_core::{dispatch, AddressBook, Input, Response};
//!
//! let mut book = AddressBook::new();
//! let input = Input::parse("add John 0501234567").unwrap();
//! assert_eq!(
//!     dispatch(&input, &mut book),
//!     Response::Message("Contact added.".to_string())
//! );
//!
//! let input = Input::parse("add John 050").unwrap();
//! let Response::Message(reply) = dispatch(&input, &mut book) else {
//!     unreachable!()
//! };
//! assert!(reply.starts_with("Invalid phone number"));
//! ```

use jiff::{civil::Date, Zoned};
use log::debug;

use crate::{
    book::{AddressBook, DEFAULT_WINDOW_DAYS},
    command::{Command, Input},
    error::{ContactsError, Result},
    models::{Name, Record},
};

const ADD_USAGE: &str = "add <name> <phone>";
const CHANGE_USAGE: &str = "change <name> <old_phone> <new_phone>";
const PHONE_USAGE: &str = "phone <name>";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <birthday>";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

/// Shown by `all` and `birthdays` when the book has no records.
pub const NO_CONTACTS: &str = "No contacts.";

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Show the message and keep reading commands
    Message(String),
    /// Save the book and terminate
    Exit,
}

/// Routes one parsed input line to its handler.
pub fn dispatch(input: &Input, book: &mut AddressBook) -> Response {
    let Ok(command) = input.command.parse::<Command>() else {
        debug!("Unknown command '{}'", input.command);
        return Response::Message("Invalid command.".to_string());
    };
    let args = input.args.as_slice();

    let result = match command {
        Command::Exit => return Response::Exit,
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Help => Ok(show_help().to_string()),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Phone => show_phone(args, book),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => Ok(birthdays(book)),
    };

    Response::Message(result.unwrap_or_else(|e| {
        debug!("Command '{command}' failed: {e}");
        e.to_string()
    }))
}

/// Checks the argument count and borrows the arguments as a fixed array.
fn expect_args<'a, const N: usize>(
    args: &'a [String],
    usage: &'static str,
) -> Result<&'a [String; N]> {
    args.try_into().map_err(|_| ContactsError::ArgumentCount {
        expected: N,
        found: args.len(),
        usage,
    })
}

fn not_found(name: &str) -> ContactsError {
    ContactsError::ContactNotFound {
        name: name.to_string(),
    }
}

/// `add <name> <phone>`: creates a contact or adds a phone to an existing
/// one. A phone the contact already has is reported, not duplicated.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> Result<String> {
    let [name, phone] = expect_args::<2>(args, ADD_USAGE)?;

    if let Some(record) = book.find_mut(name) {
        if record.find_phone(phone).is_some() {
            return Ok(format!("Contact {name} already has this phone number."));
        }
        record.add_phone(phone)?;
        return Ok(format!("Phone number added to existing contact {name}."));
    }

    let mut record = Record::new(Name::new(name.as_str())?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> Result<String> {
    let [name, old_phone, new_phone] = expect_args::<3>(args, CHANGE_USAGE)?;
    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;

    if record.find_phone(old_phone).is_none() {
        return Err(ContactsError::PhoneNotFound {
            name: name.to_string(),
            phone: old_phone.to_string(),
        });
    }

    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: renders the whole record.
pub fn show_phone(args: &[String], book: &AddressBook) -> Result<String> {
    let [name] = expect_args::<1>(args, PHONE_USAGE)?;
    let record = book.find(name).ok_or_else(|| not_found(name))?;
    Ok(record.to_string())
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return NO_CONTACTS.to_string();
    }
    book.to_string()
}

/// `add-birthday <name> <dd.mm.yyyy>`: creates the contact when missing.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<String> {
    let [name, birthday] = expect_args::<2>(args, ADD_BIRTHDAY_USAGE)?;

    if let Some(record) = book.find_mut(name) {
        record.add_birthday(birthday)?;
        return Ok(format!("Birthday added to existing contact {name}."));
    }

    let mut record = Record::new(Name::new(name.as_str())?);
    record.add_birthday(birthday)?;
    book.add_record(record);
    Ok("Contact with birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> Result<String> {
    let [name] = expect_args::<1>(args, SHOW_BIRTHDAY_USAGE)?;
    let record = book.find(name).ok_or_else(|| not_found(name))?;
    Ok(record.show_birthday())
}

/// `birthdays`: matches within the default window, one per line. An empty
/// book reports [`NO_CONTACTS`]; a book with no matches yields an empty
/// string.
pub fn birthdays(book: &AddressBook) -> String {
    birthdays_on(book, Zoned::now().date())
}

/// `birthdays` evaluated as of `today`.
pub fn birthdays_on(book: &AddressBook, today: Date) -> String {
    if book.is_empty() {
        return NO_CONTACTS.to_string();
    }
    book.render_upcoming_birthdays(today, DEFAULT_WINDOW_DAYS)
}

pub fn show_help() -> &'static str {
    "Available commands:\n\
     - 'hello':             Greet the user.\n\
     - 'help':              Display this help message.\n\
     - 'add':               Add a new contact with phone or a phone to existing contact.\n\
     \x20                      Usage: add <name> <phone>\n\
     - 'add-birthday':      Add a new contact with birthday or a birthday to a contact.\n\
     \x20                      Usage: add-birthday <name> <birthday>\n\
     - 'change':            Update an existing phone number in existing contact.\n\
     \x20                      Usage: change <name> <old_phone> <new_phone>\n\
     - 'phone':             Display a contact's phone number/numbers. Usage: phone <name>\n\
     - 'show-birthday':     Display a contact's birthday. Usage: show-birthday <name>\n\
     - 'birthdays':         Display upcoming birthdays within 7 days.\n\
     - 'all':               Display all contacts.\n\
     - 'close' or 'exit':   Exit the program."
}
