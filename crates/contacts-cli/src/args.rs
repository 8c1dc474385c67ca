use std::path::PathBuf;

use clap::Parser;

/// Interactive contact manager with birthday reminders
///
/// Starts a session that reads one command per line (`add`, `change`,
/// `phone`, `all`, `add-birthday`, `show-birthday`, `birthdays`, `help`,
/// `hello`, `exit`). The address book is loaded when the session starts and
/// saved when it ends.
#[derive(Parser)]
#[command(version, about, name = "contacts")]
pub struct Args {
    /// Path to the address book file. Defaults to
    /// $XDG_DATA_HOME/contacts/addressbook.json
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
