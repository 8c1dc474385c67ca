//! The interactive read-dispatch loop.

use std::io::BufRead;

use anyhow::{Context, Result};
use contacts_core::{dispatch, AddressBook, BookStore, Input, Response};
use log::{debug, info};

use crate::renderer::TerminalRenderer;

const PROMPT: &str = "Enter a command: ";

/// One interactive session over a loaded address book.
pub struct Session {
    store: BookStore,
    book: AddressBook,
    renderer: TerminalRenderer,
}

impl Session {
    /// Loads the book from `store`.
    pub fn open(store: BookStore, renderer: TerminalRenderer) -> Result<Self> {
        let book = store.load().with_context(|| {
            format!("Failed to load address book from {}", store.path().display())
        })?;
        Ok(Self {
            store,
            book,
            renderer,
        })
    }

    /// Reads commands from `input` until `exit`/`close` or end of input,
    /// then saves the book once.
    pub fn run<R: BufRead>(mut self, mut input: R) -> Result<()> {
        self.renderer.banner(
            "Welcome to the assistant bot!\nType 'help' to see a list of available commands.",
        );

        let mut line = String::new();
        loop {
            self.renderer
                .prompt(PROMPT)
                .context("Failed to write prompt")?;

            line.clear();
            if input
                .read_line(&mut line)
                .context("Failed to read command")?
                == 0
            {
                info!("End of input, closing session");
                println!();
                break;
            }

            let Some(parsed) = Input::parse(&line) else {
                continue;
            };
            debug!(
                "Dispatching '{}' with {} argument(s)",
                parsed.command,
                parsed.args.len()
            );

            match dispatch(&parsed, &mut self.book) {
                Response::Message(reply) => self
                    .renderer
                    .message(&reply)
                    .context("Failed to write reply")?,
                Response::Exit => break,
            }
        }

        self.store.save(&self.book).with_context(|| {
            format!(
                "Failed to save address book to {}",
                self.store.path().display()
            )
        })?;
        self.renderer.banner("Good bye!");
        Ok(())
    }
}
