//! Contacts CLI Application
//!
//! Interactive command-line front end for the contacts address book.

mod args;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use contacts_core::BookStoreBuilder;
use log::info;
use renderer::TerminalRenderer;
use session::Session;

fn main() -> Result<()> {
    env_logger::init();

    let Args { data_file, no_color } = Args::parse();

    let store = BookStoreBuilder::new()
        .with_data_path(data_file)
        .build()
        .context("Failed to initialize address book storage")?;

    info!("Contacts started with {}", store.path().display());

    let renderer = TerminalRenderer::new(!no_color);
    Session::open(store, renderer)?.run(std::io::stdin().lock())
}
