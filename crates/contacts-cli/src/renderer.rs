//! Terminal rendering module
//!
//! Static text such as the greeting and the prompt goes through a termimad
//! skin when rich output is enabled. Command replies carry contact data and
//! are always printed verbatim, so names like `*Bo*b` are not read as
//! markdown.

use std::io::{self, Write};

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Print a fixed banner (greeting, farewell) followed by a blank line
    pub fn banner(&self, text: &str) {
        if self.rich_enabled {
            for line in text.lines() {
                self.skin.print_inline(line);
                println!();
            }
        } else {
            println!("{text}");
        }
        println!();
    }

    /// Print a command reply followed by a blank line
    pub fn message(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_message(&mut stdout, text)?;
        stdout.flush()
    }

    fn write_message<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        writeln!(out, "{text}")?;
        writeln!(out)
    }

    /// Print the input prompt without a trailing newline
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            write!(stdout, "{}", self.skin.inline(&format!("**{text}**")))?;
        } else {
            write!(stdout, "{text}")?;
        }
        stdout.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
