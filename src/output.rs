//! Console port for td.
//!
//! Everything the program shows or reads goes through the [`Console`] trait,
//! so the store and menu logic can be exercised against a scripted double.
//! [`Terminal`] is the real implementation: ANSI colors, screen clears, and
//! raw-mode key reads when attached to a tty, plain line-oriented text when
//! stdin or stdout is piped.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event};
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::tty::IsTty;
use crossterm::QueueableCommand;

/// Rendering styles the menu loop maps outcomes onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Error,
    Info,
    Plain,
    Highlight,
}

/// Narrow interface between the menu loop and the terminal.
pub trait Console {
    /// Clear the screen before a new view. No-op on non-interactive output.
    fn clear(&mut self) -> io::Result<()>;

    /// Write one styled line.
    fn line(&mut self, style: Style, text: &str) -> io::Result<()>;

    /// Write `prompt` without a newline, then read one input line.
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Block until the user presses a key. Non-interactive sessions consume
    /// one input line instead, keeping scripted input aligned.
    fn wait_for_key(&mut self) -> io::Result<()>;

    /// `=== TITLE ===` banner for the top of a view.
    fn header(&mut self, title: &str) -> io::Result<()> {
        let banner = format!("=== {} ===", title.to_uppercase());
        self.line(Style::Highlight, &banner)
    }
}

/// [`Console`] backed by the process stdin/stdout via crossterm.
pub struct Terminal {
    stdout: io::Stdout,
    interactive: bool,
}

impl Terminal {
    pub fn new() -> Self {
        let stdout = io::stdout();
        let interactive = stdout.is_tty() && io::stdin().is_tty();
        Self {
            stdout,
            interactive,
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn clear(&mut self) -> io::Result<()> {
        if self.interactive {
            self.stdout
                .queue(Clear(ClearType::All))?
                .queue(MoveTo(0, 0))?;
            self.stdout.flush()?;
        }
        Ok(())
    }

    fn line(&mut self, style: Style, text: &str) -> io::Result<()> {
        if !self.interactive || style == Style::Plain {
            writeln!(self.stdout, "{text}")?;
            return self.stdout.flush();
        }

        match style {
            Style::Success => {
                self.stdout.queue(SetForegroundColor(Color::Green))?;
            }
            Style::Error => {
                self.stdout.queue(SetForegroundColor(Color::Red))?;
            }
            Style::Info => {
                self.stdout.queue(SetForegroundColor(Color::Yellow))?;
            }
            Style::Highlight => {
                self.stdout
                    .queue(SetForegroundColor(Color::Cyan))?
                    .queue(SetAttribute(Attribute::Bold))?;
            }
            Style::Plain => {}
        }
        writeln!(self.stdout, "{text}")?;
        self.stdout
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?;
        self.stdout.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.stdout, "{prompt}")?;
        self.stdout.flush()?;

        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        write!(self.stdout, "\nPress any key to continue...")?;
        self.stdout.flush()?;

        if self.interactive {
            terminal::enable_raw_mode()?;
            let waited = loop {
                match event::read() {
                    Ok(Event::Key(_)) => break Ok(()),
                    Ok(_) => continue,
                    Err(err) => break Err(err),
                }
            };
            terminal::disable_raw_mode()?;
            waited?;
        } else {
            // One throwaway line stands in for the keypress.
            let mut buf = String::new();
            io::stdin().lock().read_line(&mut buf)?;
        }
        writeln!(self.stdout)?;
        self.stdout.flush()
    }
}
