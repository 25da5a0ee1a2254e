//! Interactive assistant bot.
//!
//! This module owns the address book for the lifetime of a session and
//! drives the read-eval-print loop: each line is split into a command word
//! and arguments, looked up in the command table and answered with one
//! reply.

pub mod handlers;

pub use handlers::{Action, Args, Command, CommandTable, Handler, COMMANDS};

use crate::clock::Clock;
use crate::error::SessionResult;
use crate::models::{AddressBook, BirthdayWindow};
use crate::observability::SessionMetrics;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and keep reading.
    Reply(String),
    /// Nothing to print (blank line).
    Silent,
    /// Print the farewell and stop.
    Exit(String),
}

/// The assistant bot: address book, date source and command table.
pub struct Assistant {
    book: AddressBook,
    clock: Box<dyn Clock>,
    window: BirthdayWindow,
    commands: CommandTable,
    metrics: SessionMetrics,
}

impl Assistant {
    /// Create an assistant with an empty address book.
    pub fn new(clock: impl Clock + 'static, window: BirthdayWindow) -> Self {
        Self {
            book: AddressBook::new(),
            clock: Box::new(clock),
            window,
            commands: CommandTable::default(),
            metrics: SessionMetrics::new(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Handle one raw input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let tokens = parse_input(line);
        let Some((name, args)) = tokens.split_first() else {
            return Outcome::Silent;
        };

        let Some(command) = self.commands.get(name) else {
            self.metrics.track_unknown_command(name);
            return Outcome::Reply(handlers::INVALID_COMMAND.to_string());
        };

        match command.action {
            Action::Exit => Outcome::Exit(handlers::FAREWELL.to_string()),
            Action::Run(handler) => Outcome::Reply(self.invoke(command, handler, args)),
        }
    }

    /// Run `handler`, turning any failure into its message.
    fn invoke(&mut self, command: &'static Command, handler: Handler, args: &[&str]) -> String {
        debug!(command = command.name(), args = args.len(), "Dispatching command");

        match handler(self, &Args::new(command, args)) {
            Ok(reply) => {
                self.metrics.track_command(command.name(), true);
                reply
            }
            Err(e) => {
                self.metrics.track_command(command.name(), false);
                e.to_string()
            }
        }
    }
}

/// Split a line into whitespace-separated tokens.
pub fn parse_input(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// The welcome banner and one help line per command.
pub fn help_text() -> String {
    let mut text = String::from("Welcome to the assistant bot!\nAvailable commands:");
    for command in &COMMANDS {
        text.push_str(&format!("\n-> {}: {}", command.usage, command.description));
    }
    text
}

/// Run an interactive session until `close`/`exit` or end of input.
///
/// `prompt` is written before every read. Replies go to `output`, one per
/// line. Input that is not valid UTF-8 is decoded lossily rather than
/// ending the session.
///
/// # Errors
///
/// Returns `SessionError::Io` if reading `input` or writing `output` fails.
pub fn run_session<R, W>(
    assistant: &mut Assistant,
    prompt: &str,
    mut input: R,
    output: &mut W,
) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", help_text())?;
    info!("Session started");

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input");
            break;
        }

        // Undecodable bytes become U+FFFD and fall through to dispatch
        let line = String::from_utf8_lossy(&buf);
        match assistant.handle_line(&line) {
            Outcome::Reply(reply) => writeln!(output, "{}", reply)?,
            Outcome::Silent => {}
            Outcome::Exit(farewell) => {
                writeln!(output, "{}", farewell)?;
                break;
            }
        }
    }

    info!(
        contacts = assistant.book().len(),
        "Session ended. {}",
        assistant.metrics().summary()
    );
    Ok(())
}
