//! Command parsing, dispatch, and error presentation.
//!
//! The dispatcher routes a parsed line to its handler and turns handler
//! errors into user-facing strings. The error taxonomy is richer than what
//! the user sees: apart from date-format problems, every failure collapses
//! to one generic prompt.

pub mod handlers;
pub mod parser;

pub use parser::{parse_line, CommandLine};

use crate::book::AddressBook;
use crate::domain::ValidationError;
use crate::error::CommandError;
use tracing::debug;

/// What the REPL should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and keep going.
    Reply(String),
    /// Print the farewell and stop.
    Exit(String),
}

/// Route a parsed command line to its handler.
///
/// Unknown keywords are answered with `Invalid command.`; handler errors
/// are rendered via [`render_error`]. Every path produces a reply, so the
/// loop never terminates on a command failure.
pub fn dispatch(line: &CommandLine, book: &mut AddressBook, window_days: i64) -> Outcome {
    debug!(command = %line.command, args = line.args.len(), "dispatching command");

    let reply = match line.command.as_str() {
        "close" | "exit" => return Outcome::Exit("Good bye!".to_string()),
        "hello" => Ok("How can I help you?".to_string()),
        "add" => handlers::add_contact(&line.args, book),
        "change" => handlers::change_contact(&line.args, book),
        "phone" => handlers::show_phone(&line.args, book),
        "all" => Ok(handlers::show_all(book)),
        "add-birthday" => handlers::add_birthday(&line.args, book),
        "show-birthday" => handlers::show_birthday(&line.args, book),
        "birthdays" => Ok(handlers::birthdays(book, window_days)),
        _ => Ok("Invalid command.".to_string()),
    };

    Outcome::Reply(reply.unwrap_or_else(render_error))
}

/// Map a command error to its user-facing string.
///
/// Date-format failures surface their own message; everything else
/// collapses to the generic prompt, so the user cannot tell a wrong
/// argument count from an invalid phone.
pub fn render_error(err: CommandError) -> String {
    debug!(%err, "command failed");
    match err {
        CommandError::Validation(inner @ ValidationError::InvalidDateFormat) => inner.to_string(),
        _ => "Give me name and phone please.".to_string(),
    }
}
