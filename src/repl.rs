//! The blocking read-eval-print loop.
//!
//! One command per line: read, parse, dispatch against the shared address
//! book, print the reply, repeat. Generic over the input and output
//! streams so whole sessions can be driven from tests with in-memory
//! buffers.

use crate::book::AddressBook;
use crate::commands::{self, Outcome};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the assistant until an exit command or end of input.
///
/// # Errors
///
/// Only I/O failures on the streams are errors; command failures are
/// reported inline and the loop continues.
pub fn run<R, W>(
    input: R,
    output: &mut W,
    book: &mut AddressBook,
    window_days: i64,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut lines = input.lines();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            // End of input; no farewell, mirroring a closed pipe.
            info!("input stream ended");
            break;
        };
        let line = line?;

        // Blank lines just re-prompt.
        let Some(parsed) = commands::parse_line(&line) else {
            continue;
        };

        match commands::dispatch(&parsed, book, window_days) {
            Outcome::Reply(text) => writeln!(output, "{}", text)?,
            Outcome::Exit(text) => {
                writeln!(output, "{}", text)?;
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> String {
        let mut book = AddressBook::new();
        let mut output = Vec::new();
        run(Cursor::new(input), &mut output, &mut book, 7).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_greets_prompts_and_exits() {
        let output = session("exit\n");
        assert_eq!(
            output,
            "Welcome to the assistant bot!\nEnter a command: Good bye!\n"
        );
    }

    #[test]
    fn test_session_add_and_query() {
        let output = session("add John 1234567890\nphone John\nall\nclose\n");
        assert!(output.contains("Contact added.\n"));
        assert!(output.contains("John: 1234567890\n"));
        assert!(output.contains("Contact name: John, phones: 1234567890\n"));
        assert!(output.ends_with("Good bye!\n"));
    }

    #[test]
    fn test_session_blank_lines_reprompt_silently() {
        let output = session("\n   \nhello\nexit\n");
        let prompts = output.matches("Enter a command: ").count();
        assert_eq!(prompts, 4);
        assert_eq!(output.matches("How can I help you?").count(), 1);
    }

    #[test]
    fn test_session_survives_command_errors() {
        let output = session("add\nadd-birthday John 31.02.2000\nhello\nexit\n");
        assert!(output.contains("Give me name and phone please.\n"));
        assert!(output.contains("Contact John not found.\n"));
        assert!(output.contains("How can I help you?\n"));
        assert!(output.ends_with("Good bye!\n"));
    }

    #[test]
    fn test_session_ends_cleanly_on_eof() {
        let output = session("hello\n");
        assert!(output.contains("How can I help you?\n"));
        assert!(!output.contains("Good bye!"));
    }
}
