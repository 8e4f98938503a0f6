//! Command-line parsing.
//!
//! A command line is whitespace-tokenized; the first token, lowercased, is
//! the command keyword and the rest are positional arguments.

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// The lowercased command keyword.
    pub command: String,
    /// Positional arguments, in order.
    pub args: Vec<String>,
}

/// Parse one line of input. Returns `None` for blank input.
pub fn parse_line(input: &str) -> Option<CommandLine> {
    let mut tokens = input.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some(CommandLine { command, args })
}
