//! Contact Assistant - main entry point.
//!
//! Wires configuration, logging, and the shared address book into the
//! read-eval-print loop on the standard streams.

use anyhow::Result;
use contact_assistant::{repl, AddressBook, Config};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Log to stderr only; stdout belongs to the conversation.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        window_days = config.birthday_window_days,
        "starting contact assistant"
    );

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(
        stdin.lock(),
        &mut stdout,
        &mut book,
        config.birthday_window_days,
    )?;

    info!("contact assistant shutdown complete");
    Ok(())
}
