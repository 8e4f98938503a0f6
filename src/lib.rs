//! Contact Assistant - an interactive command-line address book.
//!
//! The assistant keeps contacts in memory for the life of the process:
//! each contact has a name, validated ten-digit phone numbers, and an
//! optional birthday, and a query lists the birthdays falling within an
//! upcoming window (weekend occurrences shifted to the following Monday).
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the contact record and its mutation operations
//! - **book**: the in-memory address book and upcoming-birthday query
//! - **schedule**: pure date helpers for birthday scheduling
//! - **commands**: command parsing, handlers, and error presentation
//! - **repl**: the blocking read-eval-print loop
//! - **error**: command and configuration error types
//! - **config**: environment-backed runtime settings

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod schedule;

pub use book::{AddressBook, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::Record;
