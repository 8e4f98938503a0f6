//! Domain validation errors.
//!
//! The `Display` strings are the exact user-facing messages; the dispatch
//! boundary decides which of them actually reach the user (see
//! `commands::render_error`).

use thiserror::Error;

/// Errors raised by value-object construction and record mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The phone number is not exactly ten decimal digits.
    #[error("Phone number must contain 10 digits.")]
    InvalidPhone,

    /// The birthday string does not parse as `DD.MM.YYYY`.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat,

    /// No phone with the requested value exists on the record.
    #[error("Phone not found")]
    PhoneNotFound,
}
