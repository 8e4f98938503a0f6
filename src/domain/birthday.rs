//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use std::fmt;

/// The input and rendering format for birthdays.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday, stored as a calendar date.
///
/// Constructed from a `DD.MM.YYYY` string and rendered back in the same
/// format. Parsing is strict: the whole input must be consumed and the
/// date must exist on the calendar (no Feb 31).
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::parse("24.12.1990").unwrap();
/// assert_eq!(birthday.to_string(), "24.12.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` when the input does not
    /// parse as a valid calendar date in that format.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDateFormat)
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
