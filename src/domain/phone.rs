//! Phone value object.

use super::errors::ValidationError;
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// The address book uses a fixed national scheme: exactly ten decimal
/// digits, no separators or country prefix.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value is exactly
    /// ten ASCII decimal digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(Self(value))
    }

    /// Validate phone format: exactly ten decimal digits.
    fn is_valid(value: &str) -> bool {
        value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Overwrite the stored value without validation.
    ///
    /// `Record::edit_phone` replaces a number in place and deliberately
    /// skips re-validation of the replacement value, so this stays
    /// crate-private.
    pub(crate) fn set_unchecked(&mut self, value: String) {
        self.0 = value;
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("123456789a").is_err());
        assert!(Phone::new("123-456-78").is_err());
        assert!(Phone::new("0000000000").is_ok());
        assert!(Phone::new("9876543210").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Ten characters, all numeric per Unicode, but not ASCII digits.
        assert!(Phone::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_phone_error_kind() {
        assert_eq!(
            Phone::new("abc").unwrap_err(),
            ValidationError::InvalidPhone
        );
    }

    #[test]
    fn test_phone_display_round_trips() {
        let phone = Phone::new("5551234567").unwrap();
        assert_eq!(format!("{}", phone), "5551234567");
    }
}
