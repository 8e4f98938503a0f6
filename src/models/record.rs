//! Record model representing a single contact.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use std::fmt;

/// A single contact: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is fixed at creation and serves as the record's key in the
/// address book. Phones keep insertion order and may repeat; the birthday
/// is a single value that re-adding replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone list.
    ///
    /// Duplicates are allowed; there is no uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when the value is not ten
    /// decimal digits.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose value equals `value`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneNotFound` when no phone matches.
    pub fn remove_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or(ValidationError::PhoneNotFound)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the value of the first phone equal to `old` with `new`.
    ///
    /// The replacement value is not re-validated against the ten-digit
    /// rule.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneNotFound` when `old` is absent.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let phone = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or(ValidationError::PhoneNotFound)?;
        phone.set_unchecked(new.to_string());
        Ok(())
    }

    /// Find the first phone whose value equals `value`. A miss is not an
    /// error.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Parse `value` and store it as the birthday, replacing any prior one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` on a bad date string.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        match &self.birthday {
            Some(birthday) => write!(
                f,
                "Contact name: {}, phones: {}, birthday: {}",
                self.name, phones, birthday
            ),
            None => write!(f, "Contact name: {}, phones: {}", self.name, phones),
        }
    }
}
