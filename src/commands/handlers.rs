//! Command handlers.
//!
//! Each handler takes the positional arguments and the address book and
//! returns either the reply to print or a `CommandError` for the dispatch
//! boundary to render. Handlers that report a recoverable condition in
//! prose ("Contact X not found.") return it as a success reply, matching
//! the assistant's conversational tone.

use crate::book::AddressBook;
use crate::domain::Phone;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::Local;
use tracing::debug;

/// `add <name> <phone>`: create the contact if needed, then add the phone.
///
/// The record is inserted before the phone is validated, so an invalid
/// phone still leaves the (possibly phoneless) contact in the book.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArguments);
    };

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name.clone()));
        debug!(%name, "created contact");
        "Contact added."
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }
    Ok(message.to_string())
}

/// `change <name> <old> <new>`: replace a phone value on a contact.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, old, new, ..] = args else {
        return Err(CommandError::MissingArguments);
    };

    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old, new)?;
            Ok("Phone changed.".to_string())
        }
        None => Ok(format!("Contact {} not found.", name)),
    }
}

/// `phone <name>`: list a contact's phone numbers.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments);
    };

    match book.find(name) {
        Some(record) => {
            let phones = record
                .phones()
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            Ok(format!("{}: {}", name, phones))
        }
        None => Ok(format!("Contact {} not found.", name)),
    }
}

/// `all`: list every contact, one per line.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        "No contacts.".to_string()
    } else {
        book.to_string()
    }
}

/// `add-birthday <name> <DD.MM.YYYY>`: set or replace a contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, birthday] = args else {
        return Ok("Give me name and birthday (DD.MM.YYYY) please.".to_string());
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(birthday)?;
            Ok(format!("Birthday added for {}.", name))
        }
        None => Ok(format!("Contact {} not found.", name)),
    }
}

/// `show-birthday <name>`: show a contact's birthday.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult {
    let [name] = args else {
        return Ok("Give me name please.".to_string());
    };

    match book.find(name).and_then(|record| record.birthday()) {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok(format!("No birthday for {}", name)),
    }
}

/// `birthdays`: contacts with birthdays inside the upcoming window,
/// measured from today.
pub fn birthdays(book: &AddressBook, window_days: i64) -> String {
    let today = Local::now().date_naive();
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        format!("No birthdays in next {} days.", window_days)
    } else {
        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_contact_then_update() {
        let mut book = AddressBook::new();
        let reply = add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        assert_eq!(reply, "Contact added.");

        let reply = add_contact(&args(&["John", "5555555555"]), &mut book).unwrap();
        assert_eq!(reply, "Contact updated.");
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_missing_args() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&["John"]), &mut book).unwrap_err(),
            CommandError::MissingArguments
        );
    }

    #[test]
    fn test_add_contact_invalid_phone_still_creates_record() {
        let mut book = AddressBook::new();
        let err = add_contact(&args(&["John", "123"]), &mut book).unwrap_err();
        assert_eq!(err, CommandError::Validation(ValidationError::InvalidPhone));
        // The contact exists, just without the rejected phone.
        assert!(book.find("John").unwrap().phones().is_empty());
    }

    #[test]
    fn test_change_contact() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();

        let reply =
            change_contact(&args(&["John", "1234567890", "0987654321"]), &mut book).unwrap();
        assert_eq!(reply, "Phone changed.");
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "0987654321");
    }

    #[test]
    fn test_change_contact_unknown_name() {
        let mut book = AddressBook::new();
        let reply =
            change_contact(&args(&["Ghost", "1234567890", "0987654321"]), &mut book).unwrap();
        assert_eq!(reply, "Contact Ghost not found.");
    }

    #[test]
    fn test_change_contact_unknown_phone() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        let err =
            change_contact(&args(&["John", "1111111111", "0987654321"]), &mut book).unwrap_err();
        assert_eq!(err, CommandError::Validation(ValidationError::PhoneNotFound));
    }

    #[test]
    fn test_show_phone() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        add_contact(&args(&["John", "5555555555"]), &mut book).unwrap();

        let reply = show_phone(&args(&["John"]), &book).unwrap();
        assert_eq!(reply, "John: 1234567890; 5555555555");
    }

    #[test]
    fn test_show_phone_unknown_name() {
        let book = AddressBook::new();
        let reply = show_phone(&args(&["Ghost"]), &book).unwrap();
        assert_eq!(reply, "Contact Ghost not found.");
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book), "No contacts.");

        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        assert_eq!(show_all(&book), "Contact name: John, phones: 1234567890");
    }

    #[test]
    fn test_add_birthday() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();

        let reply = add_birthday(&args(&["John", "24.12.1990"]), &mut book).unwrap();
        assert_eq!(reply, "Birthday added for John.");
    }

    #[test]
    fn test_add_birthday_wrong_arg_count() {
        let mut book = AddressBook::new();
        let reply = add_birthday(&args(&["John"]), &mut book).unwrap();
        assert_eq!(reply, "Give me name and birthday (DD.MM.YYYY) please.");

        let reply = add_birthday(&args(&["John", "24.12.1990", "extra"]), &mut book).unwrap();
        assert_eq!(reply, "Give me name and birthday (DD.MM.YYYY) please.");
    }

    #[test]
    fn test_add_birthday_invalid_date() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        let err = add_birthday(&args(&["John", "31.02.2000"]), &mut book).unwrap_err();
        assert_eq!(
            err,
            CommandError::Validation(ValidationError::InvalidDateFormat)
        );
    }

    #[test]
    fn test_add_birthday_unknown_name() {
        let mut book = AddressBook::new();
        let reply = add_birthday(&args(&["Ghost", "24.12.1990"]), &mut book).unwrap();
        assert_eq!(reply, "Contact Ghost not found.");
    }

    #[test]
    fn test_show_birthday() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        add_birthday(&args(&["John", "24.12.1990"]), &mut book).unwrap();

        let reply = show_birthday(&args(&["John"]), &book).unwrap();
        assert_eq!(reply, "John's birthday: 24.12.1990");
    }

    #[test]
    fn test_show_birthday_unset_or_unknown() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();

        let reply = show_birthday(&args(&["John"]), &book).unwrap();
        assert_eq!(reply, "No birthday for John");

        let reply = show_birthday(&args(&["Ghost"]), &book).unwrap();
        assert_eq!(reply, "No birthday for Ghost");
    }

    #[test]
    fn test_show_birthday_wrong_arg_count() {
        let book = AddressBook::new();
        let reply = show_birthday(&args(&[]), &book).unwrap();
        assert_eq!(reply, "Give me name please.");
    }

    #[test]
    fn test_birthdays_empty_book() {
        let book = AddressBook::new();
        assert_eq!(birthdays(&book, 7), "No birthdays in next 7 days.");
    }

    #[test]
    fn test_birthdays_lists_upcoming() {
        // A birthday "today" is always inside the window, whatever today is.
        let today = Local::now().date_naive();
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        add_birthday(&args(&["John", &today.format("%d.%m.%Y").to_string()]), &mut book).unwrap();

        let reply = birthdays(&book, 7);
        assert!(reply.starts_with("John: "));
    }
}
