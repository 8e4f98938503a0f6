//! The in-memory address book.
//!
//! Records are kept in insertion order and keyed by contact name. Adding a
//! record under an existing name replaces the old record in place, so a
//! contact keeps its position in listings for the life of the process.

use crate::models::Record;
use crate::schedule;
use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

/// A contact whose birthday falls inside the upcoming window, paired with
/// the weekend-adjusted date on which to congratulate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format("%Y.%m.%d")
        )
    }
}

/// The collection of all contact records, keyed by name.
///
/// Lives for the process duration only; there is no persistence.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same name.
    ///
    /// An unconditional upsert: the new record wins wholesale, no merging.
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Exact-match lookup by name, mutable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|i| &mut self.records[i])
    }

    /// Remove the record with the given name. A miss is a no-op.
    pub fn delete(&mut self, name: &str) {
        if let Some(index) = self.position(name) {
            self.records.remove(index);
        }
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contacts whose next birthday occurrence falls within `days` of
    /// `today`, in record insertion order.
    ///
    /// The window is inclusive on both ends: a birthday today and one
    /// exactly `days` out both qualify. A kept occurrence that lands on a
    /// weekend is congratulated the following Monday, which may move the
    /// reported date past the window's edge.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let occurrence = schedule::next_occurrence(birthday.date(), today);
            let days_until = (occurrence - today).num_days();
            if (0..=days).contains(&days_until) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: schedule::adjust_for_weekend(occurrence),
                });
            }
        }
        debug!(count = upcoming.len(), days, "computed upcoming birthdays");
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .records
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}
