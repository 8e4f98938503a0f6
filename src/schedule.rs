//! Pure date helpers for birthday scheduling.
//!
//! These functions carry the calendar rules behind the upcoming-birthdays
//! query: finding a recurring date's next annual occurrence and moving
//! weekend occurrences to the following Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Return the next date strictly after `start` whose weekday is `target`.
///
/// When `start` already falls on `target`, the result is a full week
/// later; this function never returns `start` itself.
pub fn find_next_weekday(start: NaiveDate, target: Weekday) -> NaiveDate {
    let mut days_ahead = i64::from(target.num_days_from_monday())
        - i64::from(start.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    start + Duration::days(days_ahead)
}

/// Move a Saturday or Sunday date to the following Monday; weekdays pass
/// through unchanged. Idempotent.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => find_next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

/// The next annual occurrence of `birthday` on or after `today`.
///
/// Takes the birthday's month and day in the current year; when that date
/// has already passed, rolls forward one year.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = on_year(birthday, today.year());
    if this_year < today {
        on_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Project a recurring date into `year`. A Feb 29 birthday has no
/// counterpart in a non-leap year and is observed on Mar 1.
fn on_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday.with_year(year).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
    })
}
