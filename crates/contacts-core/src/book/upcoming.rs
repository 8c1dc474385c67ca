//! Upcoming-birthday query.
//!
//! A birthday is a recurring (month, day) pair. For a given `today` its next
//! occurrence is this year's date, or next year's when this year's has
//! already passed. A record matches when that occurrence lies within
//! `today ..= today + window_days`. The reported congratulation date moves
//! weekend occurrences to the following Monday; the window test always uses
//! the unshifted occurrence, so a Saturday birthday on the last day of the
//! window is reported on a Monday past it.
//!
//! Feb 29 birthdays fall on Feb 28 in non-leap years.

use std::fmt;

use jiff::{
    civil::{Date, Weekday},
    Span, ToSpan, Zoned,
};
use log::{debug, warn};

use super::AddressBook;
use crate::models::{Birthday, DottedDate, Record};

/// Default lookahead for [`AddressBook::get_upcoming_birthdays`].
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday falls inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// Occurrence date after the weekend shift
    pub congratulation_date: Date,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, birthday: {}",
            self.name,
            DottedDate(self.congratulation_date)
        )
    }
}

impl AddressBook {
    /// Returns every record whose next birthday falls within `window_days`
    /// of `today`, in insertion order.
    ///
    /// Records whose dates cannot be computed (for example, past the end of
    /// the supported calendar range) are logged and skipped. Windows reaching
    /// beyond the supported calendar range end at its first or last day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use contacts_core::{AddressBook, models::{Name, Record}};
    /// use jiff::civil::date;
    ///
    /// let mut book = AddressBook::new();
    /// let mut cara = Record::new(Name::new("Cara")?);
    /// cara.add_birthday("15.06.1992")?;
    /// book.add_record(cara);
    ///
    /// // 15.06.2025 is a Sunday, congratulated on Monday
    /// let upcoming = book.upcoming_birthdays(date(2025, 6, 10), 7);
    /// assert_eq!(upcoming[0].to_string(), "Contact name: Cara, birthday: 16.06.2025");
    /// # Ok::<(), contacts_core::ContactsError>(())
    /// ```
    pub fn upcoming_birthdays(&self, today: Date, window_days: i64) -> Vec<UpcomingBirthday> {
        let window_end = window_end(today, window_days);

        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                match upcoming_for(record, birthday, today, window_end) {
                    Ok(found) => found,
                    Err(e) => {
                        warn!(
                            "Skipping birthday of '{}' ({birthday}): {e}",
                            record.name()
                        );
                        None
                    }
                }
            })
            .collect()
    }

    /// Renders [`AddressBook::upcoming_birthdays`] one per line. Returns an
    /// empty string when nothing matches.
    pub fn render_upcoming_birthdays(&self, today: Date, window_days: i64) -> String {
        self.upcoming_birthdays(today, window_days)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders upcoming birthdays relative to the system-local current date.
    pub fn get_upcoming_birthdays(&self, window_days: i64) -> String {
        self.render_upcoming_birthdays(Zoned::now().date(), window_days)
    }
}

/// Last day of the window, clamped to the supported calendar range.
fn window_end(today: Date, window_days: i64) -> Date {
    match Span::new().try_days(window_days) {
        Ok(span) => today.saturating_add(span),
        Err(_) if window_days < 0 => Date::MIN,
        Err(_) => Date::MAX,
    }
}

/// Evaluates one record: `Ok(None)` when the next occurrence lies outside
/// the window.
fn upcoming_for(
    record: &Record,
    birthday: &Birthday,
    today: Date,
    window_end: Date,
) -> Result<Option<UpcomingBirthday>, jiff::Error> {
    let occurrence = next_occurrence(birthday, today)?;
    if occurrence < today || occurrence > window_end {
        return Ok(None);
    }

    Ok(Some(UpcomingBirthday {
        name: record.name().to_string(),
        congratulation_date: congratulation_date(occurrence)?,
    }))
}

/// The first occurrence of `birthday` on or after `today`.
fn next_occurrence(birthday: &Birthday, today: Date) -> Result<Date, jiff::Error> {
    let this_year = occurrence_in(today.year(), birthday)?;
    if this_year < today {
        occurrence_in(today.year() + 1, birthday)
    } else {
        Ok(this_year)
    }
}

/// The birthday's date in `year`, clamping Feb 29 to Feb 28 in non-leap
/// years.
fn occurrence_in(year: i16, birthday: &Birthday) -> Result<Date, jiff::Error> {
    let month_start = Date::new(year, birthday.month(), 1)?;
    let day = birthday.day().min(month_start.days_in_month());
    if day != birthday.day() {
        debug!("Clamping birthday {birthday} to day {day} in {year}");
    }
    Date::new(year, birthday.month(), day)
}

/// Moves Saturday and Sunday to the following Monday.
fn congratulation_date(occurrence: Date) -> Result<Date, jiff::Error> {
    let shift: i64 = match occurrence.weekday() {
        Weekday::Saturday => 2,
        Weekday::Sunday => 1,
        _ => 0,
    };
    occurrence.checked_add(shift.days())
}
