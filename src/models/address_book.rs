//! The address book: every contact, keyed by name.

use super::record::Record;
use crate::domain::Birthday;
use chrono::{Datelike, NaiveDate};
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

/// Default length of the upcoming-birthdays window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Which birthdays count as "upcoming".
///
/// A birthday is upcoming when its anniversary falls on one of the `days`
/// days starting with today. Anniversaries that already passed this year
/// are dropped unless `wrap_year` is set, in which case they are moved to
/// next year first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub days: u32,
    pub wrap_year: bool,
}

impl BirthdayWindow {
    /// Days from `today` until the next counted anniversary of `birthday`.
    ///
    /// `None` when there is no anniversary to count: 29 February in a common
    /// year, unless `wrap_year` is set and next year has one. Negative when
    /// it already passed and `wrap_year` is off.
    pub fn days_until(&self, birthday: &Birthday, today: NaiveDate) -> Option<i64> {
        let this_year = birthday.in_year(today.year());

        let anniversary = match this_year {
            Some(date) if date >= today || !self.wrap_year => date,
            _ if self.wrap_year => birthday.in_year(today.year() + 1)?,
            _ => return None,
        };

        Some((anniversary - today).num_days())
    }

    /// Whether `days` away falls inside the window.
    pub fn contains(&self, days: i64) -> bool {
        (0..i64::from(self.days)).contains(&days)
    }
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            wrap_year: false,
        }
    }
}

/// All contacts, keyed by name and kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// A record already filed under that name is discarded in full; the
    /// replacement keeps the old one's position.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key, record).is_some() {
            debug!("Replaced existing record");
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// The record filed under `name`, creating an empty one if needed.
    ///
    /// The flag is `true` when the record was created by this call.
    pub fn find_or_create(&mut self, name: &str) -> (&mut Record, bool) {
        match self.records.entry(name.to_string()) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(Record::new(name)), true),
        }
    }

    /// Remove a record, keeping the order of the rest.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Names of contacts whose birthday is within the next seven days,
    /// today included.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<String> {
        self.upcoming_birthdays_within(today, &BirthdayWindow::default())
    }

    /// Names of contacts whose birthday falls inside `window`, in insertion
    /// order.
    ///
    /// Contacts born on 29 February are skipped in common years.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window: &BirthdayWindow,
    ) -> Vec<String> {
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            match window.days_until(birthday, today) {
                Some(days) if window.contains(days) => {
                    upcoming.push(record.name().as_str().to_string());
                }
                Some(_) => {}
                None => {
                    debug!(
                        name = %record.name(),
                        year = today.year(),
                        "Skipping birthday with no anniversary this year"
                    );
                }
            }
        }

        debug!(
            today = %today,
            window_days = window.days,
            count = upcoming.len(),
            "Computed upcoming birthdays"
        );

        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(name: &str, birthday: &str) -> Record {
        let mut record = Record::new(name);
        record.add_birthday(birthday).unwrap();
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());

        book.add_record(Record::new("John"));
        assert_eq!(book.len(), 1);
        assert!(book.find("John").is_some());
        assert!(book.find("john").is_none());
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_record_overwrites_entirely() {
        let mut book = AddressBook::new();
        let mut first = contact("John", "12.06.1990");
        first.add_phone("1111111111").unwrap();
        book.add_record(first);
        book.add_record(Record::new("Jane"));

        book.add_record(Record::new("John"));

        let john = book.find("John").unwrap();
        assert!(john.phones().is_empty());
        assert!(john.birthday().is_none());

        // Replacement keeps the original position
        let names: Vec<_> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["John", "Jane"]);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("John"));

        book.find_mut("John").unwrap().add_phone("1111111111").unwrap();

        assert_eq!(book.find("John").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_find_or_create() {
        let mut book = AddressBook::new();

        let (record, created) = book.find_or_create("John");
        assert!(created);
        record.add_phone("1111111111").unwrap();

        let (record, created) = book.find_or_create("John");
        assert!(!created);
        assert_eq!(record.phones().len(), 1);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("A"));
        book.add_record(Record::new("B"));
        book.add_record(Record::new("C"));

        assert!(book.delete("B").is_some());
        assert!(book.delete("B").is_none());

        let names: Vec<_> = (&book).into_iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_upcoming_birthdays_window_edges() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(contact("Yesterday", "09.06.1990"));
        book.add_record(contact("Today", "10.06.1990"));
        book.add_record(contact("InTwoDays", "12.06.1990"));
        book.add_record(contact("InSixDays", "16.06.1985"));
        book.add_record(contact("InSevenDays", "17.06.1985"));
        book.add_record(Record::new("NoBirthday"));

        assert_eq!(
            book.get_upcoming_birthdays(today),
            ["Today", "InTwoDays", "InSixDays"]
        );
    }

    #[test]
    fn test_upcoming_birthdays_does_not_wrap_by_default() {
        let today = date(2024, 12, 30);
        let mut book = AddressBook::new();
        book.add_record(contact("NewYear", "02.01.1990"));
        book.add_record(contact("NewYearsEve", "31.12.1990"));

        assert_eq!(book.get_upcoming_birthdays(today), ["NewYearsEve"]);
    }

    #[test]
    fn test_upcoming_birthdays_wraps_when_enabled() {
        let today = date(2024, 12, 30);
        let mut book = AddressBook::new();
        book.add_record(contact("NewYear", "02.01.1990"));
        book.add_record(contact("NewYearsEve", "31.12.1990"));
        book.add_record(contact("LastMonth", "15.11.1990"));

        let window = BirthdayWindow {
            days: 7,
            wrap_year: true,
        };
        assert_eq!(
            book.upcoming_birthdays_within(today, &window),
            ["NewYear", "NewYearsEve"]
        );
    }

    #[test]
    fn test_upcoming_birthdays_wrap_reaches_next_leap_day() {
        let today = date(2023, 12, 28);
        let mut book = AddressBook::new();
        book.add_record(contact("Leap", "29.02.2000"));

        let window = BirthdayWindow {
            days: 366,
            wrap_year: true,
        };
        assert_eq!(book.upcoming_birthdays_within(today, &window), ["Leap"]);
        assert_eq!(
            window.days_until(&Birthday::new("29.02.2000").unwrap(), today),
            Some(63)
        );

        // Without wrapping the common year still has no anniversary
        let window = BirthdayWindow {
            wrap_year: false,
            ..window
        };
        assert!(book.upcoming_birthdays_within(today, &window).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_skips_leap_day_in_common_year() {
        let mut book = AddressBook::new();
        book.add_record(contact("LeapDay", "29.02.2000"));
        book.add_record(contact("March", "01.03.1990"));

        assert_eq!(book.get_upcoming_birthdays(date(2023, 2, 27)), ["March"]);
        assert_eq!(
            book.get_upcoming_birthdays(date(2024, 2, 27)),
            ["LeapDay", "March"]
        );
    }

    #[test]
    fn test_upcoming_birthdays_custom_window() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(contact("Today", "10.06.1990"));
        book.add_record(contact("Tomorrow", "11.06.1990"));

        let window = BirthdayWindow {
            days: 1,
            wrap_year: false,
        };
        assert_eq!(book.upcoming_birthdays_within(today, &window), ["Today"]);
    }

    #[test]
    fn test_upcoming_birthdays_empty_book() {
        let book = AddressBook::new();
        assert!(book.get_upcoming_birthdays(date(2024, 6, 10)).is_empty());
    }

    #[test]
    fn test_days_until() {
        let window = BirthdayWindow::default();
        let today = date(2024, 6, 10);

        let born = |y, m, d| Birthday::from_date(date(y, m, d));

        assert_eq!(window.days_until(&born(1990, 6, 12), today), Some(2));
        assert_eq!(window.days_until(&born(1990, 6, 9), today), Some(-1));
        assert_eq!(window.days_until(&born(2000, 2, 29), date(2023, 1, 1)), None);
        assert!(window.contains(0));
        assert!(window.contains(6));
        assert!(!window.contains(7));
        assert!(!window.contains(-1));
    }
}
