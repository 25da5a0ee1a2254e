//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual form of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Parsed from `DD.MM.YYYY` with zero-padded day and month and a four digit
/// year. The date must exist in the calendar, so `30.02.2000` is rejected.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("05.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.03.1990");
/// assert!(Birthday::new("5.3.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the value does not
    /// match the pattern, names a date that does not exist, or has year
    /// 0000.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();

        if !BIRTHDAY_PATTERN.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        match NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT) {
            // Year 0000 parses as 1 BC
            Ok(date) if date.year() >= 1 => Ok(Self(date)),
            _ => Err(ValidationError::InvalidBirthday(value.to_string())),
        }
    }

    /// Wrap an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// Returns `None` for a 29 February birthday when `year` is not a leap
    /// year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.0.with_year(year)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
