//! Source of the current date.
//!
//! The upcoming-birthdays query depends on "today". Reading it through a
//! trait lets the session run against a fixed date in tests.

use chrono::{Local, NaiveDate};

/// Provides today's calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
