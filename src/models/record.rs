//! Record model representing one contact.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reply used when a record has no birthday.
pub const NO_BIRTHDAY: &str = "No birthday set.";

/// A single contact: a name, its phone numbers and an optional birthday.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// repeat; the birthday is replaced on every successful set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and leaves the phone list
    /// untouched when `phone` is not ten digits.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone`, reporting whether one was
    /// found.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new`.
    ///
    /// Returns `Ok(false)` when `old` is not on the record. The new number is
    /// appended after the remaining phones, and the list is only modified
    /// once `new` has passed validation.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when `new` is not ten digits.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        if self.find_phone(old).is_none() {
            return Ok(false);
        }

        let new = Phone::new(new)?;
        self.remove_phone(old);
        self.phones.push(new);
        Ok(true)
    }

    /// Parse `date` as `DD.MM.YYYY` and store it, replacing any previous
    /// birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` and keeps the previous
    /// birthday when `date` does not parse.
    pub fn add_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    /// The birthday as `DD.MM.YYYY`, or `"No birthday set."`.
    pub fn show_birthday(&self) -> String {
        match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => NO_BIRTHDAY.to_string(),
        }
    }

    /// Phones joined with `", "`; empty when the record has none.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_display())
    }
}
