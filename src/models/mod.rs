//! Contact data model.
//!
//! A [`Record`] is one contact; the [`AddressBook`] owns every record, keyed
//! by name, and answers the upcoming-birthdays query.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, BirthdayWindow};
pub use record::Record;
