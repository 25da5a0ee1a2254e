//! Contact Assistant - a command-line bot that keeps contacts in memory.
//!
//! The bot stores names, phone numbers and birthdays, answers lookups and
//! lists which contacts have a birthday in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record and the address book
//! - **clock**: Source of today's date for birthday queries
//! - **assistant**: Command table, handlers and the interactive session loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Session metrics

pub mod assistant;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use assistant::{run_session, Assistant, Outcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, SessionError};
pub use models::{AddressBook, BirthdayWindow, Record};
pub use observability::SessionMetrics;
