//! Test fixtures shared by the integration tests.
//!
//! Builds assistants pinned to a known date and runs scripted sessions
//! against in-memory input and output.

use chrono::NaiveDate;
use contact_assistant::assistant::help_text;
use contact_assistant::{run_session, Assistant, BirthdayWindow, FixedClock, Record};

/// Prompt used by scripted sessions; short so replies are easy to pick out.
pub const PROMPT: &str = "> ";

/// The date every fixture assistant believes is today.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// An assistant with an empty book, pinned to [`today`].
#[allow(dead_code)]
pub fn sample_assistant() -> Assistant {
    Assistant::new(FixedClock(today()), BirthdayWindow::default())
}

/// A record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).unwrap();
    }
    record
}

/// Run `script` (one command per line) and return the replies.
///
/// The help banner is dropped and the output is split on the prompt, so
/// each element is the reply to one input line (empty for blank lines and
/// for the final prompt at end of input).
#[allow(dead_code)]
pub fn run_script(assistant: &mut Assistant, script: &str) -> Vec<String> {
    let mut output = Vec::new();
    run_session(assistant, PROMPT, script.as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let banner = format!("{}\n", help_text());
    output
        .strip_prefix(&banner)
        .expect("session output starts with the help banner")
        .split(PROMPT)
        .skip(1)
        .map(|reply| reply.strip_suffix('\n').unwrap_or(reply).to_string())
        .collect()
}
