//! Command handlers for the assistant bot.
//!
//! Every command is described by a [`Command`] entry in [`COMMANDS`]. The
//! table drives both dispatch and the help banner. Handlers return a
//! [`CommandResult`]; the caller renders failures as reply text, so a bad
//! argument never ends the session.

use super::Assistant;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use std::collections::HashMap;

pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const PHONE_UPDATED: &str = "Phone number updated.";
pub const OLD_PHONE_NOT_FOUND: &str = "Old phone number not found.";
pub const BIRTHDAY_ADDED: &str = "Birthday added.";
pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// A function implementing one command.
pub type Handler = fn(&mut Assistant, &Args<'_>) -> CommandResult<String>;

/// What running a command does.
#[derive(Clone, Copy)]
pub enum Action {
    /// Run a handler and print its reply.
    Run(Handler),
    /// End the session.
    Exit,
}

/// One entry of the command table.
pub struct Command {
    /// Every word that invokes the command; the first is canonical.
    pub names: &'static [&'static str],
    pub usage: &'static str,
    pub description: &'static str,
    pub action: Action,
}

impl Command {
    pub fn name(&self) -> &'static str {
        self.names[0]
    }
}

/// All commands, in help order.
pub static COMMANDS: [Command; 9] = [
    Command {
        names: &["add"],
        usage: "add [name] [phone]",
        description: "Add a new contact with a phone number, or add a phone number to an existing contact.",
        action: Action::Run(add_contact),
    },
    Command {
        names: &["change"],
        usage: "change [name] [old phone] [new phone]",
        description: "Replace a phone number of a contact.",
        action: Action::Run(change_phone),
    },
    Command {
        names: &["phone"],
        usage: "phone [name]",
        description: "Show the phone numbers of a contact.",
        action: Action::Run(show_phones),
    },
    Command {
        names: &["all"],
        usage: "all",
        description: "Show every contact in the address book.",
        action: Action::Run(show_all_contacts),
    },
    Command {
        names: &["add-birthday"],
        usage: "add-birthday [name] [DD.MM.YYYY]",
        description: "Set the birthday of a contact.",
        action: Action::Run(add_birthday),
    },
    Command {
        names: &["show-birthday"],
        usage: "show-birthday [name]",
        description: "Show the birthday of a contact.",
        action: Action::Run(show_birthday),
    },
    Command {
        names: &["birthdays"],
        usage: "birthdays",
        description: "Show contacts with a birthday in the coming week.",
        action: Action::Run(birthdays),
    },
    Command {
        names: &["hello"],
        usage: "hello",
        description: "Get a greeting from the bot.",
        action: Action::Run(hello),
    },
    Command {
        names: &["close", "exit"],
        usage: "close or exit",
        description: "Close the program.",
        action: Action::Exit,
    },
];

/// Lookup from command word to its table entry.
pub struct CommandTable {
    by_name: HashMap<&'static str, &'static Command>,
}

impl CommandTable {
    /// Index every name of every entry in `commands`.
    pub fn new(commands: &'static [Command]) -> Self {
        let by_name = commands
            .iter()
            .flat_map(|command| command.names.iter().map(move |name| (*name, command)))
            .collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'static Command> {
        self.by_name.get(name).copied()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new(&COMMANDS)
    }
}

/// The arguments of one command line, with the command they belong to.
pub struct Args<'a> {
    command: &'static Command,
    values: &'a [&'a str],
}

impl<'a> Args<'a> {
    pub fn new(command: &'static Command, values: &'a [&'a str]) -> Self {
        Self { command, values }
    }

    /// Exactly `N` arguments.
    pub fn exact<const N: usize>(&self) -> CommandResult<[&'a str; N]> {
        <[&'a str; N]>::try_from(self.values).map_err(|_| self.count_error())
    }

    /// The first `N` arguments; any beyond those are ignored.
    pub fn at_least<const N: usize>(&self) -> CommandResult<[&'a str; N]> {
        self.values
            .get(..N)
            .and_then(|head| <[&'a str; N]>::try_from(head).ok())
            .ok_or_else(|| self.count_error())
    }

    fn count_error(&self) -> CommandError {
        CommandError::ArgumentCount {
            command: self.command.name(),
            usage: self.command.usage,
        }
    }
}

pub fn hello(_: &mut Assistant, _: &Args<'_>) -> CommandResult<String> {
    Ok(GREETING.to_string())
}

/// Create the contact if needed, then add the phone.
///
/// A new contact stays in the book even when its phone is rejected.
pub fn add_contact(assistant: &mut Assistant, args: &Args<'_>) -> CommandResult<String> {
    let [name, phone] = args.at_least::<2>()?;

    let (record, created) = assistant.book.find_or_create(name);
    record.add_phone(phone)?;

    let message = if created { CONTACT_ADDED } else { CONTACT_UPDATED };
    Ok(message.to_string())
}

pub fn change_phone(assistant: &mut Assistant, args: &Args<'_>) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args.exact::<3>()?;

    let Some(record) = assistant.book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };

    if record.edit_phone(old_phone, new_phone)? {
        Ok(PHONE_UPDATED.to_string())
    } else {
        Ok(OLD_PHONE_NOT_FOUND.to_string())
    }
}

pub fn show_phones(assistant: &mut Assistant, args: &Args<'_>) -> CommandResult<String> {
    let [name] = args.exact::<1>()?;

    Ok(assistant
        .book
        .find(name)
        .map(Record::phones_display)
        .unwrap_or_else(|| CONTACT_NOT_FOUND.to_string()))
}

pub fn show_all_contacts(assistant: &mut Assistant, _: &Args<'_>) -> CommandResult<String> {
    Ok(assistant
        .book
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn add_birthday(assistant: &mut Assistant, args: &Args<'_>) -> CommandResult<String> {
    let [name, date] = args.exact::<2>()?;

    match assistant.book.find_mut(name) {
        Some(record) => {
            record.add_birthday(date)?;
            Ok(BIRTHDAY_ADDED.to_string())
        }
        None => Ok(CONTACT_NOT_FOUND.to_string()),
    }
}

pub fn show_birthday(assistant: &mut Assistant, args: &Args<'_>) -> CommandResult<String> {
    let [name] = args.exact::<1>()?;

    Ok(assistant
        .book
        .find(name)
        .map(Record::show_birthday)
        .unwrap_or_else(|| CONTACT_NOT_FOUND.to_string()))
}

/// Names with an upcoming birthday, comma separated.
pub fn birthdays(assistant: &mut Assistant, _: &Args<'_>) -> CommandResult<String> {
    let today = assistant.clock.today();
    let names = assistant
        .book
        .upcoming_birthdays_within(today, &assistant.window);
    Ok(names.join(", "))
}
