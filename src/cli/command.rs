use crate::cli::Console;
use crate::domain::Command;
use crate::errors::AppError;
use std::io::{BufRead, Write};

pub const MENU: [&str; 9] = [
    "Welcome to the Contact Manager!",
    "1. Display all contacts",
    "2. Add a new contact",
    "3. Remove an existing contact",
    "4. Update an existing contact",
    "5. Search for a contact by name",
    "6. Save contacts to file",
    "7. Load contacts from file",
    "8. Quit",
];

pub const CHOICE_PROMPT: &str = "Enter your choice (1-8): ";

pub const INVALID_CHOICE: &str = "Invalid input. Please enter a number between 1 and 8.";

pub fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), AppError> {
    for line in MENU {
        console.println(line)?;
    }
    console.print(CHOICE_PROMPT)
}

/// Exact match only: no trimming, no case folding.
pub fn parse_command(choice: &str) -> Result<Command, AppError> {
    match choice {
        "1" => Ok(Command::DisplayContacts),
        "2" => Ok(Command::AddContact),
        "3" => Ok(Command::RemoveContact),
        "4" => Ok(Command::UpdateContact),
        "5" => Ok(Command::SearchContacts),
        "6" => Ok(Command::SaveContacts),
        "7" => Ok(Command::LoadContacts),
        "8" => Ok(Command::Quit),
        _ => Err(AppError::ParseCommand(choice.to_string())),
    }
}
