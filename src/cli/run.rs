use crate::cli::Console;
use crate::cli::command::{INVALID_CHOICE, parse_command, show_menu};
use crate::domain::{Command, Contact};
use crate::errors::AppError;
use crate::store::{ContactStore, MemStore, TxtStore};
use crate::validation::{is_valid_email, is_valid_phone_number};
use log::{debug, warn};
use std::io::{self, BufRead, Write};

const INVALID_INDEX: &str = "Invalid index. Please enter a valid index.";
const EMAIL_PROMPT: &str = "Enter email address: ";
const PHONE_PROMPT: &str = "Enter phone number: ";

/// Owns the contact list for the whole session and runs the menu loop.
pub struct ContactManager<R, W> {
    console: Console<R, W>,
    contacts: MemStore,
    storage: Box<dyn ContactStore>,
}

pub fn run_app() -> Result<(), AppError> {
    let storage = TxtStore::from_env();
    debug!("contacts file is {}", storage.path.display());

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());

    ContactManager::new(console, Box::new(storage)).run()
}

impl<R: BufRead, W: Write> ContactManager<R, W> {
    pub fn new(console: Console<R, W>, storage: Box<dyn ContactStore>) -> Self {
        Self {
            console,
            contacts: MemStore::new(),
            storage,
        }
    }

    pub fn with_contacts(mut self, contacts: MemStore) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn contacts(&self) -> &MemStore {
        &self.contacts
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Returns once the user quits or input runs out. Failures inside a
    /// handler are reported and the menu comes back; only a broken console
    /// ends the loop with an error.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            show_menu(&mut self.console)?;

            let choice = match self.console.read_line() {
                Ok(choice) => choice,
                Err(AppError::EndOfInput) => {
                    debug!("input closed at menu");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let command = match parse_command(&choice) {
                Ok(command) => command,
                Err(e) => {
                    debug!("{e}");
                    self.console.println(INVALID_CHOICE)?;
                    continue;
                }
            };

            if command == Command::Quit {
                self.console.println("Goodbye!")?;
                return Ok(());
            }

            match self.dispatch(command) {
                Ok(()) => {}
                Err(AppError::EndOfInput) => {
                    debug!("input closed during {command:?}");
                    return Ok(());
                }
                Err(e) => {
                    warn!("{command:?} failed: {e}");
                    eprintln!("{e}");
                }
            }
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<(), AppError> {
        debug!("dispatching {command:?}");

        match command {
            Command::DisplayContacts => self.display_contacts(),
            Command::AddContact => self.add_contact(),
            Command::RemoveContact => self.remove_contact(),
            Command::UpdateContact => self.update_contact(),
            Command::SearchContacts => self.search_contacts(),
            Command::SaveContacts => self.save_contacts(),
            Command::LoadContacts => self.load_contacts(),
            Command::Quit => Ok(()),
        }
    }

    pub fn display_contacts(&mut self) -> Result<(), AppError> {
        if self.contacts.is_empty() {
            return self.console.println("There are no contacts to display.");
        }

        for contact in self.contacts.iter() {
            self.console.println(&contact.to_string())?;
        }
        Ok(())
    }

    pub fn add_contact(&mut self) -> Result<(), AppError> {
        let first_name = self.console.prompt("Enter first name: ")?;
        let last_name = self.console.prompt("Enter last name: ")?;

        let email = self.console.retry(
            EMAIL_PROMPT,
            "Invalid email address. Please enter a valid email address.",
            is_valid_email,
        )?;

        let phone = self.console.retry(
            PHONE_PROMPT,
            "Invalid phone number. Please enter a valid phone number.",
            is_valid_phone_number,
        )?;

        self.contacts
            .add_contact(Contact::new(first_name, last_name, email, phone));
        debug!("contact added at index {}", self.contacts.len() - 1);

        self.console.println("Contact added successfully.")
    }

    pub fn remove_contact(&mut self) -> Result<(), AppError> {
        let index = self
            .console
            .prompt_index("Enter the index of the contact to remove: ")?;

        let removed = self
            .contacts
            .checked_index(index)
            .and_then(|idx| self.contacts.delete_contact(idx));

        match removed {
            Some(_) => {
                debug!("contact removed at index {index}");
                self.console.println("Contact removed successfully.")
            }
            None => self.console.println(INVALID_INDEX),
        }
    }

    /// Blank answers keep the current value. A non-blank email or phone that
    /// fails validation is reported and the old value kept; the update is
    /// still reported as successful.
    pub fn update_contact(&mut self) -> Result<(), AppError> {
        let index = self
            .console
            .prompt_index("Enter the index of the contact to update: ")?;

        let Some(contact) = self
            .contacts
            .checked_index(index)
            .and_then(|idx| self.contacts.get_mut(idx))
        else {
            return self.console.println(INVALID_INDEX);
        };
        let console = &mut self.console;

        let first_name = console.prompt(&format!("Enter new first name ({}): ", contact.first_name))?;
        if !is_blank(&first_name) {
            contact.first_name = first_name;
        }

        let last_name = console.prompt(&format!("Enter new last name ({}): ", contact.last_name))?;
        if !is_blank(&last_name) {
            contact.last_name = last_name;
        }

        let email = console.prompt(&format!("Enter new email address ({}): ", contact.email))?;
        if !is_blank(&email) {
            if is_valid_email(&email)? {
                contact.email = email;
            } else {
                console.println("Invalid email address. Email address not updated.")?;
            }
        }

        let phone = console.prompt(&format!("Enter new phone number ({}): ", contact.phone))?;
        if !is_blank(&phone) {
            if is_valid_phone_number(&phone)? {
                contact.phone = phone;
            } else {
                console.println("Invalid phone number. Phone number not updated.")?;
            }
        }

        debug!("contact updated at index {index}");
        console.println("Contact updated successfully.")
    }

    pub fn search_contacts(&mut self) -> Result<(), AppError> {
        let name = self.console.prompt("Enter a name to search for: ")?;

        let matches = self.contacts.search_by_name(&name);

        if matches.is_empty() {
            return self
                .console
                .println(&format!("No contacts found with name '{}'.", name));
        }

        self.console
            .println(&format!("Contacts found with name '{}':", name))?;
        for contact in matches {
            self.console.println(&contact.to_string())?;
        }
        Ok(())
    }

    pub fn save_contacts(&mut self) -> Result<(), AppError> {
        self.storage.save(self.contacts.contact_list())?;
        self.console.println("Contacts saved to file.")
    }

    /// A missing file empties the list. Any other failure leaves it untouched.
    pub fn load_contacts(&mut self) -> Result<(), AppError> {
        match self.storage.load() {
            Ok(contacts) => {
                self.contacts.replace(contacts);
                self.console.println("Contacts loaded from file.")
            }
            Err(AppError::NotFound(what)) => {
                debug!("{what} not found, starting empty");
                self.contacts.replace(Vec::new());
                self.console.println("No contacts file found.")
            }
            Err(e) => Err(e),
        }
    }
}

fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
