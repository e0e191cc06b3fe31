pub mod memory;
pub mod txt;

use crate::domain::Contact;
use crate::errors::AppError;
use std::env;
use std::fs;
use std::path::Path;

pub use memory::MemStore;
pub use txt::TxtStore;

/// Used when `CONTACTS_FILE` is not set.
pub const DEFAULT_STORAGE_PATH: &str = "contacts.txt";

pub trait ContactStore {
    /// Fails with `AppError::NotFound` when there is nothing to load.
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    /// Replaces whatever was stored before.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

/// `.env` is read once at startup, so a `CONTACTS_FILE` set there is visible here.
pub fn storage_path() -> String {
    env::var("CONTACTS_FILE").unwrap_or(DEFAULT_STORAGE_PATH.to_string())
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
