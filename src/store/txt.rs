use super::*;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// One contact per line, `first,last,email,phone`, no header and no quoting.
/// A comma inside a field cannot be represented: the record gains extra
/// columns on disk and the field is cut short when read back.
pub struct TxtStore {
    pub path: PathBuf,
}

impl TxtStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `CONTACTS_FILE`, or `contacts.txt` in the working directory.
    pub fn from_env() -> Self {
        Self::new(storage_path())
    }
}

impl ContactStore for TxtStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Err(AppError::NotFound("Contacts file".to_string()));
        }

        let reader = BufReader::new(File::open(&self.path)?);

        // Split by hand so the reported line matches what an editor shows.
        // Empty lines are skipped and still counted.
        let mut contacts = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            contacts.push(Contact::from_fields(&fields, idx as u64 + 1)?);
        }

        debug!("loaded {} contacts from {}", contacts.len(), self.path.display());
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Truncates any existing file. The handle is released when `writer`
        // drops, including on an early return from a failed write.
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_path(&self.path)?;

        for (index, contact) in contacts.iter().enumerate() {
            if contact.has_delimiter() {
                warn!(
                    "contact {} in {} contains a comma and will not load back as written",
                    index,
                    self.path.display()
                );
            }
            writer.serialize(contact)?;
        }

        writer.flush()?;

        debug!("saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }
}
