use std::fmt;

use serde::Serialize;

use crate::errors::AppError;

/// Number of fields in a persisted record.
pub const RECORD_FIELDS: usize = 4;

/// Field order here is the on-disk column order.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(first_name: String, last_name: String, email: String, phone: String) -> Self {
        Contact {
            first_name,
            last_name,
            email,
            phone,
        }
    }

    /// Case-sensitive substring match against first or last name.
    pub fn name_contains(&self, query: &str) -> bool {
        self.first_name.contains(query) || self.last_name.contains(query)
    }

    /// True when any field would be split apart by the comma delimiter.
    pub fn has_delimiter(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email, &self.phone]
            .iter()
            .any(|field| field.contains(','))
    }

    /// Build a contact from the fields of one persisted line. Fields past
    /// the fourth are ignored. `line` is the 1-based line in the file.
    pub fn from_fields(fields: &[&str], line: u64) -> Result<Self, AppError> {
        match fields {
            [first, last, email, phone, ..] => Ok(Contact::new(
                first.to_string(),
                last.to_string(),
                email.to_string(),
                phone.to_string(),
            )),
            _ => Err(AppError::MalformedRecord {
                line,
                fields: fields.len(),
            }),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.first_name, self.last_name, self.email, self.phone
        )
    }
}
