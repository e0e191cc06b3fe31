use core::fmt;

use crate::domain::contact::RECORD_FIELDS;

#[derive(Debug)]
pub enum AppError {
    Csv(csv::Error),
    EndOfInput,
    Io(std::io::Error),
    MalformedRecord { line: u64, fields: usize },
    NotFound(String),
    ParseCommand(String),
    ParseInt(std::num::ParseIntError),
    Regex(regex::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Csv(e) => {
                write!(f, "Contacts file could not be processed: {}", e)
            }
            AppError::EndOfInput => {
                write!(f, "Input stream closed")
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::MalformedRecord { line, fields } => {
                write!(
                    f,
                    "Malformed record on line {}: expected {} fields, found {}",
                    line, RECORD_FIELDS, fields
                )
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::ParseInt(e) => {
                write!(f, "Invalid number format: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Validation pattern failed to compile: {}", e)
            }
        }
    }
}

impl std::error::Error for AppError {}
