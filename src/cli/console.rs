use crate::errors::AppError;
use std::io::{BufRead, Write};

/// Line-oriented terminal wrapper. Generic so handlers can be driven from
/// an in-memory script as well as stdin/stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    // OUTPUT FUNCTIONS
    pub fn print(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    // INPUT FUNCTIONS

    /// One line with its terminator removed. Surrounding spaces are kept.
    pub fn read_line(&mut self) -> Result<String, AppError> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(AppError::EndOfInput);
        }

        if input.ends_with('\n') {
            input.pop();
            if input.ends_with('\r') {
                input.pop();
            }
        }
        Ok(input)
    }

    pub fn prompt(&mut self, prompt: &str) -> Result<String, AppError> {
        self.print(prompt)?;
        self.read_line()
    }

    /// Accepts surrounding whitespace and a leading sign.
    pub fn prompt_index(&mut self, prompt: &str) -> Result<i64, AppError> {
        let value = self.prompt(prompt)?;
        Ok(value.trim().parse::<i64>()?)
    }

    /// Keep asking until `valid` accepts the line.
    pub fn retry<V>(&mut self, prompt: &str, error: &str, valid: V) -> Result<String, AppError>
    where
        V: Fn(&str) -> Result<bool, AppError>,
    {
        let mut input = self.prompt(prompt)?;

        while !valid(&input)? {
            self.println(error)?;
            input = self.prompt(prompt)?;
        }
        Ok(input)
    }
}
