//! Console trait, the standard-stream implementation, and prompt helpers

use std::io::{self, Write};

use crate::error::ConsoleError;

/// Blocking line-oriented console I/O.
///
/// Implementations return input with surrounding whitespace trimmed and
/// report an exhausted input stream as [`ConsoleError::Eof`] so callers can
/// exit cleanly instead of spinning on a closed stream.
pub trait Console: Send {
    /// Read one line of input.
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Write text without a trailing newline.
    fn write(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Write text followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Write a prompt and read the response.
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        self.write(text)?;
        self.read_line()
    }
}

/// Console backed by the process stdin/stdout.
pub struct StdConsole;

impl StdConsole {
    /// Creates a new StdConsole instance
    pub fn new() -> Self {
        StdConsole
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            return Err(ConsoleError::Eof);
        }
        Ok(input.trim().to_string())
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        // Prompts carry no newline, so flush before blocking on input
        print!("{}", text);
        io::stdout().flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        println!("{}", text);
        Ok(())
    }
}

/// Prompt until the user enters a non-blank line.
///
/// `blank_notice` is printed after each blank response.
pub fn prompt_nonblank(
    console: &mut dyn Console,
    prompt: &str,
    blank_notice: &str,
) -> Result<String, ConsoleError> {
    loop {
        let input = console.prompt(prompt)?;
        if !input.is_empty() {
            return Ok(input);
        }
        console.write_line(blank_notice)?;
    }
}

/// Prompt until the user answers "y" or "n", case-insensitive.
///
/// Anything else, including "yes" and "no", prints `invalid_notice` and
/// prompts again.
pub fn prompt_yes_no(
    console: &mut dyn Console,
    prompt: &str,
    invalid_notice: &str,
) -> Result<bool, ConsoleError> {
    loop {
        let response = console.prompt(prompt)?;
        match response.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => console.write_line(invalid_notice)?,
        }
    }
}
