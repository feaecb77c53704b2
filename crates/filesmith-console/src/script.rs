//! Scripted console for driving interactive flows in tests

use std::collections::VecDeque;

use crate::console::Console;
use crate::error::ConsoleError;

/// Console that replays canned input lines and records all output.
///
/// Reads past the end of the script return [`ConsoleError::Eof`], matching
/// what [`StdConsole`](crate::StdConsole) reports on a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: String,
}

impl ScriptedConsole {
    /// Creates a scripted console from a sequence of input lines.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Everything written to the console so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Number of scripted input lines not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        match self.inputs.pop_front() {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(ConsoleError::Eof),
        }
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.transcript.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }
}
