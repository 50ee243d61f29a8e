use std::io::BufRead;

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use crate::errors::CliError;

/// Line-oriented input for the interaction loop. `Ok(None)` signals end of input.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    /// Whether the source draws `prompt` itself. When false the loop prints it first.
    fn renders_prompt(&self) -> bool {
        false
    }
}

/// Reads lines from any buffered reader: piped stdin in script mode, or in-memory text in tests.
pub struct ScriptInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Interactive terminal input with line editing and history.
pub struct ReadlineInput {
    editor: Editor<(), DefaultHistory>,
}

impl ReadlineInput {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: Editor::new()?,
        })
    }
}

impl LineSource for ReadlineInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.trim()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn renders_prompt(&self) -> bool {
        true
    }
}
