use std::io::{self, BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::CliError;

/// A source of user-entered lines.
pub trait LineSource {
    /// Shows `prompt` and returns the next line without its line terminator.
    ///
    /// Closed input yields [`CliError::EndOfInput`].
    fn read_line(&mut self, prompt: &str) -> Result<String, CliError>;
}

/// Line-edited terminal input.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(line)
            }
            Err(ReadlineError::Eof) => Err(CliError::EndOfInput),
            Err(ReadlineError::Interrupted) => Err(CliError::Interrupted),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads lines from any buffered reader, echoing them after the prompt so a
/// piped transcript reads like an interactive session.
pub struct ScriptSource<R> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, prompt: &str) -> Result<String, CliError> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut buffer = String::new();
        let read = self
            .reader
            .read_line(&mut buffer)
            .map_err(CliError::InputStream)?;
        if read == 0 {
            writeln!(stdout)?;
            return Err(CliError::EndOfInput);
        }

        let line = buffer.trim_end_matches(['\r', '\n']).to_string();
        writeln!(stdout, "{line}")?;
        Ok(line)
    }
}
