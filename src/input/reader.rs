use crate::error::ShellError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Reads one line of input at a time from the interactive stream.
pub struct LineReader {
    editor: DefaultEditor,
}

impl LineReader {
    pub fn new() -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;
        Ok(LineReader { editor })
    }

    /// Reads a single line against the given prompt, without the trailing
    /// newline. Returns `None` at end of input. A Ctrl-C interrupt yields an
    /// empty line so the caller simply re-prompts.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
