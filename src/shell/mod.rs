use crate::core::commands::{CommandExecutor, Status};
use crate::core::tokenizer::tokenize;
use crate::error::ShellError;
use crate::input::LineReader;

const PROMPT: &str = "> ";

pub struct Shell {
    reader: LineReader,
    executor: CommandExecutor,
}

impl Shell {
    pub fn new() -> Result<Self, ShellError> {
        let reader = LineReader::new()?;
        let executor = CommandExecutor::new();

        Ok(Shell { reader, executor })
    }

    /// The read-tokenize-dispatch loop. Runs until `exit` or end of input;
    /// every recoverable failure is reported to stderr and the loop keeps
    /// prompting.
    pub fn run(&mut self) -> Result<(), ShellError> {
        while let Some(line) = self.reader.read_line(PROMPT)? {
            let tokens = tokenize(&line);

            match self.executor.execute(&tokens) {
                Ok(Status::Continue) => {}
                Ok(Status::Exit) => break,
                Err(e) => eprintln!("dsh: {}", e),
            }
        }
        Ok(())
    }
}
