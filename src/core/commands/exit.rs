use super::{Command, CommandError, Status};

/// Signals loop termination. Any arguments are ignored and no other side
/// effect takes place.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String]) -> Result<Status, CommandError> {
        Ok(Status::Exit)
    }
}
