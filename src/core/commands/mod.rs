use std::collections::BTreeMap;

mod cd;
mod exit;
mod help;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;

use crate::process::{ProcessError, ProcessExecutor};

/// Continuation signal returned by every dispatched command: either keep
/// prompting or stop the shell loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Exit,
}

#[derive(Debug)]
pub enum CommandError {
    MissingArgument(&'static str),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument(cmd) => {
                write!(f, "expected argument to \"{}\"", cmd)
            }
            CommandError::IoError(err) => write!(f, "{}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

pub trait Command {
    fn execute(&self, args: &[String]) -> Result<Status, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String]) -> Result<Status, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
            CommandType::Help(cmd) => cmd.execute(args),
        }
    }
}

/// Fixed registry of built-in commands plus the fallback process launcher.
///
/// The registry is populated once at construction and never mutated; lookup
/// is an exact, case-sensitive match on the first token.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));

        // The help banner lists every registered name, including help itself.
        let mut names: Vec<String> = commands.keys().cloned().collect();
        names.push("help".to_string());
        names.sort();
        commands.insert("help".to_string(), CommandType::Help(HelpCommand::new(names)));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    /// Dispatches one tokenized line. An empty token list is a no-op; a first
    /// token matching a built-in runs in-process; anything else is handed to
    /// the process launcher. Only `exit` ever yields `Status::Exit`.
    pub fn execute(&self, tokens: &[String]) -> Result<Status, CommandError> {
        let Some(name) = tokens.first() else {
            return Ok(Status::Continue);
        };

        if let Some(cmd) = self.commands.get(name) {
            cmd.execute(&tokens[1..])
        } else {
            self.process_executor.spawn_process(tokens)?;
            Ok(Status::Continue)
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}
