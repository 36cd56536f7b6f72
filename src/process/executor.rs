use std::process::{Command, Stdio};

use super::ProcessError;

/// Launches external commands as child processes.
///
/// The program is located through the operating system's search path and the
/// shell's environment is inherited unchanged. At most one child is ever
/// outstanding: the parent blocks until the child exits or is killed by a
/// signal.
#[derive(Clone)]
pub struct ProcessExecutor;

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessExecutor {
    pub fn new() -> Self {
        ProcessExecutor
    }

    /// Spawns `args[0]` with the remaining tokens as its argument vector and
    /// waits for it to terminate. The child's exit status is not inspected;
    /// a command that fails or dies to a signal leaves the shell untouched.
    pub fn spawn_process(&self, args: &[String]) -> Result<(), ProcessError> {
        let Some(program) = args.first() else {
            return Ok(());
        };

        let mut command = Command::new(program);
        command
            .args(&args[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    return Err(ProcessError::CommandNotFound(program.clone()));
                }
                return Err(e.into());
            }
        };

        // Blocks until exit or signal termination; stop signals do not
        // end the wait.
        child.wait()?;
        Ok(())
    }
}
