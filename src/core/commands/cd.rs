use super::{Command, CommandError, Status};
use std::env;
use std::path::Path;

/// Changes the process working directory. The new directory is inherited by
/// every subsequently launched child.
#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String]) -> Result<Status, CommandError> {
        let path = args
            .first()
            .ok_or(CommandError::MissingArgument("cd"))?;

        env::set_current_dir(Path::new(path))?;
        Ok(Status::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // The working directory is process-global, so every assertion that
    // touches it lives in this one test.
    #[test]
    fn test_cd_behavior() {
        let cmd = CdCommand::new();
        let original = env::current_dir().expect("no current dir");

        // Missing argument: error, directory unchanged.
        let result = cmd.execute(&[]);
        assert!(matches!(result, Err(CommandError::MissingArgument("cd"))));
        assert_eq!(env::current_dir().expect("no current dir"), original);

        // Nonexistent path: error, directory unchanged.
        let result = cmd.execute(&["/nonexistent-path-xyz".to_string()]);
        assert!(matches!(result, Err(CommandError::IoError(_))));
        assert_eq!(env::current_dir().expect("no current dir"), original);

        // Valid path: directory changes.
        let temp_dir = env::temp_dir();
        let status = cmd
            .execute(&[temp_dir.to_string_lossy().to_string()])
            .expect("cd to temp dir failed");
        assert_eq!(status, Status::Continue);
        assert_eq!(
            env::current_dir()
                .expect("no current dir")
                .canonicalize()
                .expect("canonicalize failed"),
            temp_dir.canonicalize().expect("canonicalize failed")
        );

        env::set_current_dir(original).expect("restore failed");
    }
}
