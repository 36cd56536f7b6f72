use super::{Command, CommandError, Status};

/// Prints the usage banner and the list of built-in command names.
#[derive(Clone)]
pub struct HelpCommand {
    builtin_names: Vec<String>,
}

impl HelpCommand {
    pub fn new(builtin_names: Vec<String>) -> Self {
        Self { builtin_names }
    }

    fn banner(&self) -> String {
        let mut banner = String::new();
        banner.push_str("dsh\n");
        banner.push_str("Type program names and arguments, and hit enter.\n");
        banner.push_str("The following are built in:\n");
        for name in &self.builtin_names {
            banner.push(' ');
            banner.push_str(name);
            banner.push('\n');
        }
        banner.push_str("Use the man command for information on other programs.");
        banner
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String]) -> Result<Status, CommandError> {
        println!("{}", self.banner());
        Ok(Status::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn help() -> HelpCommand {
        HelpCommand::new(vec![
            "cd".to_string(),
            "exit".to_string(),
            "help".to_string(),
        ])
    }

    #[test]
    fn test_help_always_continues() {
        let cmd = help();
        assert_eq!(cmd.execute(&[]).expect("help failed"), Status::Continue);
        assert_eq!(
            cmd.execute(&["ignored".to_string()]).expect("help failed"),
            Status::Continue
        );
    }

    #[test]
    fn test_banner_lists_builtins_with_single_space_indent() {
        let banner = help().banner();
        assert!(banner.contains("\n cd\n"));
        assert!(banner.contains("\n exit\n"));
        assert!(banner.contains("\n help\n"));
    }

    #[test]
    fn test_banner_is_identical_across_runs() {
        let cmd = help();
        assert_eq!(cmd.banner(), cmd.banner());
    }
}
