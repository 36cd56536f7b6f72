use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let mut matched = false;
            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    flag.value = Some("true".to_string());
                    matched = true;
                }
            }
            if !matched {
                return Err(ShellError::FlagError(format!("unknown flag: {}", arg)));
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn print_help(&self) {
        println!("Usage: dsh [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long() {
        let mut flags = Flags::new();
        flags
            .parse(&["-h".to_string(), "--version".to_string()])
            .expect("parse failed");

        assert!(flags.is_set("help"));
        assert!(flags.is_set("version"));
    }

    // Diagnostics are always written to stderr; there is no flag that
    // suppresses them.
    #[test]
    fn test_no_quiet_flag() {
        let mut flags = Flags::new();
        let result = flags.parse(&["-q".to_string()]);

        assert!(matches!(result, Err(ShellError::FlagError(_))));
        assert!(!flags.is_set("quiet"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let mut flags = Flags::new();
        let result = flags.parse(&["--no-such-flag".to_string()]);

        assert!(matches!(result, Err(ShellError::FlagError(_))));
    }
}
