//! Console configuration, loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConsoleError, Result};

/// Tunables for the console engine and its host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Maximum number of submitted lines kept in history.
    pub history_size: usize,
    /// Capacity of the per-keystroke suggestion buffer.
    pub max_suggestions: usize,
    /// Whether a prefix that is itself a command name is offered as a suggestion.
    pub include_exact_suggestion: bool,
    /// Prompt printed before each input line.
    pub prompt: String,
    /// Characters stripped from typed input before submission.
    pub prohibited_chars: Vec<char>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            history_size: 75,
            max_suggestions: 5,
            include_exact_suggestion: false,
            prompt: "> ".to_string(),
            prohibited_chars: Vec::new(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        if config.max_suggestions == 0 {
            return Err(ConsoleError::Config(
                "max_suggestions must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Remove every prohibited character from `input`.
    pub fn strip_prohibited(&self, input: &str) -> String {
        input
            .chars()
            .filter(|c| !self.prohibited_chars.contains(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ConsoleConfig::default();
        assert_eq!(c.history_size, 75);
        assert_eq!(c.max_suggestions, 5);
        assert!(!c.include_exact_suggestion);
        assert_eq!(c.prompt, "> ");
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let c = ConsoleConfig::from_toml_str("").unwrap();
        assert_eq!(c, ConsoleConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let c = ConsoleConfig::from_toml_str(
            r#"
history_size = 10
prompt = "$ "
prohibited_chars = ["`", "~"]
"#,
        )
        .unwrap();
        assert_eq!(c.history_size, 10);
        assert_eq!(c.prompt, "$ ");
        assert_eq!(c.prohibited_chars, vec!['`', '~']);
        assert_eq!(c.max_suggestions, 5);
    }

    #[test]
    fn zero_suggestions_rejected() {
        let err = ConsoleConfig::from_toml_str("max_suggestions = 0").unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn bad_toml_rejected() {
        let err = ConsoleConfig::from_toml_str("history_size = [[").unwrap_err();
        assert!(matches!(err, ConsoleError::TomlParse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devcon.toml");
        std::fs::write(&path, "max_suggestions = 3\n").unwrap();
        let c = ConsoleConfig::load(&path).unwrap();
        assert_eq!(c.max_suggestions, 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ConsoleConfig::load(Path::new("/nonexistent/devcon.toml")).unwrap_err();
        assert!(matches!(err, ConsoleError::Io(_)));
    }

    #[test]
    fn strip_prohibited_chars() {
        let c = ConsoleConfig {
            prohibited_chars: vec!['`'],
            ..ConsoleConfig::default()
        };
        assert_eq!(c.strip_prohibited("he`lp`"), "help");
    }
}
