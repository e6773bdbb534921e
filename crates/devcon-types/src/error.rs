//! Error types for DEVCON.

use std::io;

use crate::value::ValueType;

/// Errors produced by the console engine and its hosts.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("No overload for command '{0}' matches given parameters.")]
    NoMatchingOverload(String),

    #[error("cannot parse '{token}' as {value_type}")]
    Parse {
        value_type: ValueType,
        token: String,
    },

    #[error("no parser registered for type '{0}'")]
    UnknownType(ValueType),

    #[error("command '{command}' failed: {source}")]
    Handler {
        command: String,
        #[source]
        source: Box<ConsoleError>,
    },

    #[error("argument error: {0}")]
    Argument(String),

    #[error("{0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Coarse classification of a [`ConsoleError`], for hosts that render
/// `Error(kind, message)` without inspecting payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownCommand,
    NoMatchingOverload,
    Parse,
    UnknownType,
    Handler,
    Argument,
    Command,
    Config,
}

impl ConsoleError {
    /// The kind of failure this error represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCommand(_) => ErrorKind::UnknownCommand,
            Self::NoMatchingOverload(_) => ErrorKind::NoMatchingOverload,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::UnknownType(_) => ErrorKind::UnknownType,
            Self::Handler { .. } => ErrorKind::Handler,
            Self::Argument(_) => ErrorKind::Argument,
            Self::Command(_) => ErrorKind::Command,
            Self::Config(_) | Self::Io(_) | Self::TomlParse(_) => ErrorKind::Config,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_display() {
        let e = ConsoleError::UnknownCommand("frob".into());
        assert_eq!(format!("{e}"), "Unknown command 'frob'");
    }

    #[test]
    fn no_overload_display() {
        let e = ConsoleError::NoMatchingOverload("add".into());
        assert_eq!(
            format!("{e}"),
            "No overload for command 'add' matches given parameters."
        );
    }

    #[test]
    fn parse_error_display() {
        let e = ConsoleError::Parse {
            value_type: ValueType::Int,
            token: "abc".into(),
        };
        assert_eq!(format!("{e}"), "cannot parse 'abc' as int");
    }

    #[test]
    fn unknown_type_display() {
        let e = ConsoleError::UnknownType(ValueType::Custom("color"));
        assert_eq!(format!("{e}"), "no parser registered for type 'color'");
    }

    #[test]
    fn handler_error_wraps_cause() {
        let e = ConsoleError::Handler {
            command: "boom".into(),
            source: Box::new(ConsoleError::Command("exploded".into())),
        };
        assert_eq!(format!("{e}"), "command 'boom' failed: exploded");
        let source = std::error::Error::source(&e).unwrap();
        assert_eq!(source.to_string(), "exploded");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: ConsoleError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
        assert_eq!(e.kind(), ErrorKind::Config);
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: ConsoleError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn kinds() {
        assert_eq!(
            ConsoleError::UnknownCommand("x".into()).kind(),
            ErrorKind::UnknownCommand
        );
        assert_eq!(
            ConsoleError::NoMatchingOverload("x".into()).kind(),
            ErrorKind::NoMatchingOverload
        );
        assert_eq!(
            ConsoleError::UnknownType(ValueType::Bool).kind(),
            ErrorKind::UnknownType
        );
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(ConsoleError::Argument("oops".into()));
        assert!(r.is_err());
    }
}
