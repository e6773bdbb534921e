//! Command resolution engine for DEVCON.
//!
//! A submitted line is tokenized into a command name and argument tokens.
//! The name selects a set of overloads from the registry; the first overload
//! whose parameters accept the tokens is bound and invoked. Command names
//! are also kept in a trie for prefix autocomplete.

pub mod builtins;
mod command;
mod console;
pub mod history;
pub mod parsers;
mod registry;
pub mod tokenizer;
pub mod trie;

/// Register the built-in commands (help, list, log*) into a console.
pub use builtins::register_builtins;
/// A single command overload.
pub use command::Command;
/// A command built from a closure.
pub use command::FnCommand;
/// A resolved call handed to a command.
pub use command::Invocation;
/// A declared command parameter.
pub use command::Param;
/// The console façade.
pub use console::Console;
/// Outcome of a successful submission.
pub use console::Submitted;
/// Bounded, most-recent-first line history.
pub use history::History;
/// Token-to-value converters keyed by value type.
pub use parsers::{ParserRegistry, ValueParser};
/// Command registry with overload resolution.
pub use registry::{CommandRegistry, CommandSignature, Resolution};
/// Command line tokenizer.
pub use tokenizer::{TokenizedLine, tokenize};
/// Prefix tree and its reusable suggestion buffer.
pub use trie::{SuggestionBuffer, Trie};

/// Foundation types re-exported for hosts.
pub use devcon_types::config::ConsoleConfig;
pub use devcon_types::error::{ConsoleError, ErrorKind, Result};
pub use devcon_types::host::{ConsoleHost, LogHost, Severity};
pub use devcon_types::value::{CustomValue, Value, ValueType};
