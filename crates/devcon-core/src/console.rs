//! Console façade: tokenize, resolve, invoke, suggest.
//!
//! `submit` never lets a failure escape as a panic. Every error is logged
//! once to the host with [`Severity::Error`] and returned to the caller;
//! registries are never touched by a failed submission.

use devcon_types::config::ConsoleConfig;
use devcon_types::error::{ConsoleError, Result};
use devcon_types::host::{ConsoleHost, Severity};
use devcon_types::value::{Value, ValueType};

use crate::command::{Command, FnCommand, Invocation, Param};
use crate::parsers::ValueParser;
use crate::registry::CommandRegistry;
use crate::tokenizer::tokenize;
use crate::trie::SuggestionBuffer;

/// What a successful submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    /// The line was empty.
    NoOp,
    /// A command ran to completion.
    Invoked {
        command: String,
        /// Which of the name's overloads ran.
        overload: usize,
    },
}

/// The developer console engine.
pub struct Console {
    registry: CommandRegistry,
    host: Box<dyn ConsoleHost>,
    config: ConsoleConfig,
}

impl Console {
    /// Create a console with default configuration and no commands.
    pub fn new(host: impl ConsoleHost + 'static) -> Self {
        Self::with_config(host, ConsoleConfig::default())
    }

    /// Create a console with the given configuration and no commands.
    pub fn with_config(host: impl ConsoleHost + 'static, config: ConsoleConfig) -> Self {
        Self {
            registry: CommandRegistry::new(),
            host: Box::new(host),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// The command registry, for read-only inspection.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    // -- Registration --

    /// Register a command overload.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.registry.register(cmd);
    }

    /// Register a closure as a command overload. Empty description or usage
    /// means none.
    pub fn register_command<F>(
        &mut self,
        name: &str,
        params: Vec<Param>,
        handler: F,
        description: Option<&str>,
        usage: Option<&str>,
    ) where
        F: Fn(&Invocation<'_>) -> Result<()> + 'static,
    {
        let cmd = FnCommand::new(name, params, handler)
            .with_description(description.unwrap_or_default())
            .with_usage(usage.unwrap_or_default());
        self.registry.register(Box::new(cmd));
    }

    /// Register a parser. Returns `false` if one already exists for its type.
    pub fn register_parser(&mut self, parser: Box<dyn ValueParser>) -> bool {
        self.registry.parsers_mut().register(parser)
    }

    /// Register a parser from a probe closure.
    pub fn register_parser_fn<F>(&mut self, value_type: ValueType, probe: F) -> bool
    where
        F: Fn(&str) -> Option<Value> + 'static,
    {
        self.registry.parsers_mut().register_fn(value_type, probe)
    }

    // -- Output --

    /// Show a line through the host.
    pub fn log(&self, message: &str, severity: Severity) {
        self.host.log(message, severity);
    }

    // -- Execution --

    /// Tokenize, resolve, and run one line.
    ///
    /// Handlers report failure by returning `Err`, which comes back wrapped
    /// as [`ConsoleError::Handler`]. A handler that panics is not caught.
    pub fn submit(&self, line: &str) -> Result<Submitted> {
        let Some(tokenized) = tokenize(line) else {
            return Ok(Submitted::NoOp);
        };
        match self.execute(&tokenized.name, &tokenized.args) {
            Ok(overload) => Ok(Submitted::Invoked {
                command: tokenized.name,
                overload,
            }),
            Err(e) => {
                log::debug!("submit {line:?} failed: {e}");
                self.log(&e.to_string(), Severity::Error);
                Err(e)
            },
        }
    }

    /// Resolve `name` against `tokens` and run the chosen overload.
    /// Returns the overload index. Does not log failures.
    pub fn execute<S: AsRef<str>>(&self, name: &str, tokens: &[S]) -> Result<usize> {
        let resolution = self.registry.resolve(name, tokens)?;
        let signature = resolution.signature;
        let call = Invocation::new(self, signature.name(), resolution.args);
        signature
            .command()
            .execute(&call)
            .map_err(|e| ConsoleError::Handler {
                command: name.to_string(),
                source: Box::new(e),
            })?;
        Ok(resolution.overload)
    }

    // -- Suggestions --

    /// Every command name starting with `prefix`.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.registry
            .suggest(prefix, self.config.include_exact_suggestion)
    }

    /// Up to `max` command names starting with `prefix`.
    pub fn suggest_bounded(&self, prefix: &str, max: usize) -> Vec<String> {
        let mut buf = SuggestionBuffer::new(max);
        self.suggest_into(prefix, &mut buf);
        buf.as_slice().to_vec()
    }

    /// Fill a caller-owned buffer with suggestions for `prefix`.
    pub fn suggest_into(&self, prefix: &str, out: &mut SuggestionBuffer) -> usize {
        self.registry
            .suggest_bounded(prefix, out, self.config.include_exact_suggestion)
    }

    /// A buffer sized for this console's configured suggestion count.
    pub fn suggestion_buffer(&self) -> SuggestionBuffer {
        SuggestionBuffer::new(self.config.max_suggestions)
    }

    /// Every registered command name, in lexical order.
    pub fn command_names(&self) -> Vec<String> {
        self.registry.names()
    }
}
