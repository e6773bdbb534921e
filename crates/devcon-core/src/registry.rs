//! Command registry and overload resolution.
//!
//! Overloads of a name are tried in registration order. The first one whose
//! arity admits the token count and whose parameters accept every supplied
//! token wins; later overloads are never consulted, even if they would also
//! match.

use std::collections::HashMap;

use devcon_types::error::{ConsoleError, Result};
use devcon_types::value::Value;

use crate::command::{Command, Param};
use crate::parsers::ParserRegistry;
use crate::trie::{SuggestionBuffer, Trie};

/// A registered overload: the command plus a snapshot of its parameters.
pub struct CommandSignature {
    params: Vec<Param>,
    required: usize,
    accepted: usize,
    command: Box<dyn Command>,
}

impl CommandSignature {
    fn new(command: Box<dyn Command>) -> Self {
        let params = command.params();
        let accepted = params.iter().filter(|p| !p.is_context()).count();
        let required = params
            .iter()
            .filter(|p| !p.is_context() && !p.is_optional())
            .count();
        Self {
            params,
            required,
            accepted,
            command,
        }
    }

    /// The command name this overload is registered under.
    pub fn name(&self) -> &str {
        self.command.name()
    }

    /// Declared parameters, in call order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The command's description, if it has one.
    pub fn description(&self) -> Option<&str> {
        Some(self.command.description()).filter(|d| !d.is_empty())
    }

    /// The command's argument prototype, if it has one.
    pub fn usage(&self) -> Option<&str> {
        Some(self.command.usage()).filter(|u| !u.is_empty())
    }

    /// Token counts this overload accepts, as `(min, max)`. Context
    /// parameters never consume a token.
    pub fn arity(&self) -> (usize, usize) {
        (self.required, self.accepted)
    }

    /// The command that runs when this overload is chosen.
    pub fn command(&self) -> &dyn Command {
        self.command.as_ref()
    }
}

/// The overload chosen for a call and its bound arguments.
pub struct Resolution<'a> {
    pub signature: &'a CommandSignature,
    /// Position of the overload among those registered under its name.
    pub overload: usize,
    /// One value per declared parameter.
    pub args: Vec<Value>,
}

/// Registry of commands by name, with overloads.
pub struct CommandRegistry {
    commands: HashMap<String, Vec<CommandSignature>>,
    names: Trie,
    parsers: ParserRegistry,
}

impl CommandRegistry {
    /// Create an empty registry with the built-in parsers.
    pub fn new() -> Self {
        Self::with_parsers(ParserRegistry::new())
    }

    /// Create an empty registry using the given parsers.
    pub fn with_parsers(parsers: ParserRegistry) -> Self {
        Self {
            commands: HashMap::new(),
            names: Trie::new(),
            parsers,
        }
    }

    /// Parsers used to convert tokens.
    pub fn parsers(&self) -> &ParserRegistry {
        &self.parsers
    }

    /// Parsers, for registering host-defined types.
    pub fn parsers_mut(&mut self) -> &mut ParserRegistry {
        &mut self.parsers
    }

    /// Register a command as a new overload of its name.
    ///
    /// Names that are empty or contain whitespace could never be typed and
    /// are skipped.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            log::warn!("skipping command with untypeable name {name:?}");
            return;
        }
        let signature = CommandSignature::new(cmd);
        log::debug!(
            "registered '{name}' overload with {} parameter(s)",
            signature.params.len()
        );
        self.names.insert(&name);
        self.commands.entry(name).or_default().push(signature);
    }

    /// Whether any overload is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// All overloads registered under `name`, in registration order.
    pub fn overloads(&self, name: &str) -> Option<&[CommandSignature]> {
        self.commands.get(name).map(Vec::as_slice)
    }

    /// Number of distinct command names.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every registered name, in lexical order.
    pub fn names(&self) -> Vec<String> {
        self.names.all_words()
    }

    /// Pick the overload of `name` that accepts `tokens` and bind its
    /// arguments.
    pub fn resolve<S: AsRef<str>>(&self, name: &str, tokens: &[S]) -> Result<Resolution<'_>> {
        let overloads = self
            .commands
            .get(name)
            .ok_or_else(|| ConsoleError::UnknownCommand(name.to_string()))?;

        for (overload, signature) in overloads.iter().enumerate() {
            if let Some(args) = self.bind(signature, tokens) {
                log::debug!("'{name}' resolved to overload {overload}");
                return Ok(Resolution {
                    signature,
                    overload,
                    args,
                });
            }
        }
        Err(ConsoleError::NoMatchingOverload(name.to_string()))
    }

    /// Convert `tokens` against one overload. `None` when it is not viable.
    ///
    /// Tokens fill non-context parameters left to right. Values produced by
    /// the probe are kept, so each token is parsed once.
    fn bind<S: AsRef<str>>(&self, signature: &CommandSignature, tokens: &[S]) -> Option<Vec<Value>> {
        let (min, max) = signature.arity();
        if tokens.len() < min || tokens.len() > max {
            return None;
        }
        let mut tokens = tokens.iter();
        let mut args = Vec::with_capacity(signature.params.len());
        for param in &signature.params {
            if param.is_context() {
                args.push(Value::Context);
                continue;
            }
            let value = match tokens.next() {
                Some(token) => self.parsers.try_convert(param.value_type, token.as_ref())?,
                // An optional parameter declared before a required one can
                // leave the required one without a token.
                None => param.default.clone()?,
            };
            args.push(value);
        }
        Some(args)
    }

    /// Every registered name starting with `prefix`.
    pub fn suggest(&self, prefix: &str, include_exact: bool) -> Vec<String> {
        self.names.suggest(prefix, include_exact)
    }

    /// Fill `out` with up to `out.capacity()` names starting with `prefix`.
    pub fn suggest_bounded(
        &self,
        prefix: &str,
        out: &mut SuggestionBuffer,
        include_exact: bool,
    ) -> usize {
        self.names.suggest_bounded(prefix, out, include_exact)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
