//! Command trait, parameter declarations, and bound invocations.
//!
//! Every registered [`Command`] value is one overload of its name. The
//! registry picks an overload from the submitted tokens, converts them to
//! typed [`Value`]s, and hands the command an [`Invocation`].

use std::any::Any;

use devcon_types::error::{ConsoleError, Result};
use devcon_types::host::Severity;
use devcon_types::value::{Value, ValueType};

use crate::console::Console;

/// A declared command parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value_type: ValueType,
    /// Present when the parameter may be omitted.
    pub default: Option<Value>,
}

impl Param {
    /// A parameter that must be supplied.
    pub fn required(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            default: None,
        }
    }

    /// A parameter that takes `default` when omitted.
    pub fn optional(name: impl Into<String>, value_type: ValueType, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value_type,
            default: Some(default.into()),
        }
    }

    /// A parameter bound to the live console instead of an input token.
    pub fn context(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: ValueType::Context,
            default: None,
        }
    }

    /// Whether the parameter has a default.
    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }

    /// Whether the parameter is bound to the console.
    pub fn is_context(&self) -> bool {
        self.value_type == ValueType::Context
    }
}

/// A single executable command overload.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`. Empty when there is none.
    fn description(&self) -> &str {
        ""
    }

    /// Argument prototype for `help`, e.g. `[command name]`. Empty when
    /// there is none.
    fn usage(&self) -> &str {
        ""
    }

    /// Declared parameters, in call order.
    fn params(&self) -> Vec<Param>;

    /// Run the command with its bound arguments.
    fn execute(&self, call: &Invocation<'_>) -> Result<()>;
}

type Handler = Box<dyn Fn(&Invocation<'_>) -> Result<()>>;

/// A command built from a closure.
pub struct FnCommand {
    name: String,
    description: String,
    usage: String,
    params: Vec<Param>,
    handler: Handler,
}

impl FnCommand {
    /// Create a command with no description or usage.
    pub fn new<F>(name: impl Into<String>, params: Vec<Param>, handler: F) -> Self
    where
        F: Fn(&Invocation<'_>) -> Result<()> + 'static,
    {
        Self {
            name: name.into(),
            description: String::new(),
            usage: String::new(),
            params,
            handler: Box::new(handler),
        }
    }

    /// Set the `help` description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the `help` usage prototype.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

impl Command for FnCommand {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn usage(&self) -> &str {
        &self.usage
    }
    fn params(&self) -> Vec<Param> {
        self.params.clone()
    }
    fn execute(&self, call: &Invocation<'_>) -> Result<()> {
        (self.handler)(call)
    }
}

/// A resolved call: the console, the command name, and one bound value per
/// declared parameter.
///
/// Context parameters hold [`Value::Context`]; the console they stand for
/// is reached through [`Invocation::console`].
pub struct Invocation<'a> {
    console: &'a Console,
    command: &'a str,
    args: Vec<Value>,
}

impl<'a> Invocation<'a> {
    pub(crate) fn new(console: &'a Console, command: &'a str, args: Vec<Value>) -> Self {
        Self {
            console,
            command,
            args,
        }
    }

    /// The console that dispatched this call.
    pub fn console(&self) -> &'a Console {
        self.console
    }

    /// The name the command was invoked under.
    pub fn command(&self) -> &str {
        self.command
    }

    /// Every bound value, one per declared parameter.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Log a line through the console host.
    pub fn log(&self, message: &str, severity: Severity) {
        self.console.log(message, severity);
    }

    /// The bound value at `index`.
    pub fn value(&self, index: usize) -> Result<&Value> {
        self.args.get(index).ok_or_else(|| {
            ConsoleError::Argument(format!(
                "'{}' has no argument {index} ({} bound)",
                self.command,
                self.args.len()
            ))
        })
    }

    fn mismatch(&self, index: usize, expected: ValueType, actual: &Value) -> ConsoleError {
        ConsoleError::Argument(format!(
            "argument {index} of '{}' is {}, not {expected}",
            self.command,
            actual.value_type()
        ))
    }

    /// The bool argument at `index`.
    pub fn bool(&self, index: usize) -> Result<bool> {
        match self.value(index)? {
            Value::Bool(b) => Ok(*b),
            other => Err(self.mismatch(index, ValueType::Bool, other)),
        }
    }

    /// The int argument at `index`.
    pub fn int(&self, index: usize) -> Result<i64> {
        match self.value(index)? {
            Value::Int(i) => Ok(*i),
            other => Err(self.mismatch(index, ValueType::Int, other)),
        }
    }

    /// The float argument at `index`.
    pub fn float(&self, index: usize) -> Result<f64> {
        match self.value(index)? {
            Value::Float(x) => Ok(*x),
            other => Err(self.mismatch(index, ValueType::Float, other)),
        }
    }

    /// The string argument at `index`.
    pub fn str(&self, index: usize) -> Result<&str> {
        match self.value(index)? {
            Value::Str(s) => Ok(s),
            other => Err(self.mismatch(index, ValueType::Str, other)),
        }
    }

    /// The 2-component vector argument at `index`.
    pub fn vec2(&self, index: usize) -> Result<[f64; 2]> {
        match self.value(index)? {
            Value::Vec2(v) => Ok(*v),
            other => Err(self.mismatch(index, ValueType::Vec2, other)),
        }
    }

    /// The 3-component vector argument at `index`.
    pub fn vec3(&self, index: usize) -> Result<[f64; 3]> {
        match self.value(index)? {
            Value::Vec3(v) => Ok(*v),
            other => Err(self.mismatch(index, ValueType::Vec3, other)),
        }
    }

    /// Borrow the payload of a custom-typed argument.
    pub fn custom<T: Any>(&self, index: usize) -> Result<&T> {
        match self.value(index)? {
            Value::Custom(c) => c.downcast_ref::<T>().ok_or_else(|| {
                ConsoleError::Argument(format!(
                    "argument {index} of '{}' ({}) has an unexpected payload",
                    self.command,
                    c.type_name()
                ))
            }),
            other => Err(ConsoleError::Argument(format!(
                "argument {index} of '{}' is {}, not a custom value",
                self.command,
                other.value_type()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use devcon_types::host::LogHost;
    use devcon_types::value::CustomValue;

    use super::*;

    #[test]
    fn param_constructors() {
        let r = Param::required("a", ValueType::Int);
        assert!(!r.is_optional());
        assert!(!r.is_context());

        let o = Param::optional("b", ValueType::Int, 5i64);
        assert!(o.is_optional());
        assert_eq!(o.default, Some(Value::Int(5)));

        let c = Param::context("console");
        assert!(c.is_context());
        assert!(!c.is_optional());
    }

    #[test]
    fn fn_command_metadata() {
        let cmd = FnCommand::new("noop", vec![], |_| Ok(()))
            .with_description("Does nothing.")
            .with_usage("");
        assert_eq!(cmd.name(), "noop");
        assert_eq!(cmd.description(), "Does nothing.");
        assert_eq!(cmd.usage(), "");
        assert!(cmd.params().is_empty());
    }

    #[test]
    fn typed_accessors() {
        let console = Console::new(LogHost);
        let call = Invocation::new(
            &console,
            "demo",
            vec![
                Value::Int(3),
                Value::Float(0.5),
                Value::Str("x".into()),
                Value::Bool(true),
                Value::Vec2([1.0, 2.0]),
                Value::Vec3([1.0, 2.0, 3.0]),
                Value::Context,
            ],
        );
        assert_eq!(call.command(), "demo");
        assert_eq!(call.int(0).unwrap(), 3);
        assert_eq!(call.float(1).unwrap(), 0.5);
        assert_eq!(call.str(2).unwrap(), "x");
        assert!(call.bool(3).unwrap());
        assert_eq!(call.vec2(4).unwrap(), [1.0, 2.0]);
        assert_eq!(call.vec3(5).unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(call.value(6).unwrap(), &Value::Context);
    }

    #[test]
    fn accessor_type_mismatch() {
        let console = Console::new(LogHost);
        let call = Invocation::new(&console, "demo", vec![Value::Str("x".into())]);
        let err = call.int(0).unwrap_err();
        assert!(matches!(err, ConsoleError::Argument(_)));
        assert_eq!(
            err.to_string(),
            "argument error: argument 0 of 'demo' is string, not int"
        );
    }

    #[test]
    fn accessor_out_of_range() {
        let console = Console::new(LogHost);
        let call = Invocation::new(&console, "demo", vec![]);
        assert!(matches!(call.value(0), Err(ConsoleError::Argument(_))));
    }

    #[test]
    fn custom_accessor() {
        let console = Console::new(LogHost);
        let call = Invocation::new(
            &console,
            "paint",
            vec![Value::Custom(CustomValue::new("color", 7u32)), Value::Int(1)],
        );
        assert_eq!(*call.custom::<u32>(0).unwrap(), 7);
        assert!(call.custom::<String>(0).is_err());
        assert!(call.custom::<u32>(1).is_err());
    }
}
