//! Built-in commands: help, list, logSuccess, logWarning, logError.

use devcon_types::error::Result;
use devcon_types::host::Severity;
use devcon_types::value::ValueType;

use crate::command::{Command, Invocation, Param};
use crate::console::Console;

/// Register the built-in commands into a console.
pub fn register_builtins(console: &mut Console) {
    console.register(Box::new(HelpTopicCmd));
    console.register(Box::new(HelpCmd));
    console.register(Box::new(ListCmd));
    console.register(Box::new(LogCmd::new(
        "logSuccess",
        "Logs a success message to the console.",
        Severity::Success,
    )));
    console.register(Box::new(LogCmd::new(
        "logWarning",
        "Logs a warning message to the console.",
        Severity::Warning,
    )));
    console.register(Box::new(LogCmd::new(
        "logError",
        "Logs an error message to the console.",
        Severity::Error,
    )));
}

/// Help text for every overload of `command`, or `None` if no such command
/// is registered.
pub fn help_text(console: &Console, command: &str) -> Option<String> {
    let overloads = console.registry().overloads(command)?;
    let pages: Vec<String> = overloads
        .iter()
        .filter_map(|sig| match (sig.description(), sig.usage()) {
            (Some(desc), Some(usage)) => Some(format!("{desc}\n\t{command} {usage}")),
            (None, Some(usage)) => Some(format!("\t{command} {usage}")),
            (Some(desc), None) => Some(desc.to_string()),
            (None, None) => None,
        })
        .collect();
    if pages.is_empty() {
        return Some(format!("There is no help page created for '{command}'."));
    }
    Some(pages.join("\n"))
}

fn log_help(console: &Console, command: &str) {
    match help_text(console, command) {
        Some(text) => console.log(&text, Severity::Message),
        None => console.log(
            &format!(
                "No command found with name '{command}', to see a list of all commands use 'list'."
            ),
            Severity::Error,
        ),
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpTopicCmd;
impl Command for HelpTopicCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Provides help information for commands."
    }
    fn usage(&self) -> &str {
        "[command name]"
    }
    fn params(&self) -> Vec<Param> {
        vec![
            Param::required("command", ValueType::Str),
            Param::context("console"),
        ]
    }
    fn execute(&self, call: &Invocation<'_>) -> Result<()> {
        log_help(call.console(), call.str(0)?);
        Ok(())
    }
}

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Provides help information for the 'help' command."
    }
    fn params(&self) -> Vec<Param> {
        vec![Param::context("console")]
    }
    fn execute(&self, call: &Invocation<'_>) -> Result<()> {
        log_help(call.console(), "help");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

struct ListCmd;
impl Command for ListCmd {
    fn name(&self) -> &str {
        "list"
    }
    fn description(&self) -> &str {
        "Lists all commands."
    }
    fn params(&self) -> Vec<Param> {
        vec![Param::context("console")]
    }
    fn execute(&self, call: &Invocation<'_>) -> Result<()> {
        let names = call.console().command_names();
        call.log(&names.join("\n"), Severity::Message);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// logSuccess / logWarning / logError
// ---------------------------------------------------------------------------

struct LogCmd {
    name: &'static str,
    description: &'static str,
    severity: Severity,
}

impl LogCmd {
    fn new(name: &'static str, description: &'static str, severity: Severity) -> Self {
        Self {
            name,
            description,
            severity,
        }
    }
}

impl Command for LogCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        "[string]"
    }
    fn params(&self) -> Vec<Param> {
        vec![
            Param::required("message", ValueType::Str),
            Param::context("console"),
        ]
    }
    fn execute(&self, call: &Invocation<'_>) -> Result<()> {
        call.log(call.str(0)?, self.severity);
        Ok(())
    }
}
