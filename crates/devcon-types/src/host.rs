//! Host logging capability.
//!
//! The engine never renders output itself. Every line it or a command wants
//! to show goes through [`ConsoleHost::log`]; colors and markup are the
//! host's business.

use std::fmt;

/// Severity of a console log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Message,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Message => "message",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// The capability a host exposes to the engine for console output.
///
/// Takes `&self`: hosts that buffer lines use interior mutability.
pub trait ConsoleHost {
    /// Show one console line.
    fn log(&self, message: &str, severity: Severity);
}

/// Host that forwards console output to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHost;

impl ConsoleHost for LogHost {
    fn log(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Message | Severity::Success => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
    }
}

impl<H: ConsoleHost + ?Sized> ConsoleHost for std::rc::Rc<H> {
    fn log(&self, message: &str, severity: Severity) {
        (**self).log(message, severity);
    }
}
