//! Terminal host: prints console lines and keeps them for `clear`.

use std::cell::RefCell;
use std::io::{self, Write};

use devcon_core::{ConsoleHost, Severity};

const RESET: &str = "\x1b[0m";

fn color(severity: Severity) -> &'static str {
    match severity {
        Severity::Message => "",
        Severity::Success => "\x1b[32m",
        Severity::Warning => "\x1b[33m",
        Severity::Error => "\x1b[31m",
    }
}

/// Displayed console lines.
pub struct Transcript {
    lines: RefCell<Vec<(String, Severity)>>,
    use_color: bool,
}

impl Transcript {
    /// Create an empty transcript. Colors and screen clearing are only
    /// emitted when `use_color` is set.
    pub fn new(use_color: bool) -> Self {
        Self {
            lines: RefCell::new(Vec::new()),
            use_color,
        }
    }

    /// Record a submitted input line, shown with a leading arrow.
    pub fn echo(&self, line: &str) {
        self.lines
            .borrow_mut()
            .push((format!("> {line}"), Severity::Message));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Drop every displayed line and blank the terminal.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
        if self.use_color {
            print!("\x1b[2J\x1b[H");
            let _ = io::stdout().flush();
        }
    }
}

impl ConsoleHost for Transcript {
    fn log(&self, message: &str, severity: Severity) {
        if self.use_color && severity != Severity::Message {
            println!("{}{message}{RESET}", color(severity));
        } else {
            println!("{message}");
        }
        self.lines
            .borrow_mut()
            .push((message.to_string(), severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_and_clear() {
        let t = Transcript::new(false);
        t.echo("help");
        t.log("text", Severity::Warning);
        assert_eq!(t.len(), 2);
        t.clear();
        assert!(t.is_empty());
    }
}
