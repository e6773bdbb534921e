//! Host-side commands: clear, history, quit, plus demo commands.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use devcon_core::{
    Command, Console, ConsoleError, CustomValue, History, Invocation, Param, Result, Severity,
    Value, ValueType,
};

use crate::transcript::Transcript;

const COLOR: ValueType = ValueType::Custom("color");

/// Register host-UI commands and the demo command set.
pub fn register_app_commands(
    console: &mut Console,
    transcript: &Rc<Transcript>,
    history: &Rc<RefCell<History>>,
    running: &Rc<Cell<bool>>,
) {
    console.register(Box::new(ClearCmd {
        transcript: Rc::clone(transcript),
    }));
    console.register(Box::new(HistoryCmd {
        history: Rc::clone(history),
    }));
    console.register(Box::new(QuitCmd {
        running: Rc::clone(running),
    }));
    register_demo_commands(console);
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd {
    transcript: Rc<Transcript>,
}
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clears the contents of the command console."
    }
    fn params(&self) -> Vec<Param> {
        Vec::new()
    }
    fn execute(&self, _call: &Invocation<'_>) -> Result<()> {
        self.transcript.clear();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd {
    history: Rc<RefCell<History>>,
}
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Shows previously submitted lines, newest first."
    }
    fn params(&self) -> Vec<Param> {
        vec![Param::context("console")]
    }
    fn execute(&self, call: &Invocation<'_>) -> Result<()> {
        let history = self.history.borrow();
        if history.is_empty() {
            call.log("(no history)", Severity::Message);
            return Ok(());
        }
        let out: Vec<String> = history
            .iter()
            .enumerate()
            .map(|(i, line)| format!("  {:4}  {line}", i + 1))
            .collect();
        call.log(&out.join("\n"), Severity::Message);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// quit
// ---------------------------------------------------------------------------

struct QuitCmd {
    running: Rc<Cell<bool>>,
}
impl Command for QuitCmd {
    fn name(&self) -> &str {
        "quit"
    }
    fn description(&self) -> &str {
        "Closes the console."
    }
    fn params(&self) -> Vec<Param> {
        Vec::new()
    }
    fn execute(&self, _call: &Invocation<'_>) -> Result<()> {
        self.running.set(false);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Demo commands
// ---------------------------------------------------------------------------

fn parse_color(token: &str) -> Option<Value> {
    let rgb: u32 = match token.to_ascii_lowercase().as_str() {
        "red" => 0xff0000,
        "green" => 0x00ff00,
        "blue" => 0x0000ff,
        "white" => 0xffffff,
        "black" => 0x000000,
        hex => u32::from_str_radix(hex.strip_prefix('#')?, 16).ok()?,
    };
    Some(Value::Custom(CustomValue::new("color", rgb)))
}

fn register_demo_commands(console: &mut Console) {
    console.register_parser_fn(COLOR, parse_color);

    console.register_command(
        "add",
        vec![
            Param::required("a", ValueType::Int),
            Param::optional("b", ValueType::Int, 0i64),
        ],
        |call| {
            let sum = call
                .int(0)?
                .checked_add(call.int(1)?)
                .ok_or_else(|| ConsoleError::Command("integer overflow".to_string()))?;
            call.log(&sum.to_string(), Severity::Success);
            Ok(())
        },
        Some("Adds two integers."),
        Some("[a] [b = 0]"),
    );

    console.register_command(
        "echo",
        vec![Param::required("text", ValueType::Str)],
        |call| {
            call.log(call.str(0)?, Severity::Message);
            Ok(())
        },
        Some("Prints its argument."),
        Some("[text]"),
    );

    console.register_command(
        "teleport",
        vec![Param::required("position", ValueType::Vec3)],
        |call| {
            let [x, y, z] = call.vec3(0)?;
            call.log(&format!("teleported to ({x}, {y}, {z})"), Severity::Success);
            Ok(())
        },
        Some("Moves the player."),
        Some("[(x, y, z)]"),
    );

    console.register_command(
        "teleport",
        vec![
            Param::required("who", ValueType::Str),
            Param::required("position", ValueType::Vec3),
        ],
        |call| {
            let who = call.str(0)?;
            let [x, y, z] = call.vec3(1)?;
            call.log(
                &format!("teleported {who} to ({x}, {y}, {z})"),
                Severity::Success,
            );
            Ok(())
        },
        Some("Moves a named entity."),
        Some("[name] [(x, y, z)]"),
    );

    console.register_command(
        "tint",
        vec![Param::required("color", COLOR)],
        |call| {
            let rgb = call.custom::<u32>(0)?;
            call.log(&format!("tint set to #{rgb:06x}"), Severity::Success);
            Ok(())
        },
        Some("Sets the tint color."),
        Some("[red|green|blue|white|black|#rrggbb]"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Console, Rc<Transcript>, Rc<Cell<bool>>) {
        let transcript = Rc::new(Transcript::new(false));
        let history = Rc::new(RefCell::new(History::new(10)));
        let running = Rc::new(Cell::new(true));
        let mut console = Console::new(Rc::clone(&transcript));
        register_app_commands(&mut console, &transcript, &history, &running);
        (console, transcript, running)
    }

    #[test]
    fn parse_color_names_and_hex() {
        for (token, rgb) in [("red", 0xff0000u32), ("BLUE", 0x0000ff), ("#102030", 0x102030)] {
            match parse_color(token) {
                Some(Value::Custom(c)) => assert_eq!(c.downcast_ref::<u32>(), Some(&rgb)),
                other => panic!("{token}: {other:?}"),
            }
        }
        assert!(parse_color("mauve").is_none());
        assert!(parse_color("#zz").is_none());
    }

    #[test]
    fn teleport_overloads() {
        let (c, _, _) = setup();
        assert!(c.submit("teleport (1, 2, 3)").is_ok());
        assert!(c.submit("teleport bob (1, 2, 3)").is_ok());
        assert!(c.submit("teleport bob").is_err());
    }

    #[test]
    fn add_with_default() {
        let (c, _, _) = setup();
        assert!(c.submit("add 4").is_ok());
        assert!(c.submit("add 4 5").is_ok());
        assert!(c.submit("add four").is_err());
    }

    #[test]
    fn add_overflow_is_handler_error() {
        let (c, _, _) = setup();
        let err = c.submit(&format!("add {} 1", i64::MAX)).unwrap_err();
        assert!(matches!(err, ConsoleError::Handler { .. }));
    }

    #[test]
    fn clear_empties_transcript() {
        let (c, transcript, _) = setup();
        c.submit("echo hi").unwrap();
        assert!(!transcript.is_empty());
        c.submit("clear").unwrap();
        assert!(transcript.is_empty());
    }

    #[test]
    fn quit_stops_loop() {
        let (c, _, running) = setup();
        c.submit("quit").unwrap();
        assert!(!running.get());
    }

    #[test]
    fn tint_uses_custom_parser() {
        let (c, _, _) = setup();
        assert!(c.submit("tint green").is_ok());
        assert!(c.submit("tint mauve").is_err());
    }
}
