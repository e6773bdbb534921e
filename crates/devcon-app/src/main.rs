//! DEVCON interactive console.
//!
//! Reads lines from stdin and submits them to the command engine.
//! A line starting with `?` prints autocomplete suggestions for the rest of
//! the line instead of running it. `quit` or end of input exits.

mod commands;
mod transcript;

use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};

use devcon_core::{Console, ConsoleConfig, History, register_builtins};
use transcript::Transcript;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting DEVCON (history {}, suggestions {})",
        config.history_size,
        config.max_suggestions,
    );

    let transcript = Rc::new(Transcript::new(io::stdout().is_terminal()));
    let history = Rc::new(RefCell::new(History::new(config.history_size)));
    let running = Rc::new(Cell::new(true));

    // Set up command interpreter.
    let mut console = Console::with_config(Rc::clone(&transcript), config);
    register_builtins(&mut console);
    commands::register_app_commands(&mut console, &transcript, &history, &running);
    log::info!("Registered {} commands", console.registry().len());

    run(&console, &transcript, &history, &running)?;
    log::info!("DEVCON shut down");
    Ok(())
}

/// Resolve config from CLI arg, DEVCON_CONFIG env var, or defaults.
fn load_config() -> Result<ConsoleConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DEVCON_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) if !path.exists() => {
            log::warn!("Config {} not found, using defaults", path.display());
            Ok(ConsoleConfig::default())
        },
        Some(path) => {
            let config = ConsoleConfig::load(&path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            log::info!("Loaded config: {}", path.display());
            Ok(config)
        },
        None => Ok(ConsoleConfig::default()),
    }
}

fn run(
    console: &Console,
    transcript: &Transcript,
    history: &RefCell<History>,
    running: &Cell<bool>,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut suggestions = console.suggestion_buffer();
    let mut line = String::new();

    while running.get() {
        print!("{}", console.config().prompt);
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let cleaned = console.config().strip_prohibited(&line);
        let cleaned = cleaned.trim();

        if let Some(prefix) = cleaned.strip_prefix('?') {
            console.suggest_into(prefix.trim(), &mut suggestions);
            suggestions.sort_by_length();
            for name in suggestions.iter() {
                println!("  {name}");
            }
            continue;
        }

        if cleaned.is_empty() {
            continue;
        }
        transcript.echo(cleaned);
        history.borrow_mut().push(cleaned);
        // Failures are already shown by the console.
        if let Err(e) = console.submit(cleaned) {
            log::debug!("{e}");
        }
    }
    Ok(())
}
