//! # Calculator CLI
//!
//! Terminal front end for the `calc_core` engine. Every character typed is a
//! calculator key (see `calc_core::input` for the bindings) and the engine's
//! display text is printed back.
//!
//! ```text
//! calc_cli "3+4*2="          # one shot, prints 14
//! calc_cli --trace "12.5c"   # print the display after every key
//! calc_cli                   # interactive, one line of keys at a time
//! ```

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calc_core::{Engine, EngineSettings, InputEvent};
use clap::Parser;
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "calc_cli",
    version,
    about = "Four-function calculator",
    long_about = "Four-function calculator driven by key presses.\n\n\
                  Keys: 0-9 . + - * / = (or Enter), c or Backspace to clear.\n\
                  Operators chain left to right without precedence."
)]
struct Cli {
    /// Keys to press, e.g. "3+4*2=". Starts an interactive session when omitted
    #[arg(allow_hyphen_values = true)]
    keys: Option<String>,

    /// Print the display after every key
    #[arg(short, long)]
    trace: bool,

    /// Print the engine state as JSON instead of the display text
    #[arg(long)]
    json: bool,

    /// Engine settings file (JSON)
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => EngineSettings::default(),
    };
    let mut engine = Engine::with_settings(settings)?;

    match &cli.keys {
        Some(keys) => run_once(&mut engine, keys, &cli),
        None => run_interactive(&mut engine, &cli),
    }
}

fn load_settings(path: &Path) -> Result<EngineSettings> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings = EngineSettings::from_json(&json)
        .with_context(|| format!("loading settings from {}", path.display()))?;
    info!("loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}

/// Press all keys, failing on the first unknown one.
fn run_once(engine: &mut Engine, keys: &str, cli: &Cli) -> Result<()> {
    let events = InputEvent::parse_keys(keys)?;
    press_all(engine, &events, cli);
    print_display(engine, cli)
}

fn run_interactive(engine: &mut Engine, cli: &Cli) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!("Calculator - type keys and press Enter, q to quit");
        println!("=================================================");
        println!("{}", engine.display());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line == "q" || line == "quit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match InputEvent::parse_keys(line) {
            Ok(events) => press_all(engine, &events, cli),
            Err(err) => {
                // Keys before the bad one still count
                eprintln!("{}", err);
                let valid: Vec<InputEvent> = line
                    .chars()
                    .filter(|c| *c != ' ' && *c != '\t')
                    .map_while(|c| InputEvent::from_key(c).ok())
                    .collect();
                press_all(engine, &valid, cli);
            }
        }

        print_display(engine, cli)?;
    }

    debug!("session ended with state {:?}", engine.state());
    Ok(())
}

fn press_all(engine: &mut Engine, events: &[InputEvent], cli: &Cli) {
    for event in events {
        let display = engine.press(*event);
        if cli.trace && !cli.json {
            println!("{} -> {}", event, display);
        }
    }
}

/// Final output: state JSON, or the display unless it was already traced.
fn print_display(engine: &Engine, cli: &Cli) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(engine.state())?);
    } else if !cli.trace {
        println!("{}", engine.display());
    }
    Ok(())
}
