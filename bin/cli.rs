//! CLI - Command Line Interface
//!
//! With no flags the binary prints the demonstration run and waits for a key
//! before exiting.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use taskboard_core::BoardConfig;
use taskboard_runtime::TaskManager;
use tracing::{Level, debug, warn};

use crate::demo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Taskboard demo
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Board display format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Exit without waiting for a key press
    #[arg(long)]
    no_pause: bool,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = load_config(cli.config.as_deref());
    if cli.verbose {
        init_tracing(&config.log.level);
    }
    if let Some(e) = config_error {
        warn!("Falling back to default config: {e}");
    }

    let mut manager = TaskManager::with_config(config.display.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run_demo(&mut manager, &mut out, cli.output)?;

    if !cli.no_pause {
        writeln!(out, "Press any key to exit...")?;
        out.flush()?;
        drop(out);
        wait_for_key();
    }
    Ok(())
}

/// Defaults plus file plus environment; a bad file is reported, not fatal
fn load_config(path: Option<&Path>) -> (BoardConfig, Option<taskboard_core::ConfigError>) {
    let (mut config, error) = match path {
        Some(path) => match BoardConfig::load(path) {
            Ok(config) => (config, None),
            Err(e) => (BoardConfig::default(), Some(e)),
        },
        None => (BoardConfig::default(), None),
    };
    config.apply_env_overrides();
    (config, error)
}

fn init_tracing(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Block until a key press, or a line of input when stdin is not a terminal
fn wait_for_key() {
    if io::stdin().is_terminal() && enable_raw_mode().is_ok() {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break,
                Ok(_) => continue,
                Err(e) => {
                    debug!("Key read failed: {e}");
                    break;
                }
            }
        }
        let _ = disable_raw_mode();
    } else {
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}
