use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use deskcalc::calculator::{DisplayStyle, Input, copy_to_clipboard};
use deskcalc::config::Config;
use deskcalc::readout::Readout;
use deskcalc::session::{Session, is_quit_command};

/// A four-function desk calculator driven from the keyboard.
///
/// Keys: 0-9 . + - * / (or x) = C CE. Each key prints the value the
/// calculator would display after it.
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Process this key sequence and exit, e.g. "12+3="
    #[arg(short, long, value_name = "KEYS")]
    keys: Option<String>,

    /// Display style (overrides the config file)
    #[arg(short, long, value_enum)]
    style: Option<DisplayStyle>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Copy the final readout to the clipboard
    #[arg(long)]
    copy: bool,

    /// Print readouts as JSON lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

struct Output {
    json: bool,
    echo_inputs: bool,
    copy_on_equals: bool,
}

impl Output {
    fn emit(&self, out: &mut impl Write, readout: &Readout) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(readout)?)?;
        } else {
            writeln!(out, "{}", readout.line(self.echo_inputs))?;
        }

        if self.copy_on_equals && readout.input == Some(Input::Equals) {
            copy_readout(readout);
        }
        Ok(())
    }
}

fn copy_readout(readout: &Readout) {
    match copy_to_clipboard(readout.clipboard_text()) {
        Ok(()) => info!(text = %readout.text, "copied to clipboard"),
        Err(e) => warn!("{e}"),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_keys(session: &mut Session, output: &Output, keys: &str) -> Result<()> {
    let readouts = session
        .feed(keys)
        .with_context(|| format!("Failed to process keys {keys:?}"))?;

    let mut stdout = io::stdout().lock();
    for readout in &readouts {
        output.emit(&mut stdout, readout)?;
    }
    Ok(())
}

fn run_repl(session: &mut Session, output: &Output) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    output.emit(&mut stdout, &session.current())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if is_quit_command(&line) {
            break;
        }

        let readouts = match session.feed(&line) {
            Ok(readouts) => readouts,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };

        for readout in &readouts {
            output.emit(&mut stdout, readout)?;
        }
        stdout.flush()?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let style = cli.style.unwrap_or(config.display.style);
    let output = Output {
        json: cli.json,
        echo_inputs: config.display.echo_inputs,
        copy_on_equals: config.clipboard.copy_on_equals,
    };

    let mut session = Session::new(style);
    match &cli.keys {
        Some(keys) => run_keys(&mut session, &output, keys)?,
        None => run_repl(&mut session, &output)?,
    }

    if cli.copy {
        copy_readout(&session.current());
    }

    Ok(())
}
