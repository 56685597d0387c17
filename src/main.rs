//! Codebreaker - CLI
//!
//! Console code-breaking game with an optional full-screen TUI.

use anyhow::Result;
use clap::Parser;
use codebreaker::{
    config::{ConfigWarning, resolve},
    game::{Outcome, ReaderLines, play},
    interactive::{App, run_tui},
    output::ConsoleReporter,
};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "codebreaker",
    about = "Break a hidden 4-digit code (distinct digits 0-8) from placement feedback",
    version,
    author
)]
struct Cli {
    /// Secret code to play against (4 distinct digits 0-8); random if missing or invalid
    #[arg(short = 'c', value_name = "CODE", allow_hyphen_values = true)]
    code: Option<String>,

    /// Maximum number of valid guesses (default 10)
    #[arg(short = 't', value_name = "TRIES", allow_hyphen_values = true)]
    tries: Option<String>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    tui: bool,
}

/// Reduce raw arguments to what `Cli` understands
///
/// Unknown tokens are dropped wherever they appear. Every `-c`/`-t` followed by
/// another token takes that token as its value without consuming it, and the
/// last occurrence wins. A trailing `-c`/`-t` with no value is dropped.
fn known_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| "codebreaker".to_string());
    let rest: Vec<String> = args.collect();

    let mut code = None;
    let mut tries = None;
    let mut flags = Vec::new();

    for (i, arg) in rest.iter().enumerate() {
        match arg.as_str() {
            "-c" => code = rest.get(i + 1).cloned().or(code),
            "-t" => tries = rest.get(i + 1).cloned().or(tries),
            "--tui" | "-h" | "--help" | "-V" | "--version" => flags.push(arg.clone()),
            _ => {}
        }
    }

    let mut known = vec![program];
    if let Some(code) = code {
        known.extend(["-c".to_string(), code]);
    }
    if let Some(tries) = tries {
        known.extend(["-t".to_string(), tries]);
    }
    known.extend(flags);
    known
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(known_args(std::env::args()));

    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for them.
    // The TUI owns the terminal, so it runs without a subscriber.
    if !cli.tui {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let resolved = resolve(cli.code.as_deref(), cli.tries.as_deref(), &mut rand::rng());
    for warning in &resolved.warnings {
        match warning {
            ConfigWarning::InvalidAttempts(_) => println!("{warning}"),
            // A rejected code is replaced silently on the console
            ConfigWarning::RandomCode => debug!("{warning}"),
        }
    }

    if cli.tui {
        return run_tui(App::new(&resolved.config));
    }

    let mut session = resolved.config.session();
    let mut input = ReaderLines::new(io::stdin().lock());
    let mut reporter = ConsoleReporter::stdout();

    let outcome: Outcome = play(&mut session, &mut input, &mut reporter)?;
    debug!(?outcome, "Session finished");

    Ok(())
}
