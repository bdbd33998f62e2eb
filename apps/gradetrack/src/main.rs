//! Gradetrack binary entry point.
//!
//! Parses arguments, installs the tracing subscriber on stderr (so
//! diagnostics never interleave with the interactive transcript on stdout),
//! and hands stdin/stdout to the menu loop.

use clap::Parser;
use gradetrack::cli;
use gradetrack_core::Roster;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Interactive student grade tracker.
#[derive(Debug, Parser)]
#[command(name = "gradetrack", version, about)]
struct Args {
    /// Enable debug-level diagnostics on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut roster = Roster::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match cli::run(&mut roster, &mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "terminal i/o failure");
            ExitCode::FAILURE
        }
    }
}
