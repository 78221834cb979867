//! # zkdesk CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! The session lives in a JSON file (default `.zkdesk/session.json`), so
//! artifacts persist across invocations the way the original system's
//! artifacts survived page reloads.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zkdesk_cli::circuit::{run_circuit, CircuitArgs};
use zkdesk_cli::proof::{run_prove, run_setup, run_verify, SetupArgs, WitnessArgs};
use zkdesk_cli::session::{run_clear, run_hello, run_status};

/// zkdesk — a local zero-knowledge proof session workbench.
///
/// Selects among circuit variants, runs parameter setup, generates proofs
/// for user-supplied witness data, and verifies them, persisting every
/// artifact in a session file keyed to the selected circuit.
#[derive(Parser, Debug)]
#[command(name = "zkdesk", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the session file.
    #[arg(long, global = true, default_value = ".zkdesk/session.json")]
    session: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Probe the proving engine for liveness.
    Hello,

    /// Show the session state as JSON.
    Status,

    /// Run parameter setup for the selected circuit.
    Setup(SetupArgs),

    /// Generate a proof for the supplied witness.
    Prove(WitnessArgs),

    /// Verify the stored proof against the supplied witness.
    Verify(WitnessArgs),

    /// Circuit catalog navigation and selection.
    Circuit(CircuitArgs),

    /// Wipe the session store and start over.
    Clear,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Hello => run_hello(&cli.session),
        Commands::Status => run_status(&cli.session),
        Commands::Setup(args) => run_setup(&args, &cli.session),
        Commands::Prove(args) => run_prove(&args, &cli.session),
        Commands::Verify(args) => run_verify(&args, &cli.session),
        Commands::Circuit(args) => run_circuit(&args, &cli.session),
        Commands::Clear => run_clear(&cli.session),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
