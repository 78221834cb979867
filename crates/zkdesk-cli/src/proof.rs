//! # Proof Subcommands
//!
//! `setup`, `prove`, and `verify` — the three engine-backed operations of
//! the proof workflow. Witness text comes either inline (`--witness`) or
//! from a file (`--witness-file`); it is passed to the controller raw,
//! which canonicalizes it before the engine ever sees it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use zkdesk_session::VerificationStatus;

use crate::open_session;

/// Arguments for `zkdesk setup`.
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Security parameter for the trusted setup.
    #[arg(long, default_value_t = 10)]
    pub k: u32,
}

/// Arguments for `zkdesk prove` and `zkdesk verify`.
#[derive(Args, Debug)]
pub struct WitnessArgs {
    /// Witness input as inline JSON text.
    #[arg(long, conflicts_with = "witness_file")]
    pub witness: Option<String>,

    /// Path to a file holding the witness JSON.
    #[arg(long)]
    pub witness_file: Option<PathBuf>,
}

impl WitnessArgs {
    /// Resolve the raw witness text from whichever source was given.
    pub fn read(&self) -> Result<String> {
        match (&self.witness, &self.witness_file) {
            (Some(text), None) => Ok(text.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("cannot read witness file {}", path.display())),
            _ => bail!("exactly one of --witness or --witness-file is required"),
        }
    }
}

/// Run parameter setup and persist the encoded artifact.
pub fn run_setup(args: &SetupArgs, session_path: &Path) -> Result<u8> {
    let mut session = open_session(session_path)?;
    session.run_setup(args.k)?;
    println!(
        "setup complete: k={}, circuit {}, phase {}",
        args.k,
        session.circuit_index(),
        session.phase()
    );
    Ok(0)
}

/// Generate and persist a proof for the supplied witness.
pub fn run_prove(args: &WitnessArgs, session_path: &Path) -> Result<u8> {
    let raw = args.read()?;
    let mut session = open_session(session_path)?;
    session.generate_proof(&raw)?;
    println!(
        "proof generated for circuit {} (verification: {})",
        session.circuit_index(),
        session.verification()
    );
    Ok(0)
}

/// Verify the stored proof against the supplied witness.
///
/// Exit code 0 when the proof is valid, 1 when it is invalid — including
/// the fail-closed case where verification itself failed.
pub fn run_verify(args: &WitnessArgs, session_path: &Path) -> Result<u8> {
    let raw = args.read()?;
    let mut session = open_session(session_path)?;
    let status = session.verify_proof(&raw)?;
    println!("verification result: {status}");
    Ok(match status {
        VerificationStatus::Valid => 0,
        _ => 1,
    })
}
