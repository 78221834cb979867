//! # zkdesk-cli — Handler Modules
//!
//! Subcommand handlers for the `zkdesk` binary. Each module owns the clap
//! argument types and a `run_*` function returning `anyhow::Result<u8>`
//! (the process exit code), keeping `main.rs` a thin dispatcher.
//!
//! Every handler opens the file-backed session store, restores the
//! controller, performs one operation, and exits — matching the
//! one-operation-at-a-time model of the session layer.

use std::path::Path;

use anyhow::Context;

use zkdesk_engine::MockEngine;
use zkdesk_session::{FileStore, ProofSession};

pub mod circuit;
pub mod proof;
pub mod session;

/// The controller type every handler operates on.
pub type CliSession = ProofSession<FileStore, MockEngine>;

/// Open the session file and restore the controller.
pub fn open_session(path: &Path) -> anyhow::Result<CliSession> {
    let store = FileStore::open(path)
        .with_context(|| format!("cannot open session file {}", path.display()))?;
    let session = ProofSession::restore(store, MockEngine::new())?;
    Ok(session)
}
