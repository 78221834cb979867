//! # Session Subcommands
//!
//! `status`, `clear`, and `hello` — session inspection and lifecycle
//! commands that do not touch the proof workflow itself.

use std::path::Path;

use anyhow::Result;

use crate::open_session;

/// Print the session snapshot as JSON.
pub fn run_status(session_path: &Path) -> Result<u8> {
    let session = open_session(session_path)?;
    let snapshot = serde_json::json!({
        "session_file": session.store().path(),
        "phase": session.phase(),
        "circuit": session.current_circuit(),
        "state": session.state(),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(0)
}

/// Wipe the session store and reset to the initial state.
pub fn run_clear(session_path: &Path) -> Result<u8> {
    let mut session = open_session(session_path)?;
    session.clear()?;
    println!("session cleared");
    Ok(0)
}

/// Probe the proving engine for liveness.
pub fn run_hello(session_path: &Path) -> Result<u8> {
    let session = open_session(session_path)?;
    println!("{}", session.probe_engine()?);
    Ok(0)
}
