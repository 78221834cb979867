//! # Circuit Subcommand
//!
//! Circuit catalog navigation. Every selection — including re-selecting
//! the current circuit — invalidates the stored setup and proof artifacts;
//! that lifecycle rule lives in the controller, not here.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use zkdesk_engine::MockEngine;

use crate::open_session;

/// Arguments for the `zkdesk circuit` subcommand.
#[derive(Args, Debug)]
pub struct CircuitArgs {
    #[command(subcommand)]
    pub command: CircuitCommand,
}

/// Circuit navigation commands.
#[derive(Subcommand, Debug)]
pub enum CircuitCommand {
    /// Show the currently selected circuit.
    Show,

    /// List every circuit in the catalog.
    List,

    /// Select a circuit by index (clears stored artifacts).
    Select {
        /// The circuit index to select.
        index: u32,
    },

    /// Cycle to the next circuit (clears stored artifacts).
    Next,

    /// Cycle to the previous circuit (clears stored artifacts).
    Prev,
}

/// Dispatch a circuit command.
pub fn run_circuit(args: &CircuitArgs, session_path: &Path) -> Result<u8> {
    let mut session = open_session(session_path)?;
    match &args.command {
        CircuitCommand::Show => {
            let descriptor = session.current_circuit();
            println!(
                "circuit {} ({}) of {}",
                descriptor.index,
                descriptor.display_asset,
                session.registry().count()
            );
        }
        CircuitCommand::List => {
            let names = MockEngine::circuit_names();
            for descriptor in session.registry().descriptors() {
                let marker = if descriptor.index == session.circuit_index() {
                    "*"
                } else {
                    " "
                };
                let name = names
                    .get(descriptor.index as usize)
                    .copied()
                    .unwrap_or("unknown");
                println!(
                    "{marker} {} {name} ({})",
                    descriptor.index, descriptor.display_asset
                );
            }
        }
        CircuitCommand::Select { index } => {
            session.select_circuit(*index)?;
            println!("selected circuit {index}; artifacts cleared");
        }
        CircuitCommand::Next => {
            let index = session.next_circuit()?;
            println!("selected circuit {index}; artifacts cleared");
        }
        CircuitCommand::Prev => {
            let index = session.previous_circuit()?;
            println!("selected circuit {index}; artifacts cleared");
        }
    }
    Ok(0)
}
