//! # Proving Engine Trait
//!
//! Defines the abstract interface to the external proving engine. All
//! implementations (mock, WASM-hosted halo2, future backends) must satisfy
//! this trait.
//!
//! ## Contract
//!
//! No method has side effects beyond its return value. The engine does not
//! cache or persist anything — artifact storage is the session layer's
//! responsibility. "Engine not yet loaded" and "engine rejected the input"
//! are distinct failures: the former is an environment problem, the latter
//! is a property of the supplied artifacts.
//!
//! Verification takes the witness and circuit index in addition to the
//! parameters and proof; the proof/witness/circuit binding is checked by
//! the engine at verify time, not by the caller.

use thiserror::Error;

/// Error from a proving engine call.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The underlying engine has not been loaded/instantiated yet.
    #[error("proving engine is not loaded")]
    NotReady,

    /// The engine rejected the call. The message is the engine's own,
    /// where available, and is treated as opaque.
    #[error("proving engine rejected the call: {0}")]
    Rejected(String),
}

/// Abstract interface to the external proving engine.
///
/// The session controller is generic over this trait so that tests can
/// substitute failing or misbehaving engines without touching the real one.
pub trait ProvingEngine {
    /// Liveness/sanity probe. Returns a human-readable greeting.
    fn hello_world(&self) -> Result<String, EngineError>;

    /// Produce setup parameters for security parameter `k`.
    fn setup(&self, k: u32) -> Result<Vec<u8>, EngineError>;

    /// Generate a proof that `witness` (canonical text) satisfies the
    /// circuit at `circuit_index`, under the given setup parameters.
    fn generate_proof(
        &self,
        params: &[u8],
        witness: &str,
        circuit_index: u32,
    ) -> Result<Vec<u8>, EngineError>;

    /// Verify a proof against the same parameters, witness text, and
    /// circuit index used to create it. A mismatch on any of the three is
    /// the engine's to reject.
    fn verify_proof(
        &self,
        params: &[u8],
        proof: &[u8],
        witness: &str,
        circuit_index: u32,
    ) -> Result<bool, EngineError>;

    /// Number of circuit variants this engine can prove statements about.
    fn circuit_count(&self) -> Result<u32, EngineError>;
}
