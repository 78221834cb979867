//! # Proof Session Controller
//!
//! The state machine coordinating parameter setup, proof generation, and
//! verification against the selected circuit.
//!
//! ## Phases
//!
//! ```text
//! Idle ──run_setup()──▶ Ready ──generate_proof()──▶ ProofGenerated
//!                                                        │
//!                                              verify_proof() sets the
//!                                              verification sub-state
//!                                              (Unknown / Valid / Invalid)
//! ```
//!
//! `select_circuit` and `clear` return to `Idle` from anywhere; `run_setup`
//! is valid from any phase and re-enters `Ready`, discarding a stale proof.
//!
//! ## Invariants
//!
//! - A failed operation leaves both the session state and the store exactly
//!   as they were. Engine calls happen before the writes they feed, so no
//!   partial artifact is ever persisted.
//! - Witness text is canonicalized independently for generation and
//!   verification; a cached canonical form is never trusted.
//! - An engine failure during verification is downgraded to an `Invalid`
//!   result (fail-closed). An unverifiable proof presents as invalid, not
//!   as a crash.

use serde::Serialize;
use thiserror::Error;

use zkdesk_core::{codec, CanonicalWitness, CodecError, WitnessError};
use zkdesk_engine::{EngineError, ProvingEngine};

use crate::registry::{CircuitDescriptor, CircuitRegistry, RegistryError};
use crate::store::{ArtifactStore, StoreError};

/// Store key for the encoded setup parameters.
pub const KEY_SETUP_PARAMS: &str = "setup_params";
/// Store key for the encoded proof bytes.
pub const KEY_PROOF: &str = "proof";
/// Store key for the selected circuit index.
pub const KEY_CIRCUIT_INDEX: &str = "circuit_index";

/// Error from a session operation.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The engine was not ready or rejected a setup call.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The engine rejected the proof generation call. The prior proof
    /// artifact and session state are untouched.
    #[error("proof generation failed: {source}")]
    ProofGeneration {
        /// The engine's own failure.
        #[source]
        source: EngineError,
    },

    /// A required artifact was missing or the store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A stored artifact could not be decoded back into bytes.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The witness text could not be canonicalized.
    #[error(transparent)]
    Witness(#[from] WitnessError),

    /// The circuit index was invalid.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The operation is not valid in the current phase.
    #[error("operation `{operation}` not permitted in phase {phase}")]
    PreconditionNotMet {
        /// The operation that was attempted.
        operation: &'static str,
        /// The phase the session was in.
        phase: SessionPhase,
    },
}

/// Verification result for the current proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// No verification has been run against the current proof.
    #[default]
    Unknown,
    /// The engine accepted the proof.
    Valid,
    /// The engine rejected the proof, or verification itself failed.
    Invalid,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unknown => "UNKNOWN",
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
        };
        f.write_str(s)
    }
}

/// The coarse phase of the session, derived from artifact presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No setup parameters exist.
    Idle,
    /// Setup parameters exist; no proof yet.
    Ready,
    /// A proof exists; verification status is a sub-state, not a dead end.
    ProofGenerated,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "IDLE",
            Self::Ready => "READY",
            Self::ProofGenerated => "PROOF_GENERATED",
        };
        f.write_str(s)
    }
}

/// Session state snapshot, owned exclusively by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SessionState {
    /// The selected circuit index.
    pub circuit_index: u32,
    /// Whether setup parameters are stored.
    pub setup_present: bool,
    /// Whether a proof is stored.
    pub proof_present: bool,
    /// Verification result for the stored proof.
    pub verification: VerificationStatus,
}

impl SessionState {
    /// The phase implied by artifact presence.
    pub fn phase(&self) -> SessionPhase {
        if self.proof_present {
            SessionPhase::ProofGenerated
        } else if self.setup_present {
            SessionPhase::Ready
        } else {
            SessionPhase::Idle
        }
    }
}

/// The proof session controller.
///
/// Generic over the store and engine so tests can inject in-memory stores
/// and misbehaving engines. All operations take `&mut self`, which
/// serializes them at compile time — no two operations of one session can
/// overlap.
#[derive(Debug)]
pub struct ProofSession<S: ArtifactStore, E: ProvingEngine> {
    store: S,
    engine: E,
    registry: CircuitRegistry,
    state: SessionState,
}

impl<S: ArtifactStore, E: ProvingEngine> ProofSession<S, E> {
    /// Restore a session from the store, or start a fresh one.
    ///
    /// Rebuilds the circuit index and artifact presence flags from the
    /// store's keys, so artifacts persisted by a prior run are picked up
    /// again. A missing, unparseable, or out-of-range stored index
    /// degrades to a clean idle session at index 0 with the artifact keys
    /// cleared — artifacts scoped to an unknown circuit cannot be trusted.
    /// The verification status always restores to `Unknown`.
    ///
    /// # Errors
    ///
    /// Fails when the engine cannot report its circuit count (e.g. not
    /// loaded) or the store is unreadable.
    pub fn restore(store: S, engine: E) -> Result<Self, SessionError> {
        let registry = CircuitRegistry::from_engine(&engine)?;
        let mut session = Self {
            store,
            engine,
            registry,
            state: SessionState::default(),
        };

        if session.store.contains(KEY_CIRCUIT_INDEX) {
            let text = session.store.get(KEY_CIRCUIT_INDEX)?;
            match text.parse::<u32>() {
                Ok(index) if index < session.registry.count() => {
                    session.state.circuit_index = index;
                }
                _ => {
                    tracing::warn!(
                        stored = %text,
                        count = session.registry.count(),
                        "stored circuit index is unusable; resetting session"
                    );
                    session.store.remove(KEY_SETUP_PARAMS)?;
                    session.store.remove(KEY_PROOF)?;
                    session.store.put(KEY_CIRCUIT_INDEX, "0")?;
                }
            }
        }

        session.state.setup_present = session.store.contains(KEY_SETUP_PARAMS);
        session.state.proof_present = session.store.contains(KEY_PROOF);
        tracing::debug!(
            circuit = session.state.circuit_index,
            phase = %session.state.phase(),
            "session restored"
        );
        Ok(session)
    }

    /// The current session state snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The current phase.
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// The selected circuit index.
    pub fn circuit_index(&self) -> u32 {
        self.state.circuit_index
    }

    /// The verification status of the current proof.
    pub fn verification(&self) -> VerificationStatus {
        self.state.verification
    }

    /// The circuit catalog for this session.
    pub fn registry(&self) -> &CircuitRegistry {
        &self.registry
    }

    /// Read access to the underlying artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The descriptor of the selected circuit.
    ///
    /// The selected index is validated on every path that sets it, so the
    /// lookup is always in range.
    pub fn current_circuit(&self) -> &CircuitDescriptor {
        &self.registry.descriptors()[self.state.circuit_index as usize]
    }

    /// Probe the engine for liveness.
    pub fn probe_engine(&self) -> Result<String, SessionError> {
        Ok(self.engine.hello_world()?)
    }

    /// Select a circuit, invalidating all artifacts.
    ///
    /// Valid from any phase. Unconditional: selecting the currently
    /// selected index still clears everything — circuit context and
    /// artifact validity are inseparable.
    ///
    /// # Errors
    ///
    /// [`RegistryError::IndexOutOfRange`] when `new_index` is not in the
    /// catalog; nothing is modified in that case.
    pub fn select_circuit(&mut self, new_index: u32) -> Result<(), SessionError> {
        self.registry.descriptor(new_index)?;
        self.store.remove(KEY_SETUP_PARAMS)?;
        self.store.remove(KEY_PROOF)?;
        self.store.put(KEY_CIRCUIT_INDEX, &new_index.to_string())?;
        self.state = SessionState {
            circuit_index: new_index,
            ..SessionState::default()
        };
        tracing::debug!(circuit = new_index, "circuit selected; artifacts cleared");
        Ok(())
    }

    /// Select the next circuit in cyclic order. Returns the new index.
    pub fn next_circuit(&mut self) -> Result<u32, SessionError> {
        let index = self.registry.next(self.state.circuit_index);
        self.select_circuit(index)?;
        Ok(index)
    }

    /// Select the previous circuit in cyclic order. Returns the new index.
    pub fn previous_circuit(&mut self) -> Result<u32, SessionError> {
        let index = self.registry.previous(self.state.circuit_index);
        self.select_circuit(index)?;
        Ok(index)
    }

    /// Run parameter setup for security parameter `k`.
    ///
    /// Valid from any phase; re-setup overwrites the prior parameters,
    /// discards any stale proof, and re-enters `Ready`. An engine failure
    /// surfaces to the caller with state and store untouched — no partial
    /// artifact is written.
    pub fn run_setup(&mut self, k: u32) -> Result<(), SessionError> {
        let params = self.engine.setup(k)?;
        self.store.put(KEY_SETUP_PARAMS, &codec::encode(&params))?;
        self.store.remove(KEY_PROOF)?;
        self.state.setup_present = true;
        self.state.proof_present = false;
        self.state.verification = VerificationStatus::Unknown;
        tracing::debug!(k, bytes = params.len(), "setup parameters stored");
        Ok(())
    }

    /// Generate a proof for the supplied witness text.
    ///
    /// Requires setup parameters (`Ready` or later). The witness is
    /// canonicalized first; a parse failure surfaces as
    /// [`WitnessError::InvalidFormat`] with nothing mutated. Engine
    /// rejection surfaces as [`SessionError::ProofGeneration`]; an
    /// unloaded engine surfaces as [`EngineError::NotReady`]. Either way
    /// the prior proof artifact and state are untouched.
    pub fn generate_proof(&mut self, raw_witness: &str) -> Result<(), SessionError> {
        if !self.state.setup_present {
            return Err(SessionError::PreconditionNotMet {
                operation: "generate_proof",
                phase: self.phase(),
            });
        }
        let witness = CanonicalWitness::parse(raw_witness)?;
        let params = self.read_artifact(KEY_SETUP_PARAMS)?;
        let proof = self
            .engine
            .generate_proof(&params, witness.as_str(), self.state.circuit_index)
            .map_err(|e| match e {
                EngineError::NotReady => SessionError::Engine(EngineError::NotReady),
                rejected => SessionError::ProofGeneration { source: rejected },
            })?;
        self.store.put(KEY_PROOF, &codec::encode(&proof))?;
        self.state.proof_present = true;
        self.state.verification = VerificationStatus::Unknown;
        tracing::debug!(
            circuit = self.state.circuit_index,
            bytes = proof.len(),
            "proof stored"
        );
        Ok(())
    }

    /// Verify the stored proof against the supplied witness text.
    ///
    /// Requires a proof (`ProofGenerated`). The witness is canonicalized
    /// independently of generation — the user may have edited it in
    /// between. Store and codec failures abort with state unchanged; an
    /// engine failure is downgraded to an `Invalid` result (fail-closed)
    /// rather than propagated.
    pub fn verify_proof(
        &mut self,
        raw_witness: &str,
    ) -> Result<VerificationStatus, SessionError> {
        if !self.state.proof_present {
            return Err(SessionError::PreconditionNotMet {
                operation: "verify_proof",
                phase: self.phase(),
            });
        }
        let witness = CanonicalWitness::parse(raw_witness)?;
        let params = self.read_artifact(KEY_SETUP_PARAMS)?;
        let proof = self.read_artifact(KEY_PROOF)?;

        let status = match self.engine.verify_proof(
            &params,
            &proof,
            witness.as_str(),
            self.state.circuit_index,
        ) {
            Ok(true) => VerificationStatus::Valid,
            Ok(false) => VerificationStatus::Invalid,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "engine failed during verification; treating proof as invalid"
                );
                VerificationStatus::Invalid
            }
        };
        self.state.verification = status;
        tracing::debug!(result = %status, "verification complete");
        Ok(status)
    }

    /// Wipe the store and reset the session to its initial state.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.store.clear_all()?;
        self.state = SessionState::default();
        tracing::debug!("session cleared");
        Ok(())
    }

    /// Read and decode a stored binary artifact.
    fn read_artifact(&self, key: &str) -> Result<Vec<u8>, SessionError> {
        let text = self.store.get(key)?;
        Ok(codec::decode(&text)?)
    }
}
