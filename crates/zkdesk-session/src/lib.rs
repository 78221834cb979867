//! # zkdesk-session — Proof Session Layer
//!
//! Orchestrates the proof workflow on top of the engine boundary: artifact
//! persistence, circuit selection, and the state machine that decides which
//! operation is valid when.
//!
//! ## Components
//!
//! - **Store** (`store.rs`): the [`ArtifactStore`] trait with an in-memory
//!   and a file-backed implementation. The store handle is injected into
//!   the controller at construction — there is no ambient global — so
//!   independent sessions and tests never cross-contaminate.
//!
//! - **Registry** (`registry.rs`): [`CircuitRegistry`], the ordered catalog
//!   of circuit variants with cyclic next/previous navigation. The engine's
//!   circuit count is cached for the session at construction.
//!
//! - **Controller** (`controller.rs`): [`ProofSession`], the state machine
//!   coordinating setup, proof generation, and verification. Owns the
//!   session state exclusively; every mutation flows through its
//!   operations.
//!
//! ## Lifecycle Invariant
//!
//! Any circuit-index change — including re-selecting the current index —
//! atomically erases the stored setup and proof artifacts and resets the
//! session to idle. An artifact generated under circuit A is never reused
//! under circuit B.

pub mod controller;
pub mod registry;
pub mod store;

pub use controller::{
    ProofSession, SessionError, SessionPhase, SessionState, VerificationStatus,
    KEY_CIRCUIT_INDEX, KEY_PROOF, KEY_SETUP_PARAMS,
};
pub use registry::{CircuitDescriptor, CircuitRegistry, RegistryError};
pub use store::{ArtifactStore, FileStore, MemoryStore, StoreError};
