//! # zkdesk-engine — Proving Engine Boundary
//!
//! The narrow call surface into the external proving engine.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): the [`ProvingEngine`] trait defines the five
//!   capabilities the session layer may call — liveness probe, parameter
//!   setup, proof generation, proof verification, and circuit enumeration.
//!   Implementations carry no state and persist nothing; caching and
//!   persistence belong to the session controller.
//!
//! - **Slot** (`slot.rs`): [`EngineSlot`] models the host's deferred engine
//!   instantiation. An empty slot answers every call with
//!   [`EngineError::NotReady`], which callers must treat as distinct from an
//!   engine-rejected input.
//!
//! - **Mock** (`mock.rs`): [`MockEngine`], a deterministic sha2-based
//!   stand-in with three circuit variants. Provides no zero-knowledge
//!   privacy; it exists so the session layer is exercisable without a real
//!   prover.

pub mod mock;
pub mod slot;
pub mod traits;

pub use mock::MockEngine;
pub use slot::EngineSlot;
pub use traits::{EngineError, ProvingEngine};
