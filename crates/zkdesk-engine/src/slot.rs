//! # Engine Slot — Deferred Loading
//!
//! The host environment loads the proving engine asynchronously (in the
//! original system, a WASM module fetched after first paint). Until that
//! completes, the engine handle is simply absent. [`EngineSlot`] makes that
//! absence a value: an empty slot implements [`ProvingEngine`] by answering
//! every call with [`EngineError::NotReady`], so callers get the documented
//! "not loaded" failure instead of a panic or a hang.

use crate::traits::{EngineError, ProvingEngine};

/// A slot that may or may not hold a loaded proving engine.
#[derive(Debug, Default)]
pub struct EngineSlot<E> {
    inner: Option<E>,
}

impl<E: ProvingEngine> EngineSlot<E> {
    /// An empty slot: the engine has not been loaded yet.
    pub fn empty() -> Self {
        Self { inner: None }
    }

    /// A slot holding an already-loaded engine.
    pub fn loaded(engine: E) -> Self {
        Self {
            inner: Some(engine),
        }
    }

    /// Install a loaded engine, replacing any previous one.
    pub fn install(&mut self, engine: E) {
        self.inner = Some(engine);
    }

    /// Whether an engine is currently installed.
    pub fn is_loaded(&self) -> bool {
        self.inner.is_some()
    }

    fn engine(&self) -> Result<&E, EngineError> {
        self.inner.as_ref().ok_or(EngineError::NotReady)
    }
}

impl<E: ProvingEngine> ProvingEngine for EngineSlot<E> {
    fn hello_world(&self) -> Result<String, EngineError> {
        self.engine()?.hello_world()
    }

    fn setup(&self, k: u32) -> Result<Vec<u8>, EngineError> {
        self.engine()?.setup(k)
    }

    fn generate_proof(
        &self,
        params: &[u8],
        witness: &str,
        circuit_index: u32,
    ) -> Result<Vec<u8>, EngineError> {
        self.engine()?.generate_proof(params, witness, circuit_index)
    }

    fn verify_proof(
        &self,
        params: &[u8],
        proof: &[u8],
        witness: &str,
        circuit_index: u32,
    ) -> Result<bool, EngineError> {
        self.engine()?
            .verify_proof(params, proof, witness, circuit_index)
    }

    fn circuit_count(&self) -> Result<u32, EngineError> {
        self.engine()?.circuit_count()
    }
}
