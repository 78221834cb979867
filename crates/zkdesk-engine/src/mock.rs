//! # Mock Proving Engine
//!
//! A deterministic, transparent stand-in for the real proving engine.
//! "Proofs" are SHA-256 digests binding the setup parameters, the canonical
//! witness text, and the circuit index; verification recomputes the digest
//! and compares.
//!
//! ## How It Works
//!
//! - `setup(k)` derives parameter bytes from `k` alone.
//! - `generate_proof` computes
//!   `SHA256(tag || params || witness || circuit_index)`.
//! - `verify_proof` recomputes the same digest, so a proof verifies only
//!   against the exact parameters, witness bytes, and circuit used to
//!   create it — a single changed witness element flips the result.
//!
//! ## Security Warning
//!
//! **NOT PRIVATE, NOT SOUND.** The digest is recomputable by anyone from
//! the public inputs. This engine exists so the session layer can be
//! developed and tested without a real prover behind it.

use sha2::{Digest, Sha256};

use crate::traits::{EngineError, ProvingEngine};

/// Display names of the circuit variants this engine understands, in
/// registry order.
const CIRCUITS: &[&str] = &["collatz", "arithmetic", "poseidon"];

/// Largest accepted security parameter. Mirrors the row-capacity ceiling a
/// real parameter setup enforces.
const MAX_K: u32 = 28;

/// Deterministic mock proving engine.
#[derive(Debug, Default, Clone)]
pub struct MockEngine;

impl MockEngine {
    /// Create a mock engine. Stateless; every instance behaves identically.
    pub fn new() -> Self {
        Self
    }

    /// Display names of the supported circuits, in index order.
    pub fn circuit_names() -> &'static [&'static str] {
        CIRCUITS
    }

    fn check_circuit(&self, circuit_index: u32) -> Result<(), EngineError> {
        if (circuit_index as usize) < CIRCUITS.len() {
            Ok(())
        } else {
            Err(EngineError::Rejected(format!(
                "unknown circuit index {circuit_index} (have {})",
                CIRCUITS.len()
            )))
        }
    }

    fn proof_digest(params: &[u8], witness: &str, circuit_index: u32) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(b"zkdesk.mock.proof");
        hasher.update(params);
        hasher.update(witness.as_bytes());
        hasher.update(circuit_index.to_le_bytes());
        hasher.finalize().to_vec()
    }
}

impl ProvingEngine for MockEngine {
    fn hello_world(&self) -> Result<String, EngineError> {
        Ok("hello from the mock proving engine".to_string())
    }

    /// Derive setup parameters from `k`.
    ///
    /// Deterministic: the same `k` always yields the same bytes. A real
    /// engine may legitimately produce fresh parameters per call; callers
    /// must not rely on either behavior.
    fn setup(&self, k: u32) -> Result<Vec<u8>, EngineError> {
        if k == 0 || k > MAX_K {
            return Err(EngineError::Rejected(format!(
                "security parameter k={k} out of range [1, {MAX_K}]"
            )));
        }
        let mut hasher = Sha256::new();
        hasher.update(b"zkdesk.mock.params");
        hasher.update(k.to_le_bytes());
        Ok(hasher.finalize().to_vec())
    }

    fn generate_proof(
        &self,
        params: &[u8],
        witness: &str,
        circuit_index: u32,
    ) -> Result<Vec<u8>, EngineError> {
        self.check_circuit(circuit_index)?;
        if params.is_empty() {
            return Err(EngineError::Rejected(
                "setup parameters are empty".to_string(),
            ));
        }
        Ok(Self::proof_digest(params, witness, circuit_index))
    }

    fn verify_proof(
        &self,
        params: &[u8],
        proof: &[u8],
        witness: &str,
        circuit_index: u32,
    ) -> Result<bool, EngineError> {
        self.check_circuit(circuit_index)?;
        let expected = Self::proof_digest(params, witness, circuit_index);
        Ok(proof == expected.as_slice())
    }

    fn circuit_count(&self) -> Result<u32, EngineError> {
        Ok(CIRCUITS.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITNESS: &str = r#"{"x":[5,16,8,4,2,1]}"#;

    #[test]
    fn hello_world_answers() {
        let engine = MockEngine::new();
        assert!(engine.hello_world().unwrap().contains("proving engine"));
    }

    #[test]
    fn circuit_count_matches_catalog() {
        let engine = MockEngine::new();
        assert_eq!(engine.circuit_count().unwrap() as usize, CIRCUITS.len());
    }

    #[test]
    fn setup_is_deterministic() {
        let engine = MockEngine::new();
        assert_eq!(engine.setup(10).unwrap(), engine.setup(10).unwrap());
        assert_ne!(engine.setup(10).unwrap(), engine.setup(11).unwrap());
    }

    #[test]
    fn setup_rejects_out_of_range_k() {
        let engine = MockEngine::new();
        assert!(matches!(engine.setup(0), Err(EngineError::Rejected(_))));
        assert!(matches!(
            engine.setup(MAX_K + 1),
            Err(EngineError::Rejected(_))
        ));
    }

    #[test]
    fn prove_then_verify_roundtrip() {
        let engine = MockEngine::new();
        let params = engine.setup(10).unwrap();
        let proof = engine.generate_proof(&params, WITNESS, 0).unwrap();
        assert!(engine.verify_proof(&params, &proof, WITNESS, 0).unwrap());
    }

    #[test]
    fn verify_rejects_tampered_witness() {
        let engine = MockEngine::new();
        let params = engine.setup(10).unwrap();
        let proof = engine.generate_proof(&params, WITNESS, 0).unwrap();
        let tampered = r#"{"x":[5,16,8,4,2,2]}"#;
        assert!(!engine.verify_proof(&params, &proof, tampered, 0).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_circuit() {
        let engine = MockEngine::new();
        let params = engine.setup(10).unwrap();
        let proof = engine.generate_proof(&params, WITNESS, 0).unwrap();
        assert!(!engine.verify_proof(&params, &proof, WITNESS, 1).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_params() {
        let engine = MockEngine::new();
        let params = engine.setup(10).unwrap();
        let other = engine.setup(11).unwrap();
        let proof = engine.generate_proof(&params, WITNESS, 0).unwrap();
        assert!(!engine.verify_proof(&other, &proof, WITNESS, 0).unwrap());
    }

    #[test]
    fn generate_rejects_unknown_circuit() {
        let engine = MockEngine::new();
        let params = engine.setup(10).unwrap();
        let result = engine.generate_proof(&params, WITNESS, 99);
        assert!(matches!(result, Err(EngineError::Rejected(_))));
    }

    #[test]
    fn generate_rejects_empty_params() {
        let engine = MockEngine::new();
        let result = engine.generate_proof(&[], WITNESS, 0);
        assert!(matches!(result, Err(EngineError::Rejected(_))));
    }
}
