//! End-to-end proof session scenarios: the full setup → prove → verify
//! workflow, artifact invalidation on circuit switches, fail-closed
//! verification, and recovery from malformed storage.

use zkdesk_engine::{EngineError, EngineSlot, MockEngine, ProvingEngine};
use zkdesk_session::{
    ArtifactStore, FileStore, MemoryStore, ProofSession, RegistryError, SessionError,
    SessionPhase, VerificationStatus, KEY_PROOF, KEY_SETUP_PARAMS,
};

const WITNESS: &str = r#"{"x":[5,16,8,4,2,1]}"#;
const TAMPERED_WITNESS: &str = r#"{"x":[5,16,8,4,2,2]}"#;

/// An engine whose verification always throws. Everything else delegates
/// to the mock.
struct ThrowingVerifier(MockEngine);

impl ProvingEngine for ThrowingVerifier {
    fn hello_world(&self) -> Result<String, EngineError> {
        self.0.hello_world()
    }

    fn setup(&self, k: u32) -> Result<Vec<u8>, EngineError> {
        self.0.setup(k)
    }

    fn generate_proof(
        &self,
        params: &[u8],
        witness: &str,
        circuit_index: u32,
    ) -> Result<Vec<u8>, EngineError> {
        self.0.generate_proof(params, witness, circuit_index)
    }

    fn verify_proof(
        &self,
        _params: &[u8],
        _proof: &[u8],
        _witness: &str,
        _circuit_index: u32,
    ) -> Result<bool, EngineError> {
        Err(EngineError::Rejected("verifier exploded".to_string()))
    }

    fn circuit_count(&self) -> Result<u32, EngineError> {
        self.0.circuit_count()
    }
}

#[test]
fn end_to_end_setup_prove_verify() {
    let mut session = ProofSession::restore(MemoryStore::new(), MockEngine::new()).unwrap();
    assert_eq!(session.phase(), SessionPhase::Idle);

    session.run_setup(10).unwrap();
    assert_eq!(session.phase(), SessionPhase::Ready);

    session.generate_proof(WITNESS).unwrap();
    assert_eq!(session.phase(), SessionPhase::ProofGenerated);
    assert_eq!(session.verification(), VerificationStatus::Unknown);

    let status = session.verify_proof(WITNESS).unwrap();
    assert_eq!(status, VerificationStatus::Valid);
    assert_eq!(session.verification(), VerificationStatus::Valid);
    assert_eq!(session.phase(), SessionPhase::ProofGenerated);
}

#[test]
fn tampered_witness_verifies_invalid() {
    let mut session = ProofSession::restore(MemoryStore::new(), MockEngine::new()).unwrap();
    session.run_setup(10).unwrap();
    session.generate_proof(WITNESS).unwrap();

    let status = session.verify_proof(TAMPERED_WITNESS).unwrap();
    assert_eq!(status, VerificationStatus::Invalid);
    // Not a dead end: regenerating re-enters ProofGenerated/Unknown.
    session.generate_proof(TAMPERED_WITNESS).unwrap();
    assert_eq!(session.verification(), VerificationStatus::Unknown);
    assert_eq!(
        session.verify_proof(TAMPERED_WITNESS).unwrap(),
        VerificationStatus::Valid
    );
}

#[test]
fn throwing_verifier_fails_closed() {
    let engine = ThrowingVerifier(MockEngine::new());
    let mut session = ProofSession::restore(MemoryStore::new(), engine).unwrap();
    session.run_setup(10).unwrap();
    session.generate_proof(WITNESS).unwrap();

    // Never an unhandled failure: the throw becomes an Invalid result.
    let status = session.verify_proof(WITNESS).unwrap();
    assert_eq!(status, VerificationStatus::Invalid);
    assert_eq!(session.phase(), SessionPhase::ProofGenerated);
}

#[test]
fn circuit_switch_erases_stored_artifacts() {
    let store = MemoryStore::new();
    let mut session = ProofSession::restore(store, MockEngine::new()).unwrap();
    session.run_setup(10).unwrap();
    session.generate_proof(WITNESS).unwrap();

    session.select_circuit(1).unwrap();
    assert!(!session.state().setup_present);
    assert!(!session.state().proof_present);
    assert_eq!(session.verification(), VerificationStatus::Unknown);
    assert!(!session.store().contains(KEY_SETUP_PARAMS));
    assert!(!session.store().contains(KEY_PROOF));

    // A proof generated under the old circuit must not be reachable:
    // generation now requires a fresh setup.
    assert!(matches!(
        session.generate_proof(WITNESS),
        Err(SessionError::PreconditionNotMet { .. })
    ));
}

#[test]
fn precondition_failures_leave_store_unchanged() {
    let mut session = ProofSession::restore(MemoryStore::new(), MockEngine::new()).unwrap();
    assert!(matches!(
        session.generate_proof(WITNESS),
        Err(SessionError::PreconditionNotMet { .. })
    ));
    assert!(matches!(
        session.verify_proof(WITNESS),
        Err(SessionError::PreconditionNotMet { .. })
    ));
    // No artifact key was written by the failed attempts.
    assert!(!session.store().contains(KEY_SETUP_PARAMS));
    assert!(!session.store().contains(KEY_PROOF));
}

#[test]
fn malformed_stored_setup_aborts_generation() {
    let mut store = MemoryStore::new();
    store.put(KEY_SETUP_PARAMS, "definitely not bytes").unwrap();

    let mut session = ProofSession::restore(store, MockEngine::new()).unwrap();
    assert_eq!(session.phase(), SessionPhase::Ready);

    let err = session.generate_proof(WITNESS).unwrap_err();
    assert!(matches!(err, SessionError::Codec(_)));
    // State unchanged: still Ready, still no proof.
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert!(!session.state().proof_present);
}

#[test]
fn unloaded_engine_cannot_open_a_session() {
    let slot: EngineSlot<MockEngine> = EngineSlot::empty();
    let err = ProofSession::restore(MemoryStore::new(), slot).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Registry(RegistryError::Engine(EngineError::NotReady))
    ));
}

#[test]
fn loaded_engine_slot_behaves_like_the_engine() {
    let slot = EngineSlot::loaded(MockEngine::new());
    let mut session = ProofSession::restore(MemoryStore::new(), slot).unwrap();
    session.run_setup(10).unwrap();
    session.generate_proof(WITNESS).unwrap();
    assert_eq!(
        session.verify_proof(WITNESS).unwrap(),
        VerificationStatus::Valid
    );
}

#[test]
fn session_survives_process_restart_via_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let store = FileStore::open(&path).unwrap();
        let mut session = ProofSession::restore(store, MockEngine::new()).unwrap();
        session.select_circuit(1).unwrap();
        session.run_setup(10).unwrap();
        session.generate_proof(WITNESS).unwrap();
    }

    // "Reload": reopen the same file with a fresh engine instance.
    let store = FileStore::open(&path).unwrap();
    let mut session = ProofSession::restore(store, MockEngine::new()).unwrap();
    assert_eq!(session.circuit_index(), 1);
    assert_eq!(session.phase(), SessionPhase::ProofGenerated);
    assert_eq!(session.verification(), VerificationStatus::Unknown);
    assert_eq!(
        session.verify_proof(WITNESS).unwrap(),
        VerificationStatus::Valid
    );
}

#[test]
fn clear_wipes_the_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let store = FileStore::open(&path).unwrap();
        let mut session = ProofSession::restore(store, MockEngine::new()).unwrap();
        session.run_setup(10).unwrap();
        session.clear().unwrap();
    }

    let store = FileStore::open(&path).unwrap();
    assert!(!store.contains(KEY_SETUP_PARAMS));
    let session = ProofSession::restore(store, MockEngine::new()).unwrap();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.circuit_index(), 0);
}
