//! # Canonical Witness — Deterministic Byte Production
//!
//! Defines `CanonicalWitness`, the sole construction path for witness text
//! handed to the proving engine.
//!
//! ## Security Invariant
//!
//! The newtype has a private inner field. The only way to construct it is
//! through [`CanonicalWitness::parse`], which parses the raw user text as
//! JSON and re-serializes it with `serde_jcs` (RFC 8785: sorted keys,
//! compact separators, deterministic number formatting). A proof generated
//! from `{"x": [5, 16]}` therefore verifies against `{ "x":[5,16] }` — the
//! engine only ever sees canonical bytes, regardless of how the user
//! formatted their input.
//!
//! Verification must canonicalize independently from generation: the user
//! may have edited the input in between, and a cached canonical form would
//! mask that.

use serde_json::Value;

use crate::error::WitnessError;

/// Witness text in RFC 8785 canonical form.
///
/// # Invariants
///
/// - The only constructor is [`CanonicalWitness::parse`].
/// - Structurally equal inputs produce byte-identical canonical text.
/// - The inner string is valid JSON with lexicographically sorted object
///   keys and no insignificant whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalWitness(String);

impl CanonicalWitness {
    /// Parse raw user text into a canonical witness.
    ///
    /// # Errors
    ///
    /// Returns [`WitnessError::InvalidFormat`] when the text is not valid
    /// JSON. The error carries the underlying parse failure for display.
    pub fn parse(raw: &str) -> Result<Self, WitnessError> {
        let value: Value = serde_json::from_str(raw)?;
        let canonical = serde_jcs::to_string(&value)?;
        Ok(Self(canonical))
    }

    /// The canonical witness text presented to the engine.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the witness, yielding the canonical text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalWitness {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalWitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
