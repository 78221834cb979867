//! # zkdesk-core — Foundational Types
//!
//! Shared building blocks for the zkdesk proof session workbench.
//!
//! - **Codec** (`codec.rs`): the comma-separated-decimal text encoding used
//!   for every persisted binary artifact. `decode(encode(b)) == b` for all
//!   byte sequences, including the empty one.
//!
//! - **Witness** (`witness.rs`): `CanonicalWitness`, the sole construction
//!   path for witness text handed to the proving engine. Raw user input is
//!   parsed as JSON and re-serialized in RFC 8785 canonical form, so
//!   incidental formatting never changes the bytes the engine signs over.
//!
//! - **Errors** (`error.rs`): per-concern `thiserror` enums. Malformed
//!   stored artifacts and unparseable witness text are distinguishable
//!   failures, never silently coerced.
//!
//! ## Crate Policy
//!
//! No engine calls, no storage, no I/O. Everything in this crate is a pure
//! function over its inputs.

pub mod codec;
pub mod error;
pub mod witness;

pub use error::{CodecError, WitnessError};
pub use witness::CanonicalWitness;
