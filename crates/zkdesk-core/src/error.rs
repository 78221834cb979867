//! # Error Types — Codec and Witness Failures
//!
//! Error enums for the foundational crate. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - A malformed stored artifact fails loudly with the offending token —
//!   it is never coerced to zero-filled bytes.
//! - Witness parse failures carry the underlying `serde_json` error so the
//!   caller can show the user where their input went wrong.

use thiserror::Error;

/// Error while decoding a persisted artifact back into bytes.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The stored text is not a comma-separated list of byte values.
    #[error("malformed artifact encoding: `{token}` is not a decimal byte value in [0,255]")]
    Malformed {
        /// The token that failed to parse.
        token: String,
    },
}

/// Error while canonicalizing raw witness text.
#[derive(Error, Debug)]
pub enum WitnessError {
    /// The user-supplied text is not parseable as JSON.
    #[error("witness input is not valid JSON: {0}")]
    InvalidFormat(#[from] serde_json::Error),
}
