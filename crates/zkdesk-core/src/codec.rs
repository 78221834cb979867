//! # Artifact Byte Codec
//!
//! Converts between the engine's binary artifact representation and the
//! textual form stored in the artifact store: comma-joined decimal byte
//! values (`[5, 16, 8]` ↔ `"5,16,8"`). This is the only on-storage format
//! for binary artifacts, and it must stay bit-exact for interoperability
//! with artifacts persisted by prior sessions.
//!
//! ## Invariant
//!
//! `decode(encode(b)) == b` for every byte sequence `b`, including the
//! empty sequence (which encodes to the empty string).

use crate::error::CodecError;

/// Encode artifact bytes as comma-joined decimal values.
///
/// The empty slice encodes to the empty string.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&b.to_string());
    }
    out
}

/// Decode comma-joined decimal values back into artifact bytes.
///
/// The empty string decodes to the empty byte sequence.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] when any comma-separated token is not
/// an integer in `[0, 255]`. The failure carries the offending token; the
/// input is never coerced into zero-filled data.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|token| {
            token.parse::<u8>().map_err(|_| CodecError::Malformed {
                token: token.to_string(),
            })
        })
        .collect()
}
