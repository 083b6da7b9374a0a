//! Identifier keys
//!
//! Question ids are stored as 8-byte big-endian keys. The table compares keys
//! as raw bytes, and big-endian makes that order identical to numeric order,
//! so a forward scan visits questions by ascending id.

use crate::error::{QuestionError, Result};

/// Width of an encoded key
pub const KEY_SIZE: usize = 8;

/// Encode an id as its big-endian key
pub fn encode_key(id: u64) -> [u8; KEY_SIZE] {
    id.to_be_bytes()
}

/// Decode a big-endian key back to its id
///
/// Fails with `CorruptRecord` unless the key is exactly 8 bytes.
pub fn decode_key(bytes: &[u8]) -> Result<u64> {
    let raw: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| {
        QuestionError::CorruptRecord(format!(
            "key must be {} bytes, got {}",
            KEY_SIZE,
            bytes.len()
        ))
    })?;

    Ok(u64::from_be_bytes(raw))
}
