//! Opaque share code generation.
//!
//! Codes are lowercase hex drawn from the OS random source. The default
//! length of 8 characters gives a 32-bit space; collisions are handled by
//! the caller retrying with a fresh code.

use crate::error::AppError;
use serde_json::json;

/// Default share code length in hex characters.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Longest accepted share code length in hex characters.
pub const MAX_CODE_LENGTH: usize = 32;

/// Checks that `length` is a usable code length: even, between
/// [`DEFAULT_CODE_LENGTH`] and [`MAX_CODE_LENGTH`].
pub fn is_valid_code_length(length: usize) -> bool {
    (DEFAULT_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) && length % 2 == 0
}

/// Generates a random lowercase hex code of `length` characters.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the length is not valid (see
/// [`is_valid_code_length`]) or the system random source fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8)?;
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_code(length: usize) -> Result<String, AppError> {
    if !is_valid_code_length(length) {
        return Err(AppError::internal(
            "Invalid share code length",
            json!({ "length": length }),
        ));
    }

    let mut buffer = [0u8; MAX_CODE_LENGTH / 2];
    let bytes = &mut buffer[..length / 2];

    getrandom::fill(bytes).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(hex::encode(bytes))
}
