//! Plaintext password comparison.

use subtle::ConstantTimeEq;

/// Compare a stored password with a supplied one, byte for byte.
///
/// Runs in time independent of where the first mismatching byte is.
pub fn plaintext_matches(stored: &str, supplied: &str) -> bool {
    stored.as_bytes().ct_eq(supplied.as_bytes()).into()
}
