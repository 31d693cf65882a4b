//! Secure random number generation.
//!
//! All randomness comes from the operating system CSPRNG. There is no
//! fallback source: a failure is reported, never papered over.

use crate::{NONCE_SIZE, XaesError};

/// Fill a buffer with random bytes from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`XaesError::RandomFailed`] if the underlying OS CSPRNG fails.
pub fn fill_random(buf: &mut [u8]) -> Result<(), XaesError> {
    getrandom::fill(buf).map_err(|_| XaesError::RandomFailed)
}

/// Generate a random 24-byte XAES-256-GCM nonce.
///
/// # Errors
///
/// Returns [`XaesError::RandomFailed`] if the underlying OS CSPRNG fails.
pub fn random_nonce() -> Result<[u8; NONCE_SIZE], XaesError> {
    let mut nonce = [0u8; NONCE_SIZE];
    fill_random(&mut nonce)?;
    Ok(nonce)
}
