//! XAES-256-GCM error types.

use thiserror::Error;

/// XAES-256-GCM errors.
///
/// Failures on the decryption side are deliberately coarse: a bad tag,
/// tampered associated data and a truncated automatic-mode ciphertext all
/// surface as [`XaesError::AuthenticationFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum XaesError {
    /// Master key is not 32 bytes
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Nonce passed to a manual-nonce open is not 24 bytes
    #[error("invalid nonce length: expected {expected}, got {actual}")]
    BadNonceLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Message authentication failed
    #[error("message authentication failed")]
    AuthenticationFailed,

    /// The OS random number generator failed
    #[error("random number generation failed")]
    RandomFailed,
}
