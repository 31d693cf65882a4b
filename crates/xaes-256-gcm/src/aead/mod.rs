//! XAES-256-GCM AEAD.
//!
//! Two types share the [`Aead`] capability set:
//!
//! - [`Xaes256GcmManual`] - the primitive. Takes a 24-byte nonce per call;
//!   the caller guarantees uniqueness under a key.
//! - [`Xaes256Gcm`] - wraps a [`Xaes256GcmManual`], draws each nonce from
//!   the OS CSPRNG and prepends it to the ciphertext. Callers pass an empty
//!   nonce.
//!
//! ## Module Organization
//!
//! - [`manual`] - manual-nonce core (key derivation + AES-256-GCM)
//! - [`auto`] - automatic-nonce wrapper
//! - `rustcrypto` - RustCrypto `aead` trait implementations
//!
//! ## Failure Semantics
//!
//! Seal inputs are caller-controlled: a nonce of the wrong length is a bug
//! in the caller and panics. Open inputs may come from an attacker: every
//! failure is an [`XaesError`] and no plaintext is ever returned with one.

pub mod auto;
pub mod manual;
mod rustcrypto;

pub use auto::Xaes256Gcm;
pub use manual::Xaes256GcmManual;

use crate::XaesError;

/// Seal/open capability shared by both XAES-256-GCM modes.
pub trait Aead {
    /// Nonce length callers must pass to seal/open.
    fn nonce_size(&self) -> usize;

    /// Difference between ciphertext and plaintext lengths.
    fn overhead(&self) -> usize;

    /// Encrypt and authenticate `plaintext`, appending the result to `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `nonce.len()` != [`Aead::nonce_size`].
    fn seal_into(&self, dst: &mut Vec<u8>, nonce: &[u8], plaintext: &[u8], aad: &[u8]);

    /// Authenticate and decrypt `ciphertext`, appending the plaintext to `dst`.
    ///
    /// On failure `dst` is left exactly as it was passed in.
    ///
    /// # Errors
    ///
    /// Returns [`XaesError::AuthenticationFailed`] if the ciphertext, tag or
    /// associated data do not authenticate. The manual-nonce type also
    /// returns [`XaesError::BadNonceLength`] for a malformed nonce.
    fn open_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<(), XaesError>;

    /// Encrypt and authenticate `plaintext` into a new buffer.
    ///
    /// # Panics
    ///
    /// Panics if `nonce.len()` != [`Aead::nonce_size`].
    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(plaintext.len() + self.overhead());
        self.seal_into(&mut out, nonce, plaintext, aad);
        out
    }

    /// Authenticate and decrypt `ciphertext` into a new buffer.
    ///
    /// # Errors
    ///
    /// See [`Aead::open_into`].
    fn open(&self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, XaesError> {
        let mut out = Vec::with_capacity(ciphertext.len().saturating_sub(self.overhead()));
        self.open_into(&mut out, nonce, ciphertext, aad)?;
        Ok(out)
    }
}
