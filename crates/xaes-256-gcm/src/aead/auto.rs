//! Automatic-nonce XAES-256-GCM.
//!
//! ## Ciphertext Format
//!
//! ```text
//! +----------------+---------------------------+----------------+
//! | Nonce (24B)    | Ciphertext (len(pt) B)    | Tag (16B)      |
//! +----------------+---------------------------+----------------+
//! ```

use rand_core::{CryptoRng, RngCore};

use super::Aead;
use super::manual::Xaes256GcmManual;
use crate::random::random_nonce;
use crate::{Key, NONCE_SIZE, OVERHEAD, XaesError};

/// XAES-256-GCM with random, embedded nonces.
///
/// Each seal draws a fresh 24-byte nonce from the OS CSPRNG and prepends it
/// to the ciphertext; open reads it back. Both take an empty nonce.
#[derive(Clone, Debug)]
pub struct Xaes256Gcm {
    inner: Xaes256GcmManual,
}

impl Xaes256Gcm {
    /// Create an instance from a 32-byte master key.
    ///
    /// # Errors
    ///
    /// Returns [`XaesError::InvalidKeyLength`] if `key` is not 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, XaesError> {
        Ok(Self {
            inner: Xaes256GcmManual::new(key)?,
        })
    }

    /// Create an instance from a typed master key.
    #[must_use]
    pub fn from_key(key: &Key) -> Self {
        Self {
            inner: Xaes256GcmManual::from_key(key),
        }
    }

    /// Seal with a fresh OS-random nonce, reporting RNG failure instead of
    /// panicking.
    ///
    /// Appends `nonce || ciphertext || tag` to `dst`. On error `dst` is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`XaesError::RandomFailed`] if the OS CSPRNG fails.
    pub fn try_seal_into(
        &self,
        dst: &mut Vec<u8>,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<(), XaesError> {
        let nonce = random_nonce()?;
        self.seal_with_nonce(dst, &nonce, plaintext, aad);
        Ok(())
    }

    /// Seal with a nonce drawn from `rng`.
    #[must_use]
    pub fn seal_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Vec<u8> {
        let mut nonce = [0u8; NONCE_SIZE];
        rng.fill_bytes(&mut nonce);

        let mut out = Vec::with_capacity(plaintext.len() + OVERHEAD);
        self.seal_with_nonce(&mut out, &nonce, plaintext, aad);
        out
    }

    fn seal_with_nonce(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8; NONCE_SIZE],
        plaintext: &[u8],
        aad: &[u8],
    ) {
        dst.reserve(plaintext.len() + OVERHEAD);
        dst.extend_from_slice(nonce);
        self.inner.seal_into(dst, nonce, plaintext, aad);
    }
}

impl Aead for Xaes256Gcm {
    fn nonce_size(&self) -> usize {
        0
    }

    fn overhead(&self) -> usize {
        OVERHEAD
    }

    /// # Panics
    ///
    /// Panics if `nonce` is not empty, or if the OS CSPRNG fails. Use
    /// [`Xaes256Gcm::try_seal_into`] to handle RNG failure as an error.
    fn seal_into(&self, dst: &mut Vec<u8>, nonce: &[u8], plaintext: &[u8], aad: &[u8]) {
        assert!(nonce.is_empty(), "xaes256gcm: bad nonce length");

        if let Err(err) = self.try_seal_into(dst, plaintext, aad) {
            tracing::error!(error = %err, "OS random source failed, refusing to seal");
            panic!("xaes256gcm: {err}");
        }
    }

    fn open_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<(), XaesError> {
        if !nonce.is_empty() || ciphertext.len() < NONCE_SIZE {
            tracing::trace!("XAES-256-GCM open rejected: authentication failed");
            return Err(XaesError::AuthenticationFailed);
        }

        let (nonce, ciphertext) = ciphertext.split_at(NONCE_SIZE);
        self.inner
            .open_into(dst, nonce, ciphertext, aad)
            .map_err(|_| XaesError::AuthenticationFailed)
    }
}
