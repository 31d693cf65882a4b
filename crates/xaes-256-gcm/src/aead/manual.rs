//! Manual-nonce XAES-256-GCM.
//!
//! ```text
//! nonce = N1 (12 bytes) || N2 (12 bytes)
//! Kx    = KDF(K, N1)
//! out   = AES-256-GCM(Kx).seal(nonce = N2, plaintext, aad)
//! ```

use aes_gcm::Aes256Gcm;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use zeroize::Zeroize;

use super::Aead;
use crate::kdf::MessageKdf;
use crate::{GCM_NONCE_SIZE, Key, NONCE_SIZE, OVERHEAD_WITH_MANUAL_NONCES, TAG_SIZE, XaesError};

/// XAES-256-GCM with caller-supplied 24-byte nonces.
///
/// Nonces must be unique per key; random nonces from a CSPRNG are safe for
/// an effectively unlimited number of messages. Most callers want
/// [`Xaes256Gcm`](super::Xaes256Gcm) instead.
///
/// Immutable after construction, so a single instance can be shared by
/// any number of threads.
#[derive(Clone, Debug)]
pub struct Xaes256GcmManual {
    kdf: MessageKdf,
}

impl Xaes256GcmManual {
    /// Create an instance from a 32-byte master key.
    ///
    /// # Errors
    ///
    /// Returns [`XaesError::InvalidKeyLength`] if `key` is not 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, XaesError> {
        let key = Key::from_slice(key)?;
        Ok(Self::from_key(&key))
    }

    /// Create an instance from a typed master key.
    #[must_use]
    pub fn from_key(key: &Key) -> Self {
        let kdf = MessageKdf::new(key);
        tracing::debug!("XAES-256-GCM instance initialized (manual nonces)");
        Self { kdf }
    }

    /// AES-256-GCM keyed with the message key for `prefix`.
    pub(crate) fn keyed_gcm(&self, prefix: &[u8; GCM_NONCE_SIZE]) -> Aes256Gcm {
        let key = self.kdf.derive(prefix);
        Aes256Gcm::new(key.as_bytes().into())
    }
}

/// Split a 24-byte nonce into the KDF prefix and the GCM nonce.
pub(crate) fn split_nonce(nonce: &[u8]) -> Option<(&[u8; GCM_NONCE_SIZE], &[u8])> {
    if nonce.len() != NONCE_SIZE {
        return None;
    }
    let (prefix, gcm_nonce) = nonce.split_at(GCM_NONCE_SIZE);
    Some((prefix.try_into().ok()?, gcm_nonce))
}

impl Aead for Xaes256GcmManual {
    fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    fn overhead(&self) -> usize {
        OVERHEAD_WITH_MANUAL_NONCES
    }

    /// # Panics
    ///
    /// Panics if `nonce` is not 24 bytes, or if `plaintext` exceeds the
    /// AES-GCM message limit (2^36 - 32 bytes).
    fn seal_into(&self, dst: &mut Vec<u8>, nonce: &[u8], plaintext: &[u8], aad: &[u8]) {
        let Some((prefix, gcm_nonce)) = split_nonce(nonce) else {
            panic!("xaes256gcm: bad nonce length");
        };

        let start = dst.len();
        dst.reserve(plaintext.len() + TAG_SIZE);
        dst.extend_from_slice(plaintext);

        match self.keyed_gcm(prefix).encrypt_in_place_detached(
            GenericArray::from_slice(gcm_nonce),
            aad,
            &mut dst[start..],
        ) {
            Ok(tag) => dst.extend_from_slice(&tag),
            Err(_) => {
                dst[start..].zeroize();
                dst.truncate(start);
                panic!("xaes256gcm: message too large");
            }
        }
    }

    fn open_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<(), XaesError> {
        let (prefix, gcm_nonce) = split_nonce(nonce).ok_or(XaesError::BadNonceLength {
            expected: NONCE_SIZE,
            actual: nonce.len(),
        })?;

        if ciphertext.len() < TAG_SIZE {
            tracing::trace!("XAES-256-GCM open rejected: authentication failed");
            return Err(XaesError::AuthenticationFailed);
        }
        let (body, tag) = ciphertext.split_at(ciphertext.len() - TAG_SIZE);

        let start = dst.len();
        dst.extend_from_slice(body);

        let result = self.keyed_gcm(prefix).decrypt_in_place_detached(
            GenericArray::from_slice(gcm_nonce),
            aad,
            &mut dst[start..],
            GenericArray::from_slice(tag),
        );

        if result.is_err() {
            dst[start..].zeroize();
            dst.truncate(start);
            tracing::trace!("XAES-256-GCM open rejected: authentication failed");
            return Err(XaesError::AuthenticationFailed);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn test_aead() -> Xaes256GcmManual {
        Xaes256GcmManual::new(&[0x42u8; 32]).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_key_lengths() {
        for len in [0usize, 16, 31, 33] {
            let err = Xaes256GcmManual::new(&vec![0u8; len]).unwrap_err();
            assert_eq!(
                err,
                XaesError::InvalidKeyLength {
                    expected: 32,
                    actual: len
                }
            );
        }
    }

    #[test]
    fn test_sizes() {
        let aead = test_aead();
        assert_eq!(aead.nonce_size(), 24);
        assert_eq!(aead.overhead(), 16);
    }

    #[test]
    fn test_roundtrip() {
        let aead = test_aead();
        let nonce = [0x07u8; NONCE_SIZE];
        let plaintext = b"Hello, XAES!";
        let aad = b"additional data";

        let ciphertext = aead.seal(&nonce, plaintext, aad);
        assert_eq!(ciphertext.len(), plaintext.len() + TAG_SIZE);

        let decrypted = aead.open(&nonce, &ciphertext, aad).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_roundtrip_empty() {
        let aead = test_aead();
        let nonce = [0u8; NONCE_SIZE];

        let ciphertext = aead.seal(&nonce, b"", b"");
        assert_eq!(ciphertext.len(), TAG_SIZE);
        assert_eq!(aead.open(&nonce, &ciphertext, b"").unwrap(), b"");
    }

    #[test]
    fn test_seal_into_appends() {
        let aead = test_aead();
        let nonce = [0x01u8; NONCE_SIZE];

        let mut dst = b"prefix:".to_vec();
        aead.seal_into(&mut dst, &nonce, b"payload", b"");

        assert_eq!(&dst[..7], b"prefix:");
        assert_eq!(&dst[7..], aead.seal(&nonce, b"payload", b"").as_slice());
    }

    #[test]
    fn test_open_into_appends() {
        let aead = test_aead();
        let nonce = [0x01u8; NONCE_SIZE];
        let ciphertext = aead.seal(&nonce, b"payload", b"");

        let mut dst = b"prefix:".to_vec();
        aead.open_into(&mut dst, &nonce, &ciphertext, b"").unwrap();
        assert_eq!(dst, b"prefix:payload");
    }

    #[test]
    fn test_failed_open_leaves_dst_untouched() {
        let aead = test_aead();
        let nonce = [0x01u8; NONCE_SIZE];
        let mut ciphertext = aead.seal(&nonce, b"payload", b"");
        ciphertext[0] ^= 0x01;

        let mut dst = b"prefix:".to_vec();
        let err = aead.open_into(&mut dst, &nonce, &ciphertext, b"").unwrap_err();
        assert_eq!(err, XaesError::AuthenticationFailed);
        assert_eq!(dst, b"prefix:");
    }

    #[test]
    fn test_nonce_halves_both_matter() {
        let aead = test_aead();
        let nonce = [0u8; NONCE_SIZE];
        let ciphertext = aead.seal(&nonce, b"secret", b"");

        // First half feeds the KDF, second half is the GCM nonce
        for index in [0, GCM_NONCE_SIZE - 1, GCM_NONCE_SIZE, NONCE_SIZE - 1] {
            let mut other = nonce;
            other[index] ^= 0x80;
            assert_eq!(
                aead.open(&other, &ciphertext, b"").unwrap_err(),
                XaesError::AuthenticationFailed
            );
        }
    }

    #[test]
    fn test_wrong_aad_fails() {
        let aead = test_aead();
        let nonce = [0x09u8; NONCE_SIZE];
        let ciphertext = aead.seal(&nonce, b"secret", b"aad1");

        assert_eq!(
            aead.open(&nonce, &ciphertext, b"aad2").unwrap_err(),
            XaesError::AuthenticationFailed
        );
    }

    #[test]
    fn test_wrong_key_fails() {
        let aead1 = Xaes256GcmManual::new(&[1u8; 32]).unwrap();
        let aead2 = Xaes256GcmManual::new(&[2u8; 32]).unwrap();
        let nonce = [0u8; NONCE_SIZE];

        let ciphertext = aead1.seal(&nonce, b"secret", b"");
        assert!(aead2.open(&nonce, &ciphertext, b"").is_err());
    }

    #[test]
    fn test_open_short_ciphertext() {
        let aead = test_aead();
        let nonce = [0u8; NONCE_SIZE];

        for len in 0..TAG_SIZE {
            assert_eq!(
                aead.open(&nonce, &vec![0u8; len], b"").unwrap_err(),
                XaesError::AuthenticationFailed
            );
        }
    }

    #[test]
    fn test_open_bad_nonce_length_is_recoverable() {
        let aead = test_aead();
        let ciphertext = aead.seal(&[0u8; NONCE_SIZE], b"secret", b"");

        for len in [0usize, 12, 23, 25, 32] {
            assert_eq!(
                aead.open(&vec![0u8; len], &ciphertext, b"").unwrap_err(),
                XaesError::BadNonceLength {
                    expected: NONCE_SIZE,
                    actual: len
                }
            );
        }
    }

    #[test]
    #[should_panic(expected = "xaes256gcm: bad nonce length")]
    fn test_seal_panics_on_short_nonce() {
        let aead = test_aead();
        let _ = aead.seal(&[0u8; 12], b"secret", b"");
    }

    #[test]
    fn test_seal_panics_on_every_bad_nonce_length() {
        let aead = test_aead();

        for len in [0usize, 12, 23, 25, 32] {
            let nonce = vec![0u8; len];
            let result = catch_unwind(AssertUnwindSafe(|| aead.seal(&nonce, b"secret", b"")));
            assert!(result.is_err(), "nonce length {len} must panic");
        }
    }

    #[test]
    fn test_split_nonce() {
        let nonce: [u8; NONCE_SIZE] = core::array::from_fn(|i| i as u8);
        let (prefix, gcm_nonce) = split_nonce(&nonce).unwrap();
        assert_eq!(prefix, &nonce[..12]);
        assert_eq!(gcm_nonce, &nonce[12..]);

        assert!(split_nonce(&nonce[..23]).is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        let aead = std::sync::Arc::new(test_aead());

        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let aead = std::sync::Arc::clone(&aead);
                std::thread::spawn(move || {
                    let nonce = [i; NONCE_SIZE];
                    let ciphertext = aead.seal(&nonce, &[i; 64], b"thread");
                    aead.open(&nonce, &ciphertext, b"thread").unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), vec![i as u8; 64]);
        }
    }
}
