//! RustCrypto `aead` trait implementations for [`Xaes256GcmManual`].
//!
//! With `AeadInPlace` implemented, the blanket `aead::Aead` impl makes the
//! manual-nonce type usable anywhere a generic RustCrypto AEAD is accepted.

use aes_gcm::aead::consts::{U0, U16, U24, U32};
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{self, AeadCore, AeadInPlace, KeyInit, KeySizeUser};
use zeroize::Zeroize;

use super::manual::{Xaes256GcmManual, split_nonce};
use crate::{KEY_SIZE, Key};

impl KeySizeUser for Xaes256GcmManual {
    type KeySize = U32;
}

impl KeyInit for Xaes256GcmManual {
    fn new(key: &aead::Key<Self>) -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(key);
        let key = Key::new(bytes);
        bytes.zeroize();
        Self::from_key(&key)
    }
}

impl AeadCore for Xaes256GcmManual {
    type NonceSize = U24;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl AeadInPlace for Xaes256GcmManual {
    fn encrypt_in_place_detached(
        &self,
        nonce: &aead::Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<aead::Tag<Self>> {
        let (prefix, gcm_nonce) = split_nonce(nonce).ok_or(aead::Error)?;
        self.keyed_gcm(prefix).encrypt_in_place_detached(
            GenericArray::from_slice(gcm_nonce),
            associated_data,
            buffer,
        )
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &aead::Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &aead::Tag<Self>,
    ) -> aead::Result<()> {
        let (prefix, gcm_nonce) = split_nonce(nonce).ok_or(aead::Error)?;
        self.keyed_gcm(prefix)
            .decrypt_in_place_detached(
                GenericArray::from_slice(gcm_nonce),
                associated_data,
                buffer,
                tag,
            )
            .inspect_err(|_| tracing::trace!("XAES-256-GCM open rejected: authentication failed"))
    }
}

#[cfg(test)]
mod tests {
    use aes_gcm::aead::{Aead as _, Payload};

    use super::*;
    use crate::Aead as _;

    #[test]
    fn test_key_init_matches_new() {
        let key = [0x5Cu8; KEY_SIZE];
        let via_trait = <Xaes256GcmManual as KeyInit>::new(GenericArray::from_slice(&key));
        let via_slice = Xaes256GcmManual::new(&key).unwrap();

        let nonce = [0x11u8; 24];
        assert_eq!(
            via_trait.seal(&nonce, b"msg", b"ad"),
            via_slice.seal(&nonce, b"msg", b"ad")
        );
    }

    #[test]
    fn test_generic_aead_matches_seal() {
        let aead = Xaes256GcmManual::new(&[0x01u8; KEY_SIZE]).unwrap();
        let nonce = GenericArray::clone_from_slice(b"ABCDEFGHIJKLMNOPQRSTUVWX");

        let ciphertext = aead
            .encrypt(
                &nonce,
                Payload {
                    msg: b"XAES-256-GCM",
                    aad: b"",
                },
            )
            .unwrap();
        assert_eq!(ciphertext, aead.seal(&nonce, b"XAES-256-GCM", b""));

        let plaintext = aead
            .decrypt(
                &nonce,
                Payload {
                    msg: &ciphertext,
                    aad: b"",
                },
            )
            .unwrap();
        assert_eq!(plaintext, b"XAES-256-GCM");
    }

    #[test]
    fn test_in_place_detached_rejects_bad_tag() {
        let aead = Xaes256GcmManual::new(&[0x02u8; KEY_SIZE]).unwrap();
        let nonce = GenericArray::clone_from_slice(&[0u8; 24]);

        let mut buffer = b"detached".to_vec();
        let mut tag = aead
            .encrypt_in_place_detached(&nonce, b"", &mut buffer)
            .unwrap();
        tag[0] ^= 0x01;

        assert!(
            aead.decrypt_in_place_detached(&nonce, b"", &mut buffer, &tag)
                .is_err()
        );
    }
}
