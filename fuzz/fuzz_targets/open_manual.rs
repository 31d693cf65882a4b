//! Fuzz target for manual-nonce open
//!
//! Open handles untrusted input: any nonce length, any ciphertext, any
//! associated data must yield an error or plaintext, never a panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xaes_256_gcm::{Aead, NONCE_SIZE, Xaes256GcmManual, XaesError};

#[derive(Debug, Arbitrary)]
struct OpenInput {
    key: [u8; 32],
    nonce: Vec<u8>,
    ciphertext: Vec<u8>,
    aad: Vec<u8>,
    prefix: Vec<u8>,
}

fuzz_target!(|input: OpenInput| {
    let Ok(aead) = Xaes256GcmManual::new(&input.key) else {
        return;
    };

    let mut dst = input.prefix.clone();
    match aead.open_into(&mut dst, &input.nonce, &input.ciphertext, &input.aad) {
        Ok(()) => assert!(dst.starts_with(&input.prefix)),
        Err(XaesError::BadNonceLength { actual, .. }) => {
            assert_ne!(actual, NONCE_SIZE);
            assert_eq!(dst, input.prefix);
        }
        Err(_) => assert_eq!(dst, input.prefix),
    }
});
