//! Fuzz target for automatic-nonce open
//!
//! Every failure must be the single authentication-failure category and
//! must leave the destination untouched.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xaes_256_gcm::{Aead, Xaes256Gcm, XaesError};

#[derive(Debug, Arbitrary)]
struct OpenInput {
    key: [u8; 32],
    nonce: Vec<u8>,
    sealed: Vec<u8>,
    aad: Vec<u8>,
}

fuzz_target!(|input: OpenInput| {
    let Ok(aead) = Xaes256Gcm::new(&input.key) else {
        return;
    };

    let mut dst = Vec::new();
    if let Err(err) = aead.open_into(&mut dst, &input.nonce, &input.sealed, &input.aad) {
        assert_eq!(err, XaesError::AuthenticationFailed);
        assert!(dst.is_empty());
    }
});
