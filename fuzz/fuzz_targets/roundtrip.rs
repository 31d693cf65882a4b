//! Fuzz target for seal/open round trips
//!
//! Sealing arbitrary data must always open again under the same nonce and
//! associated data, and must fail under tampered associated data.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xaes_256_gcm::{Aead, Xaes256Gcm, Xaes256GcmManual};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    key: [u8; 32],
    nonce: [u8; 24],
    plaintext: Vec<u8>,
    aad: Vec<u8>,
}

fuzz_target!(|input: RoundtripInput| {
    let Ok(manual) = Xaes256GcmManual::new(&input.key) else {
        return;
    };

    let ciphertext = manual.seal(&input.nonce, &input.plaintext, &input.aad);
    assert_eq!(ciphertext.len(), input.plaintext.len() + manual.overhead());
    let opened = manual.open(&input.nonce, &ciphertext, &input.aad);
    assert_eq!(opened.as_deref(), Ok(input.plaintext.as_slice()));

    let mut other_aad = input.aad.clone();
    other_aad.push(0);
    assert!(manual.open(&input.nonce, &ciphertext, &other_aad).is_err());

    let Ok(auto) = Xaes256Gcm::new(&input.key) else {
        return;
    };
    let sealed = auto.seal(&[], &input.plaintext, &input.aad);
    assert_eq!(sealed.len(), input.plaintext.len() + auto.overhead());
    let opened = auto.open(&[], &sealed, &input.aad);
    assert_eq!(opened.as_deref(), Ok(input.plaintext.as_slice()));
});
