//! Message-key derivation.
//!
//! A two-block NIST SP 800-108r1 counter-mode KDF with AES-256-CMAC as the
//! PRF. Every input is a single block, so CMAC collapses to one AES call on
//! the block XORed with the doubling subkey `K1`:
//!
//! ```text
//! L  = AES-256(K, 0^128)
//! K1 = dbl(L)
//! Kx = AES-256(K, [0x00, 0x01, 'X', 0x00] || N1 ^ K1)
//!   || AES-256(K, [0x00, 0x02, 'X', 0x00] || N1 ^ K1)
//! ```

use aes::Aes256;
use aes::cipher::{BlockEncrypt, KeyInit};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constant_time::ct_xor;
use crate::{BLOCK_SIZE, GCM_NONCE_SIZE, KEY_SIZE, Key};

/// KDF label, fixed by the construction.
const LABEL: u8 = b'X';

/// GF(2^128) reduction constant for x^128 + x^7 + x^2 + x + 1.
const R_128: u8 = 0x87;

/// Multiply a block by x in GF(2^128) (the CMAC subkey "doubling").
///
/// Branch-free: the reduction is masked by the carried-out bit.
pub(crate) fn dbl(block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    let mut carry = 0u8;
    for i in (0..BLOCK_SIZE).rev() {
        out[i] = (block[i] << 1) | carry;
        carry = block[i] >> 7;
    }
    out[BLOCK_SIZE - 1] ^= carry * R_128;
    out
}

/// 256-bit per-message key. Lives for a single seal/open call.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct DerivedKey([u8; KEY_SIZE]);

impl DerivedKey {
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

/// Master-key state: the AES-256 key schedule and the subkey `K1`.
///
/// Both are fixed at construction and only read afterwards.
#[derive(Clone, ZeroizeOnDrop)]
pub(crate) struct MessageKdf {
    /// Zeroized by `aes` itself (`zeroize` feature)
    #[zeroize(skip)]
    cipher: Aes256,
    k1: [u8; BLOCK_SIZE],
}

impl MessageKdf {
    pub(crate) fn new(key: &Key) -> Self {
        let cipher = Aes256::new(key.as_bytes().into());

        let mut l = [0u8; BLOCK_SIZE];
        cipher.encrypt_block(aes::Block::from_mut_slice(&mut l));
        let k1 = dbl(&l);
        l.zeroize();

        Self { cipher, k1 }
    }

    /// Derive the message key for the first 12 bytes of a nonce.
    pub(crate) fn derive(&self, prefix: &[u8; GCM_NONCE_SIZE]) -> DerivedKey {
        let mut key = DerivedKey([0u8; KEY_SIZE]);
        let (first, second) = key.0.split_at_mut(BLOCK_SIZE);
        self.prf_block(1, prefix, first);
        self.prf_block(2, prefix, second);
        key
    }

    fn prf_block(&self, counter: u8, prefix: &[u8; GCM_NONCE_SIZE], out: &mut [u8]) {
        let mut input = [0u8; BLOCK_SIZE];
        input[..4].copy_from_slice(&[0x00, counter, LABEL, 0x00]);
        input[4..].copy_from_slice(prefix);

        ct_xor(&input, &self.k1, out);
        self.cipher.encrypt_block(aes::Block::from_mut_slice(out));
    }
}

impl std::fmt::Debug for MessageKdf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageKdf")
            .field("k1", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
