//! # XAES-256-GCM
//!
//! Extended-nonce authenticated encryption built from a NIST SP 800-108r1
//! counter-mode KDF and AES-256-GCM.
//!
//! A 24-byte nonce is split in two: the first 12 bytes select a fresh
//! 256-bit message key derived from the master key, the last 12 bytes are
//! the AES-256-GCM nonce under that key. Random 192-bit nonces can therefore
//! be used with a single long-lived key without tracking message counts.
//!
//! This crate provides:
//! - [`Xaes256GcmManual`]: caller-supplied 24-byte nonces
//! - [`Xaes256Gcm`]: random nonces generated and prepended automatically
//! - RustCrypto `aead` trait implementations for the manual-nonce type
//!
//! ## Ciphertext Layouts
//!
//! | Mode | Layout | Overhead |
//! |------|--------|----------|
//! | Manual | `ciphertext \|\| tag(16)` | 16 bytes |
//! | Automatic | `nonce(24) \|\| ciphertext \|\| tag(16)` | 40 bytes |
//!
//! ## Usage
//!
//! ```rust
//! use xaes_256_gcm::{Aead, Xaes256Gcm};
//!
//! let aead = Xaes256Gcm::new(&[0x42u8; 32]).expect("32-byte key");
//!
//! let sealed = aead.seal(&[], b"secret", b"header");
//! assert_eq!(sealed.len(), b"secret".len() + xaes_256_gcm::OVERHEAD);
//!
//! let opened = aead.open(&[], &sealed, b"header").expect("authentic");
//! assert_eq!(opened, b"secret");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aead;
pub mod constant_time;
pub mod error;
pub mod key;
pub mod random;

mod kdf;

pub use aead::{Aead, Xaes256Gcm, Xaes256GcmManual};
pub use error::XaesError;
pub use key::Key;

/// Master key size (32 bytes / 256 bits).
pub const KEY_SIZE: usize = 32;

/// Nonce size expected by [`Xaes256GcmManual`] (24 bytes / 192 bits).
pub const NONCE_SIZE: usize = 24;

/// Ciphertext expansion of [`Xaes256GcmManual`]: the GCM tag.
pub const OVERHEAD_WITH_MANUAL_NONCES: usize = 16;

/// Ciphertext expansion of [`Xaes256Gcm`]: the embedded nonce plus the GCM tag.
pub const OVERHEAD: usize = NONCE_SIZE + OVERHEAD_WITH_MANUAL_NONCES;

/// AES block size.
pub const BLOCK_SIZE: usize = 16;

/// Nonce size of the underlying AES-256-GCM instance.
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM authentication tag size.
pub const TAG_SIZE: usize = 16;
