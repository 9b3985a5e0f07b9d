//! OCB authenticated encryption over AES-128.
//!
//! Only the encryption direction is provided: it needs the forward block
//! cipher alone. Messages are whole 16-byte blocks, the nonce is 96 bits, the
//! tag is 128 bits and there is no associated data, which makes the output
//! byte-compatible with RFC 7253 for that subset.
//!
//! ```
//! use aes_core::Aes128Key;
//!
//! let key = Aes128Key::from([0u8; 16]);
//! let nonce = [0u8; 12];
//! let sealed = aes128_ocb::encrypt(&key, &nonce, &[0u8; 32])?;
//! assert_eq!(sealed.len(), 32 + aes128_ocb::TAG_LEN);
//! # Ok::<(), aes128_ocb::OcbError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod mode;
mod nonce;
mod offsets;

pub use crate::error::OcbError;
pub use crate::mode::{encrypt, encrypt_into, Aes128Ocb};
pub use crate::nonce::initial_offset;
pub use crate::offsets::{double, msb, ntz, LTable};

/// Nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// 96-bit nonce.
pub type Nonce = [u8; NONCE_LEN];
