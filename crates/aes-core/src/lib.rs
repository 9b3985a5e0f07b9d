//! Reference AES-128 encryption shared by the OCB mode and the Grøstl hash.
//!
//! This crate follows FIPS-197 and provides:
//! - Key schedule for AES-128.
//! - Single-block encryption (the inverse cipher is deliberately absent).
//! - The AES S-box and GF(2^8) doubling helpers, which Grøstl reuses.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod gf;
mod key;
pub mod round;
mod sbox;
mod state;

pub use crate::block::{xor, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{encrypt, encrypt_block, encrypt_into, expand_key, Aes128};
pub use crate::key::{Aes128Key, RoundKeys, SCHEDULE_LEN};
pub use crate::sbox::{sbox, SBOX};
pub use crate::state::State;
