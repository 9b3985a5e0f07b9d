//! Key types for AES-128.

use crate::block::{Block, BLOCK_LEN};

/// Length of the expanded AES-128 key schedule in bytes (11 round keys).
pub const SCHEDULE_LEN: usize = 11 * BLOCK_LEN;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Flat 176-byte schedule; round key `r` occupies `[16r, 16r + 16)`.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_LEN] {
        let mut out = [0u8; SCHEDULE_LEN];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_LEN).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}
