//! Grøstl-256.
//!
//! The message is padded into 64-byte blocks, each block is folded into an
//! 8×8 byte chaining value by the compression function
//! `f(h, m) = P(h ^ m) ^ Q(m) ^ h`, and the final value passes through the
//! output transformation `trunc(P(h) ^ h)`. P and Q are AES-like 10-round
//! permutations that reuse the AES S-box and GF(2^8) doubling from `aes-core`.
//!
//! ```
//! let digest = groestl256::hash(b"")?;
//! assert_eq!(digest.len(), 32);
//! # Ok::<(), groestl256::HashError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compress;
mod error;
mod matrix;
mod pad;
mod permutation;

use tracing::debug;

pub use crate::compress::{compress, initial_value, output_transform};
pub use crate::error::HashError;
pub use crate::matrix::Matrix;
pub use crate::pad::{block_count, pad};
pub use crate::permutation::{Permutation, ROUNDS};

/// Size of a message block and of the chaining value in bytes.
pub const BLOCK_LEN: usize = 64;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// A Grøstl-256 digest.
pub type Digest = [u8; DIGEST_LEN];

/// Hashes `message`.
///
/// Fails only if the padded copy of the message cannot be sized or allocated.
pub fn hash(message: &[u8]) -> Result<Digest, HashError> {
    let chaining = {
        let padded = pad(message)?;
        debug!(
            len = message.len(),
            blocks = padded.len() / BLOCK_LEN,
            "groestl256 compress"
        );
        padded
            .chunks_exact(BLOCK_LEN)
            .fold(initial_value(), |h, chunk| {
                let mut block = [0u8; BLOCK_LEN];
                block.copy_from_slice(chunk);
                compress(&h, &block)
            })
    };
    Ok(output_transform(&chaining))
}

/// Out-parameter form of [`hash`].
pub fn hash_into(digest: &mut Digest, message: &[u8]) -> Result<(), HashError> {
    *digest = hash(message)?;
    Ok(())
}
