//! OCB encryption and tag generation.

use aes_core::{xor, xor_in_place, Aes128, Aes128Key, Block, BLOCK_LEN};
use tracing::{debug, trace};

use crate::error::OcbError;
use crate::nonce::initial_offset;
use crate::offsets::LTable;
use crate::{Nonce, TAG_LEN};

/// OCB-AES-128 keyed once, usable for many messages.
///
/// Every message sealed under the same key needs a fresh nonce; reuse is not
/// detected.
#[derive(Clone, Debug)]
pub struct Aes128Ocb {
    cipher: Aes128,
}

impl Aes128Ocb {
    /// Expands `key` for use by every subsequent call.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            cipher: Aes128::new(key),
        }
    }

    /// Encrypts `plaintext` and returns `ciphertext || tag`.
    pub fn encrypt(&self, nonce: &Nonce, plaintext: &[u8]) -> Result<Vec<u8>, OcbError> {
        let blocks = whole_blocks(plaintext.len())?;
        let mut output = vec![0u8; plaintext.len() + TAG_LEN];
        self.seal(&mut output, nonce, plaintext, blocks);
        Ok(output)
    }

    /// Encrypts into a caller-provided buffer of exactly `(block_count + 1) * 16` bytes.
    pub fn encrypt_into(
        &self,
        output: &mut [u8],
        nonce: &Nonce,
        plaintext: &[u8],
        block_count: usize,
    ) -> Result<(), OcbError> {
        let blocks = whole_blocks(plaintext.len())?;
        if blocks != block_count {
            return Err(OcbError::InvalidLength {
                len: plaintext.len(),
            });
        }
        let expected = plaintext.len() + TAG_LEN;
        if output.len() != expected {
            return Err(OcbError::OutputLength {
                expected,
                actual: output.len(),
            });
        }
        self.seal(output, nonce, plaintext, blocks);
        Ok(())
    }

    fn seal(&self, output: &mut [u8], nonce: &Nonce, plaintext: &[u8], blocks: usize) {
        debug!(blocks, "ocb seal");
        let table = LTable::new(&self.cipher, blocks);
        let mut offset = initial_offset(&self.cipher, nonce);
        let mut checksum: Block = [0u8; BLOCK_LEN];

        let (body, tag) = output.split_at_mut(plaintext.len());
        let pairs = plaintext
            .chunks_exact(BLOCK_LEN)
            .zip(body.chunks_exact_mut(BLOCK_LEN));
        for (index, (p_chunk, c_chunk)) in (1..).zip(pairs) {
            let mut p_block: Block = [0u8; BLOCK_LEN];
            p_block.copy_from_slice(p_chunk);

            xor_in_place(&mut offset, table.for_block(index));
            let encrypted = self.cipher.encrypt_block(&xor(&p_block, &offset));
            c_chunk.copy_from_slice(&xor(&encrypted, &offset));
            xor_in_place(&mut checksum, &p_block);
            trace!(index, "ocb block");
        }

        let mut tag_input = xor(&checksum, &offset);
        xor_in_place(&mut tag_input, table.dollar());
        tag.copy_from_slice(&self.cipher.encrypt_block(&tag_input));
    }
}

fn whole_blocks(len: usize) -> Result<usize, OcbError> {
    if len == 0 || len % BLOCK_LEN != 0 {
        return Err(OcbError::InvalidLength { len });
    }
    Ok(len / BLOCK_LEN)
}

/// One-shot encryption: `ciphertext || tag` for `plaintext` under `key` and `nonce`.
pub fn encrypt(key: &Aes128Key, nonce: &Nonce, plaintext: &[u8]) -> Result<Vec<u8>, OcbError> {
    Aes128Ocb::new(key).encrypt(nonce, plaintext)
}

/// One-shot encryption into `output`, which must be `(block_count + 1) * 16` bytes.
pub fn encrypt_into(
    output: &mut [u8],
    key: &Aes128Key,
    nonce: &Nonce,
    plaintext: &[u8],
    block_count: usize,
) -> Result<(), OcbError> {
    Aes128Ocb::new(key).encrypt_into(output, nonce, plaintext, block_count)
}
