//! Offset material: GF(2^128) doubling and the `L` table.

use aes_core::{Aes128, Block};

/// Doubles a 16-byte string in GF(2^128) modulo `x^128 + x^7 + x^2 + x + 1`.
///
/// The string is read big-endian: shift left one bit and, if a bit fell off
/// the top, fold it back in as `0x87` on the last byte.
pub fn double(block: &Block) -> Block {
    let value = u128::from_be_bytes(*block);
    let carry = value >> 127;
    ((value << 1) ^ (carry * 0x87)).to_be_bytes()
}

/// Number of trailing zero bits of a 1-based block index.
#[inline]
pub fn ntz(index: usize) -> usize {
    index.trailing_zeros() as usize
}

/// Position of the highest set bit, i.e. `floor(log2(value))`. Zero maps to zero.
#[inline]
pub fn msb(value: usize) -> usize {
    value.checked_ilog2().unwrap_or(0) as usize
}

/// Key-dependent masks for one message.
///
/// Holds `L_*`, `L_$` and `L_0 ..= L_msb(m)`, enough to serve `L[ntz(i)]` for
/// every block index `1 <= i <= m`.
#[derive(Clone, Debug)]
pub struct LTable {
    star: Block,
    dollar: Block,
    l: Vec<Block>,
}

impl LTable {
    /// Builds the table for a message of `blocks` full blocks.
    pub fn new(cipher: &Aes128, blocks: usize) -> Self {
        let star = cipher.encrypt_block(&[0u8; 16]);
        let dollar = double(&star);

        let len = msb(blocks) + 1;
        let mut l = Vec::with_capacity(len);
        let mut current = double(&dollar);
        for _ in 0..len {
            l.push(current);
            current = double(&current);
        }

        Self { star, dollar, l }
    }

    /// `L_* = E_K(0^128)`.
    pub fn star(&self) -> &Block {
        &self.star
    }

    /// `L_$ = double(L_*)`, folded into the tag.
    pub fn dollar(&self) -> &Block {
        &self.dollar
    }

    /// `L_j`, if the table was sized to include it.
    pub fn l(&self, j: usize) -> Option<&Block> {
        self.l.get(j)
    }

    /// Number of `L_j` entries.
    pub fn len(&self) -> usize {
        self.l.len()
    }

    /// Always false: a table holds at least `L_0`.
    pub fn is_empty(&self) -> bool {
        self.l.is_empty()
    }

    /// Mask XORed into the running offset for block `index` (1-based).
    ///
    /// Panics if `index` is zero or exceeds the message the table was built for.
    #[inline]
    pub(crate) fn for_block(&self, index: usize) -> &Block {
        &self.l[ntz(index)]
    }
}
