//! Block representation helpers.

/// Size of an AES block in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_LEN];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Returns `a ^ b`.
#[inline]
pub fn xor(a: &Block, b: &Block) -> Block {
    let mut out = *a;
    xor_in_place(&mut out, b);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_self_inverse() {
        let a: Block = core::array::from_fn(|i| i as u8);
        let b: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(37) ^ 0x5a);
        assert_eq!(xor(&xor(&a, &b), &b), a);
        assert_eq!(xor(&a, &a), [0u8; 16]);
    }
}
