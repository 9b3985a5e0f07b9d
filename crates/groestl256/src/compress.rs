//! Compression function and output transformation.

use crate::matrix::Matrix;
use crate::permutation::Permutation;
use crate::{Digest, BLOCK_LEN, DIGEST_LEN};

/// Chaining value before the first block: the 256-bit output size,
/// big-endian in the last two bytes (`0x01 0x00`).
pub fn initial_value() -> Matrix {
    let mut iv = Matrix::default();
    iv.0[6][7] = 0x01;
    iv
}

/// `f(h, m) = P(h ^ m) ^ Q(m) ^ h`.
pub fn compress(h: &Matrix, block: &[u8; BLOCK_LEN]) -> Matrix {
    let m = Matrix::from_bytes(block);

    let mut p = h.xor(&m);
    Permutation::P.apply(&mut p);

    let mut q = m;
    Permutation::Q.apply(&mut q);

    p.xor(&q).xor(h)
}

/// `trunc(P(h) ^ h)`: the last four columns, column-major.
pub fn output_transform(h: &Matrix) -> Digest {
    let mut p = *h;
    Permutation::P.apply(&mut p);
    let full = p.xor(h).to_bytes();

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&full[BLOCK_LEN - DIGEST_LEN..]);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iv_encodes_output_size() {
        let bytes = initial_value().to_bytes();
        assert_eq!(bytes[62], 0x01);
        assert_eq!(bytes.iter().filter(|&&b| b != 0).count(), 1);
    }

    #[test]
    fn compress_depends_on_both_inputs() {
        let block = [0x61u8; BLOCK_LEN];
        let iv = initial_value();
        let once = compress(&iv, &block);
        assert_ne!(once, iv);
        assert_ne!(compress(&once, &block), once);
        assert_ne!(compress(&Matrix::default(), &block), once);
    }

    #[test]
    fn output_transform_keeps_high_half() {
        let h = compress(&initial_value(), &[0u8; BLOCK_LEN]);
        let mut p = h;
        Permutation::P.apply(&mut p);
        let full = p.xor(&h).to_bytes();
        assert_eq!(output_transform(&h)[..], full[32..]);
    }
}
