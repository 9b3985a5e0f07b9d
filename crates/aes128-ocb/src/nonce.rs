//! Nonce-dependent initial offset.

use aes_core::{Aes128, Block};

use crate::Nonce;

/// Derives `Offset_0` from a 96-bit nonce.
///
/// The nonce is framed as `00 00 00 01 || nonce`. Its low six bits select a
/// bit position inside `Stretch = Ktop || (Ktop[0..8] ^ Ktop[1..9])`, where
/// `Ktop` encrypts the framed nonce with those six bits cleared.
pub fn initial_offset(cipher: &Aes128, nonce: &Nonce) -> Block {
    let mut framed = [0u8; 16];
    framed[3] = 0x01;
    framed[4..].copy_from_slice(nonce);

    let bottom = usize::from(framed[15] & 0x3f);
    let mut top = framed;
    top[15] &= 0xc0;

    let ktop = cipher.encrypt_block(&top);
    let mut stretch = [0u8; 24];
    stretch[..16].copy_from_slice(&ktop);
    for (i, byte) in stretch[16..].iter_mut().enumerate() {
        *byte = ktop[i] ^ ktop[i + 1];
    }

    shifted_window(&stretch, bottom)
}

/// First 128 bits of `stretch << shift` for `shift < 64`.
fn shifted_window(stretch: &[u8; 24], shift: usize) -> Block {
    let bytes = shift / 8;
    let bits = shift % 8;
    let mut out = [0u8; 16];
    for (i, byte) in out.iter_mut().enumerate() {
        let hi = stretch[i + bytes];
        *byte = if bits == 0 {
            hi
        } else {
            (hi << bits) | (stretch[i + bytes + 1] >> (8 - bits))
        };
    }
    out
}
