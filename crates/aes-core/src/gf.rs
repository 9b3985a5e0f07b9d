//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the AES reduction polynomial.
pub const REDUCTION: u8 = 0x1b;

/// Multiplies by `x` (0x02).
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies by `x + 1` (0x03).
#[inline]
pub const fn mul3(byte: u8) -> u8 {
    xtime(byte) ^ byte
}

/// General product of two field elements.
pub fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}
