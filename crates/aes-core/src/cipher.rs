//! AES-128 key schedule and block encryption.

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::sbox;
use crate::state::State;

const ROUNDS: usize = 10;
const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; 44];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 4..44 {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[(i / 4) - 1]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (word_idx, bytes) in round_key.chunks_exact_mut(4).enumerate() {
            bytes.copy_from_slice(&w[round * 4 + word_idx].to_be_bytes());
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state.to_block()
}

/// Encrypts `plaintext` under `key`, expanding the key for this call only.
pub fn encrypt(plaintext: &Block, key: &Aes128Key) -> Block {
    encrypt_block(plaintext, &expand_key(key))
}

/// Out-parameter form of [`encrypt`].
pub fn encrypt_into(ciphertext: &mut Block, plaintext: &Block, key: &Aes128Key) {
    *ciphertext = encrypt(plaintext, key);
}

/// AES-128 with its key schedule derived once.
#[derive(Clone, Debug)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` and returns a ready cipher.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Exposes the expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Aes128Key;
    use rand::{Rng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    fn block_from_hex(s: &str) -> Block {
        let mut out = [0u8; 16];
        hex::decode_to_slice(s, &mut out).expect("valid hex block");
        out
    }

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let ct = encrypt_block(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn all_zero_key_and_block() {
        let ct = encrypt(&[0u8; 16], &Aes128Key::from([0u8; 16]));
        assert_eq!(ct, block_from_hex("66e94bd4ef8a2c3b884cfa59ca342b2e"));
    }

    #[test]
    fn fips_appendix_b_and_sp800_38a() {
        let key = Aes128Key::from(block_from_hex("2b7e151628aed2a6abf7158809cf4f3c"));
        let cipher = Aes128::new(&key);
        assert_eq!(
            cipher.encrypt_block(&block_from_hex("3243f6a8885a308d313198a2e0370734")),
            block_from_hex("3925841d02dc09fbdc118597196a0b32")
        );
        assert_eq!(
            cipher.encrypt_block(&block_from_hex("6bc1bee22e409f96e93d7e117393172a")),
            block_from_hex("3ad77bb40d7a3660a89ecaf32466ef97")
        );
    }

    #[test]
    fn key_schedule_matches_fips_appendix_a() {
        let key = Aes128Key::from(block_from_hex("2b7e151628aed2a6abf7158809cf4f3c"));
        let rks = expand_key(&key);
        assert_eq!(rks.get(0), &key.0);
        assert_eq!(rks.get(1), &block_from_hex("a0fafe1788542cb123a339392a6c7605"));
        assert_eq!(rks.get(10), &block_from_hex("d014f9a8c9ee2589e13f0cc8b6630ca6"));

        let flat = rks.to_bytes();
        assert_eq!(flat.len(), 176);
        for round in 0..11 {
            assert_eq!(&flat[16 * round..16 * round + 16], rks.get(round));
        }
    }

    #[test]
    fn encrypt_into_matches_encrypt() {
        let key = Aes128Key::from(NIST_KEY);
        let mut out = [0u8; 16];
        encrypt_into(&mut out, &NIST_PLAIN, &key);
        assert_eq!(out, NIST_CIPHER);
    }

    fn flipped_bits(a: &Block, b: &Block) -> u32 {
        a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum()
    }

    #[test]
    fn single_bit_flip_avalanches() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let samples = 200u32;
        let mut plain_total = 0u32;
        let mut key_total = 0u32;
        for _ in 0..samples {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let bit = rng.gen_range(0..128usize);

            let base = encrypt(&block, &Aes128Key::from(key_bytes));

            let mut block_flip = block;
            block_flip[bit / 8] ^= 1 << (bit % 8);
            plain_total += flipped_bits(&base, &encrypt(&block_flip, &Aes128Key::from(key_bytes)));

            let mut key_flip = key_bytes;
            key_flip[bit / 8] ^= 1 << (bit % 8);
            key_total += flipped_bits(&base, &encrypt(&block, &Aes128Key::from(key_flip)));
        }
        // Expect ~64 of 128 bits on average.
        for total in [plain_total, key_total] {
            let mean = f64::from(total) / f64::from(samples);
            assert!((56.0..72.0).contains(&mean), "mean flipped bits {mean}");
        }
    }
}
