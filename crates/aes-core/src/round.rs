//! AES round transformations.

use crate::block::Block;
use crate::gf::{mul3, xtime};
use crate::sbox::sbox;
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for row in state.0.iter_mut() {
        for byte in row.iter_mut() {
            *byte = sbox(*byte);
        }
    }
}

/// Performs ShiftRows in place: row `i` rotates left by `i` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (i, row) in state.0.iter_mut().enumerate().skip(1) {
        row.rotate_left(i);
    }
}

fn mix_single_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        xtime(a0) ^ mul3(a1) ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ mul3(a2) ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ mul3(a3),
        mul3(a0) ^ a1 ^ a2 ^ xtime(a3),
    ]
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = mix_single_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state. The key is read column-major.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    for (i, row) in state.0.iter_mut().enumerate() {
        for (j, byte) in row.iter_mut().enumerate() {
            *byte ^= round_key[i + 4 * j];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_single_column_known_answers() {
        assert_eq!(mix_single_column([0xdb, 0x13, 0x53, 0x45]), [0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(mix_single_column([0xf2, 0x0a, 0x22, 0x5c]), [0x9f, 0xdc, 0x58, 0x9d]);
        assert_eq!(mix_single_column([0x01; 4]), [0x01; 4]);
        assert_eq!(mix_single_column([0xc6; 4]), [0xc6; 4]);
        assert_eq!(mix_single_column([0xd4, 0xd4, 0xd4, 0xd5]), [0xd5, 0xd5, 0xd7, 0xd6]);
    }

    #[test]
    fn shift_rows_leaves_row_zero() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let mut state = State::from_block(&block);
        shift_rows(&mut state);
        assert_eq!(state.0[0], [0, 4, 8, 12]);
        assert_eq!(state.0[1], [5, 9, 13, 1]);
        assert_eq!(state.0[2], [10, 14, 2, 6]);
        assert_eq!(state.0[3], [15, 3, 7, 11]);
        // Flat layout matches the classic index permutation.
        assert_eq!(
            state.to_block(),
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn add_round_key_twice_is_identity() {
        let block: Block = core::array::from_fn(|i| (i as u8) * 7);
        let key: Block = core::array::from_fn(|i| 0xa5 ^ i as u8);
        let mut state = State::from_block(&block);
        add_round_key(&mut state, &key);
        assert_eq!(state.to_block(), crate::block::xor(&block, &key));
        add_round_key(&mut state, &key);
        assert_eq!(state.to_block(), block);
    }

    #[test]
    fn fips_first_round_intermediate_values() {
        // FIPS-197 Appendix B, round 1: start -> after MixColumns.
        let start: Block = [
            0x19, 0x3d, 0xe3, 0xbe, 0xa0, 0xf4, 0xe2, 0x2b, 0x9a, 0xc6, 0x8d, 0x2a, 0xe9, 0xf8,
            0x48, 0x08,
        ];
        let after_mix: Block = [
            0x04, 0x66, 0x81, 0xe5, 0xe0, 0xcb, 0x19, 0x9a, 0x48, 0xf8, 0xd3, 0x7a, 0x28, 0x06,
            0x26, 0x4c,
        ];
        let mut state = State::from_block(&start);
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        assert_eq!(state.to_block(), after_mix);
    }
}
