//! The P and Q permutations.

use aes_core::gf::xtime;
use aes_core::sbox;

use crate::matrix::Matrix;

/// Rounds per permutation for the 512-bit state.
pub const ROUNDS: u8 = 10;

const Q_LAST_ROW: [u8; 8] = [0xff, 0xef, 0xdf, 0xcf, 0xbf, 0xaf, 0x9f, 0x8f];
const P_SHIFTS: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
const Q_SHIFTS: [usize; 8] = [1, 3, 5, 7, 0, 2, 4, 6];

/// Which of the two permutations to run. They differ only in round constants
/// and ShiftBytes amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permutation {
    /// Applied to `h ^ m` and in the output transformation.
    P,
    /// Applied to the message block alone.
    Q,
}

impl Permutation {
    /// Left-rotation amount for each row.
    pub const fn shifts(self) -> [usize; 8] {
        match self {
            Self::P => P_SHIFTS,
            Self::Q => Q_SHIFTS,
        }
    }

    /// Runs all rounds over `state` in place.
    pub fn apply(self, state: &mut Matrix) {
        for round in 0..ROUNDS {
            self.add_round_constant(state, round);
            sub_bytes(state);
            shift_bytes(state, self.shifts());
            mix_bytes(state);
        }
    }

    fn add_round_constant(self, state: &mut Matrix, round: u8) {
        match self {
            Self::P => {
                for (col, cell) in state.0[0].iter_mut().enumerate() {
                    *cell ^= ((col as u8) << 4) ^ round;
                }
            }
            Self::Q => {
                for row in state.0[..7].iter_mut() {
                    for cell in row.iter_mut() {
                        *cell ^= 0xff;
                    }
                }
                for (cell, constant) in state.0[7].iter_mut().zip(Q_LAST_ROW) {
                    *cell ^= constant ^ round;
                }
            }
        }
    }
}

fn sub_bytes(state: &mut Matrix) {
    for row in state.0.iter_mut() {
        for cell in row.iter_mut() {
            *cell = sbox(*cell);
        }
    }
}

fn shift_bytes(state: &mut Matrix, shifts: [usize; 8]) {
    for (row, shift) in state.0.iter_mut().zip(shifts) {
        row.rotate_left(shift);
    }
}

/// Multiplies every column by `circ(02, 02, 03, 04, 05, 03, 05, 07)`.
fn mix_bytes(state: &mut Matrix) {
    for col in 0..8 {
        let a: [u8; 8] = core::array::from_fn(|row| state.0[row][col]);
        let x2 = a.map(xtime);
        let x4 = x2.map(xtime);
        let times = |k: usize, coefficient: u8| -> u8 {
            let k = k % 8;
            match coefficient {
                2 => x2[k],
                3 => x2[k] ^ a[k],
                4 => x4[k],
                5 => x4[k] ^ a[k],
                _ => x4[k] ^ x2[k] ^ a[k],
            }
        };
        for (row, cells) in state.0.iter_mut().enumerate() {
            cells[col] = times(row, 2)
                ^ times(row + 1, 2)
                ^ times(row + 2, 3)
                ^ times(row + 3, 4)
                ^ times(row + 4, 5)
                ^ times(row + 5, 3)
                ^ times(row + 6, 5)
                ^ times(row + 7, 7);
        }
    }
}
