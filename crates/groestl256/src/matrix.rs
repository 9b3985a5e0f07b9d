//! The 8×8 byte state shared by P, Q and the chaining value.

use crate::BLOCK_LEN;

/// Byte matrix indexed `[row][column]`, serialised column-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Matrix(pub [[u8; 8]; 8]);

impl Matrix {
    /// Loads 64 bytes column-major: byte `8 * col + row` lands in `[row][col]`.
    pub fn from_bytes(bytes: &[u8; BLOCK_LEN]) -> Self {
        let mut rows = [[0u8; 8]; 8];
        for (row_idx, row) in rows.iter_mut().enumerate() {
            for (col, cell) in row.iter_mut().enumerate() {
                *cell = bytes[8 * col + row_idx];
            }
        }
        Self(rows)
    }

    /// Inverse of [`Matrix::from_bytes`].
    pub fn to_bytes(&self) -> [u8; BLOCK_LEN] {
        let mut out = [0u8; BLOCK_LEN];
        for (row_idx, row) in self.0.iter().enumerate() {
            for (col, &cell) in row.iter().enumerate() {
                out[8 * col + row_idx] = cell;
            }
        }
        out
    }

    /// Element-wise XOR.
    pub fn xor(&self, other: &Self) -> Self {
        let mut out = *self;
        for (row, other_row) in out.0.iter_mut().zip(other.0.iter()) {
            for (cell, &o) in row.iter_mut().zip(other_row.iter()) {
                *cell ^= o;
            }
        }
        out
    }
}
