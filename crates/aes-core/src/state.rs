//! The 4×4 AES state matrix.

use crate::block::Block;

/// AES state indexed `[row][column]`.
///
/// Blocks are loaded column-major: byte `i + 4 * j` of the block lands in
/// `state[i][j]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(pub [[u8; 4]; 4]);

impl State {
    /// Loads a block column-major.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = block[i + 4 * j];
            }
        }
        Self(rows)
    }

    /// Stores the state back into a block, column-major.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (i, row) in self.0.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                block[i + 4 * j] = cell;
            }
        }
        block
    }

    /// Returns column `col` top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    /// Overwrites column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, values: [u8; 4]) {
        for (row, value) in self.0.iter_mut().zip(values) {
            row[col] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_is_column_major() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let state = State::from_block(&block);
        assert_eq!(state.0[0], [0, 4, 8, 12]);
        assert_eq!(state.0[3], [3, 7, 11, 15]);
        assert_eq!(state.column(2), [8, 9, 10, 11]);
        assert_eq!(state.to_block(), block);
    }
}
