//! Message padding.

use crate::error::HashError;
use crate::BLOCK_LEN;

const MARKER: u8 = 0x80;
const COUNTER_LEN: usize = 8;

/// Number of 64-byte blocks in the padded form of a `len`-byte message.
///
/// Room is needed for the `0x80` marker and the 8-byte counter, so
/// `64k - 9` bytes fit in `k` blocks and `64k` bytes need `k + 1`.
pub fn block_count(len: usize) -> Result<u64, HashError> {
    let blocks = len
        .checked_add(1 + COUNTER_LEN + BLOCK_LEN - 1)
        .map(|n| n / BLOCK_LEN)
        .ok_or(HashError::MessageTooLong { len })?;
    u64::try_from(blocks).map_err(|_| HashError::MessageTooLong { len })
}

/// Returns `message || 0x80 || 0x00* || be64(block_count)`.
pub fn pad(message: &[u8]) -> Result<Vec<u8>, HashError> {
    let len = message.len();
    let blocks = block_count(len)?;
    let total = usize::try_from(blocks)
        .ok()
        .and_then(|b| b.checked_mul(BLOCK_LEN))
        .ok_or(HashError::MessageTooLong { len })?;

    let mut padded = Vec::new();
    padded.try_reserve_exact(total)?;
    padded.extend_from_slice(message);
    padded.push(MARKER);
    padded.resize(total - COUNTER_LEN, 0);
    padded.extend_from_slice(&blocks.to_be_bytes());
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_layout(len: usize, expected_blocks: u64) {
        let message: Vec<u8> = (0..len).map(|i| (i as u8) | 1).collect();
        let padded = pad(&message).expect("pad");
        assert_eq!(padded.len() as u64, expected_blocks * 64, "len {len}");
        assert_eq!(&padded[..len], &message[..]);
        assert_eq!(padded[len], 0x80);
        let tail = padded.len() - 8;
        assert!(padded[len + 1..tail].iter().all(|&b| b == 0), "len {len}");
        assert_eq!(padded[tail..], expected_blocks.to_be_bytes());
    }

    #[test]
    fn empty_message_is_one_block() {
        check_layout(0, 1);
        let padded = pad(&[]).expect("pad");
        let mut expected = [0u8; 64];
        expected[0] = 0x80;
        expected[63] = 0x01;
        assert_eq!(padded, expected);
    }

    #[test]
    fn boundary_lengths() {
        for k in 1..=4u64 {
            let k_bytes = (k as usize) * 64;
            check_layout(k_bytes - 9, k);
            check_layout(k_bytes - 8, k + 1);
            check_layout(k_bytes, k + 1);
        }
        check_layout(63, 2);
        check_layout(119, 2);
        check_layout(120, 3);
    }

    #[test]
    fn block_count_overflow_is_an_error() {
        assert_eq!(
            block_count(usize::MAX),
            Err(HashError::MessageTooLong { len: usize::MAX })
        );
        assert_eq!(block_count(0), Ok(1));
    }
}
