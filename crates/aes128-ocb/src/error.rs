use thiserror::Error;

/// Errors reported by the OCB mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OcbError {
    /// Plaintext is empty or not a whole number of 16-byte blocks.
    #[error("plaintext length {len} is not a positive multiple of 16 bytes")]
    InvalidLength {
        /// Offending length in bytes.
        len: usize,
    },
    /// Output buffer cannot hold exactly the ciphertext and tag.
    #[error("output buffer is {actual} bytes, expected {expected}")]
    OutputLength {
        /// Required length (`plaintext + 16`).
        expected: usize,
        /// Length supplied by the caller.
        actual: usize,
    },
}
