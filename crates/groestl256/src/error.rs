use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported while hashing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The padded length overflows the address space or the 64-bit block counter.
    #[error("message of {len} bytes is too long to pad")]
    MessageTooLong {
        /// Message length in bytes.
        len: usize,
    },
    /// The padded buffer could not be allocated.
    #[error("cannot allocate padded message buffer")]
    ResourceExhausted(#[from] TryReserveError),
}
