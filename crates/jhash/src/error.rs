//! Error types for hashing operations

use thiserror::Error;

/// Errors surfaced by the checked hashing entry points
#[derive(Debug, Error)]
pub enum HashError {
    /// Key length cannot be represented in the 32-bit length value the
    /// construction folds into its initial state
    #[error("key length {actual} exceeds the representable maximum of {max} bytes", max = u32::MAX)]
    KeyTooLong {
        /// Length of the rejected key in bytes
        actual: usize,
    },
}
