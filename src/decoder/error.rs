use thiserror::Error;

/// Failures of a decode call
///
/// A missing King is not an error; it is reported through
/// [`MessageStatus::Incomplete`](crate::models::MessageStatus).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// An emission would overflow the output buffer
    #[error("decoded message exceeds capacity of {capacity} characters")]
    CapacityExceeded {
        /// Configured output capacity
        capacity: usize,
    },
    /// The board is longer than the configured input bound
    #[error("board is {len} bytes, limit is {max}")]
    InputTooLong {
        /// Board length in bytes
        len: usize,
        /// Configured input bound
        max: usize,
    },
}
