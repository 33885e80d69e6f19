//! piece_cipher - decode messages hidden in FEN-style chess boards
//!
//! A board string is scanned left to right. Pieces fold into an accumulator
//! (uppercase multiplies by the piece value, lowercase adds it), a digit after
//! a run of pieces emits one character, and a King emits the last character
//! and ends the message.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;
/// Board decoding modules (classifier, character map, scan state machine)
pub mod decoder;
/// Core data structures (pieces, decoded messages, telemetry)
pub mod models;
/// Sample boards and board-list helpers for the CLI and benchmarks
pub mod tools;

pub use decoder::board_decoder::BoardDecoder;
pub use decoder::classifier::{classify, is_piece};
pub use decoder::config::DecoderConfig;
pub use decoder::error::DecodeError;
pub use decoder::tables::{CHARACTER_MAP, CipherShift, map_accumulator};
pub use models::{Color, DecodeTelemetry, DecodedMessage, MessageStatus, PieceToken, Rank};

/// Decode a board with default settings
///
/// # Example
/// ```
/// let msg = piece_cipher::decode("P1q1N1n1/B1bQ1B2/BRNK4/8/8/8/8/8").unwrap();
/// assert_eq!(msg.text, "DIGHERE!");
/// assert!(msg.is_complete());
/// ```
pub fn decode(board: &str) -> Result<DecodedMessage, DecodeError> {
    BoardDecoder::new().decode(board)
}

/// Decode many boards in parallel with default settings
pub fn decode_batch<S>(boards: &[S]) -> Vec<Result<DecodedMessage, DecodeError>>
where
    S: AsRef<str> + Sync,
{
    BoardDecoder::new().decode_batch(boards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        let msg = decode("").unwrap();
        assert!(msg.text.is_empty());
        assert_eq!(msg.status, MessageStatus::Incomplete);
    }

    #[test]
    fn test_decode_batch_default() {
        let results = decode_batch(&["K", "P1"]);
        assert_eq!(results[0].as_ref().unwrap().text, "D");
        assert_eq!(results[1].as_ref().unwrap().status, MessageStatus::Incomplete);
    }
}
