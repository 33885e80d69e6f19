/// Decoded message, completion status and scan counters
pub mod message;
/// Piece token, color and rank
pub mod piece;

pub use message::{DecodeTelemetry, DecodedMessage, MessageStatus};
pub use piece::{Color, PieceToken, Rank};
