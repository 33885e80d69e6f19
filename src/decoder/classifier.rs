//! Piece classifier
//!
//! Maps one board character to a [`PieceToken`] or to "not a piece".
//! Digits, rank separators and anything else fall through to `None`.

use crate::models::{Color, PieceToken, Rank};

/// Classify a single board character.
///
/// Rank comes from the case-folded letter, color from the exact case.
/// Total over every `char`; never fails.
pub fn classify(c: char) -> Option<PieceToken> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let rank = Rank::from_letter(c)?;
    Some(PieceToken::new(Color::from_case(c), rank))
}

/// Check if a character is one of `PBRNQK` in either case
pub fn is_piece(c: char) -> bool {
    classify(c).is_some()
}

/// Check if a character marks a run of empty squares
pub fn is_empty_run(c: char) -> bool {
    c.is_ascii_digit()
}
