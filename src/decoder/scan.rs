//! Scan/emit state machine
//!
//! One [`ScanState::step`] per board character. Emission happens on a digit
//! that follows a piece run, or on a King, which also ends the scan.

use super::classifier::{classify, is_empty_run};
use super::tables::{CipherShift, MAP_LEN, map_accumulator};
use crate::models::{Color, PieceToken};

/// Running per-letter value, always >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator(u32);

impl Accumulator {
    /// Value after a reset
    pub const INITIAL: Accumulator = Accumulator(1);

    /// Current value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Fold a piece into the accumulator: light multiplies, dark adds.
    ///
    /// On overflow the value is first reduced to its residue in `1..=30`;
    /// the mapper only sees the value mod 30, so output is unchanged.
    pub fn absorb(self, piece: PieceToken) -> Self {
        let rank = piece.rank.value();
        let apply = |acc: u32| match piece.color {
            Color::Light => acc.checked_mul(rank),
            Color::Dark => acc.checked_add(rank),
        };
        match apply(self.0) {
            Some(next) => Accumulator(next),
            // residue <= 30, so neither 30 * 6 nor 30 + 6 can overflow
            None => Accumulator(fold(apply(fold(self.0)).unwrap_or(1))),
        }
    }

    /// Map the current value through the character table
    pub fn to_char(&self, shift: CipherShift) -> char {
        map_accumulator(self.0, shift)
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::INITIAL
    }
}

fn fold(value: u32) -> u32 {
    (value.max(1) - 1) % MAP_LEN + 1
}

/// Scan phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// Still consuming input
    Scanning,
    /// A King was found; remaining input is ignored
    Done,
    /// Input ended without a King
    Exhausted,
}

/// What one character did to the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// A non-King piece was folded into the accumulator
    Absorbed(PieceToken),
    /// A character was emitted (digit after a run, or a King)
    Emitted(char),
    /// Nothing changed
    Skipped,
}

impl ScanEvent {
    /// Emitted character, if any
    pub fn emitted(&self) -> Option<char> {
        match self {
            ScanEvent::Emitted(c) => Some(*c),
            _ => None,
        }
    }
}

/// Complete scan state between two characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    /// Current phase
    pub phase: ScanPhase,
    /// Value of the letter being built
    pub accumulator: Accumulator,
    /// Whether the previous character was a (non-King) piece
    pub last_token_was_piece: bool,
}

impl ScanState {
    /// Initial state: scanning, accumulator 1, no pending piece run
    pub fn new() -> Self {
        Self {
            phase: ScanPhase::Scanning,
            accumulator: Accumulator::INITIAL,
            last_token_was_piece: false,
        }
    }

    /// Consume one character, returning the next state and any emission
    pub fn step(self, c: char, shift: CipherShift) -> (ScanState, Option<char>) {
        let (next, event) = self.advance(c, shift);
        (next, event.emitted())
    }

    /// Like [`step`](Self::step), but reports what the character did
    pub fn advance(self, c: char, shift: CipherShift) -> (ScanState, ScanEvent) {
        if self.phase != ScanPhase::Scanning {
            return (self, ScanEvent::Skipped);
        }

        match classify(c) {
            Some(piece) if piece.rank.is_king() => {
                let emitted = self.accumulator.to_char(shift);
                let next = ScanState {
                    phase: ScanPhase::Done,
                    accumulator: Accumulator::INITIAL,
                    ..self
                };
                (next, ScanEvent::Emitted(emitted))
            }
            Some(piece) => {
                let next = ScanState {
                    accumulator: self.accumulator.absorb(piece),
                    last_token_was_piece: true,
                    ..self
                };
                (next, ScanEvent::Absorbed(piece))
            }
            None if is_empty_run(c) && self.last_token_was_piece => {
                let emitted = self.accumulator.to_char(shift);
                let next = ScanState {
                    accumulator: Accumulator::INITIAL,
                    last_token_was_piece: false,
                    ..self
                };
                (next, ScanEvent::Emitted(emitted))
            }
            None => (self, ScanEvent::Skipped),
        }
    }

    /// Close the scan at end of input
    pub fn finish(self) -> ScanState {
        match self.phase {
            ScanPhase::Scanning => ScanState {
                phase: ScanPhase::Exhausted,
                ..self
            },
            _ => self,
        }
    }

    /// Check if the scan has stopped for any reason
    pub fn is_terminal(&self) -> bool {
        self.phase != ScanPhase::Scanning
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}
