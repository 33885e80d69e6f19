use super::buffer::MessageBuffer;
use super::config::DecoderConfig;
use super::error::DecodeError;
use super::scan::{ScanEvent, ScanPhase, ScanState};
use crate::models::{Color, DecodeTelemetry, DecodedMessage, MessageStatus};
use rayon::prelude::*;

/// Main board decoder - drives the scan over a whole board string
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardDecoder {
    config: DecoderConfig,
}

impl BoardDecoder {
    /// Create a decoder with default settings
    pub fn new() -> Self {
        Self {
            config: DecoderConfig::default(),
        }
    }

    /// Create a decoder with explicit settings
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Active settings
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one board
    pub fn decode(&self, board: &str) -> Result<DecodedMessage, DecodeError> {
        self.decode_with_telemetry(board).map(|(msg, _)| msg)
    }

    /// Decode one board and report scan counters
    pub fn decode_with_telemetry(
        &self,
        board: &str,
    ) -> Result<(DecodedMessage, DecodeTelemetry), DecodeError> {
        if board.len() > self.config.max_input {
            return Err(DecodeError::InputTooLong {
                len: board.len(),
                max: self.config.max_input,
            });
        }

        let shift = self.config.shift;
        let mut out = MessageBuffer::with_capacity(self.config.max_message);
        let mut tel = DecodeTelemetry::default();
        let mut state = ScanState::new();

        for c in board.chars() {
            let before = state;
            let (next, event) = state.advance(c, shift);
            tel.scanned += 1;

            match event {
                ScanEvent::Emitted(ch) => {
                    if self.config.trace {
                        eprintln!(
                            "TRACE: {:?} closes letter, accumulator {} -> {:?}",
                            c,
                            before.accumulator.value(),
                            ch
                        );
                    }
                    out.push(ch)?;
                    tel.letters += 1;
                }
                ScanEvent::Absorbed(piece) => {
                    if self.config.trace {
                        let op = match piece.color {
                            Color::Light => "*",
                            Color::Dark => "+",
                        };
                        eprintln!(
                            "TRACE: {:?} {:?} {:?}, accumulator {} {} {} = {}",
                            c,
                            piece.color,
                            piece.rank,
                            before.accumulator.value(),
                            op,
                            piece.rank.value(),
                            next.accumulator.value()
                        );
                    }
                    tel.pieces += 1;
                }
                ScanEvent::Skipped => tel.skipped += 1,
            }

            state = next;
            if state.is_terminal() {
                break;
            }
        }

        let state = state.finish();
        let status = match state.phase {
            ScanPhase::Done => MessageStatus::Complete,
            _ => MessageStatus::Incomplete,
        };

        if self.config.trace {
            eprintln!(
                "TRACE: {:?} after {} chars ({} pieces, {} letters, {} skipped)",
                state.phase, tel.scanned, tel.pieces, tel.letters, tel.skipped
            );
        }

        Ok((DecodedMessage::new(out.into_string(), status), tel))
    }

    /// Decode many boards in parallel; results keep input order
    pub fn decode_batch<S>(&self, boards: &[S]) -> Vec<Result<DecodedMessage, DecodeError>>
    where
        S: AsRef<str> + Sync,
    {
        boards
            .par_iter()
            .map(|board| self.decode(board.as_ref()))
            .collect()
    }
}
