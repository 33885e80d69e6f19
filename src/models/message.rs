use std::fmt;

/// Whether the scan reached a King before the input ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// A King token ended the message
    Complete,
    /// Input was exhausted without a King; the text is a prefix
    Incomplete,
}

/// Decoded message text and its completion status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    /// Characters emitted in scan order
    pub text: String,
    /// Completion status
    pub status: MessageStatus,
}

impl DecodedMessage {
    /// Create a new decoded message
    pub fn new(text: String, status: MessageStatus) -> Self {
        Self { text, status }
    }

    /// Check if a King terminated the message
    pub fn is_complete(&self) -> bool {
        self.status == MessageStatus::Complete
    }

    /// Number of decoded characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if nothing was emitted
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for DecodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Per-call counters collected while scanning a board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeTelemetry {
    /// Characters consumed before the scan stopped
    pub scanned: usize,
    /// Non-King pieces folded into the accumulator
    pub pieces: usize,
    /// Characters emitted (including the King emission)
    pub letters: usize,
    /// Digits, separators and noise that changed nothing
    pub skipped: usize,
}
