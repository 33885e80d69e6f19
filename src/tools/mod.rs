use crate::decoder::tables::CipherShift;
use std::fs;
use std::path::Path;

/// A built-in board and the shift it was encoded with.
#[derive(Debug, Clone, Copy)]
pub struct SampleBoard {
    /// Short name used by the CLI.
    pub name: &'static str,
    /// Board-token string.
    pub board: &'static str,
    /// Shift the board decodes correctly under.
    pub shift: CipherShift,
}

/// Boards shipped with the crate. The first one is the CLI default.
pub static SAMPLE_BOARDS: [SampleBoard; 3] = [
    SampleBoard {
        name: "dighere",
        board: "P1q1N1n1/B1bQ1B2/BRNK4/8/8/8/8/8",
        shift: CipherShift::STANDARD,
    },
    SampleBoard {
        name: "dighere-legacy",
        board: "rr6/RN6/qn6/NBr5/qb6/rrR5/qb6/qQ5k",
        shift: CipherShift::LEGACY,
    },
    SampleBoard {
        name: "knights",
        board: "N1rr2BN/1bn3n1/8/5qR1/8/8/2qQPK2/k7",
        shift: CipherShift::STANDARD,
    },
];

/// Default board for the CLI.
pub fn default_board() -> &'static str {
    SAMPLE_BOARDS[0].board
}

/// Look up a sample by name.
pub fn sample(name: &str) -> Option<&'static SampleBoard> {
    SAMPLE_BOARDS.iter().find(|s| s.name == name)
}

/// Parse board lines: one board per line, blank lines and `#` comments skipped.
pub fn parse_boards(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read a board-list file.
pub fn read_boards<P: AsRef<Path>>(path: P) -> Result<Vec<String>, std::io::Error> {
    let content = fs::read_to_string(path)?;
    Ok(parse_boards(&content))
}
