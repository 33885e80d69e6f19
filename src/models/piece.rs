/// Piece color, carried only by letter case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Uppercase letter (white in chess terms); multiplies the accumulator
    Light,
    /// Lowercase letter (black in chess terms); adds to the accumulator
    Dark,
}

impl Color {
    /// Color of an ASCII letter by its case
    pub fn from_case(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        }
    }
}

/// Piece rank and its cipher value (1-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// P = 1
    Pawn = 1,
    /// B = 2
    Bishop = 2,
    /// R = 3
    Rook = 3,
    /// N = 4
    Knight = 4,
    /// Q = 5
    Queen = 5,
    /// K = 6, ends the message
    King = 6,
}

impl Rank {
    /// All ranks in value order
    pub const ALL: [Rank; 6] = [
        Rank::Pawn,
        Rank::Bishop,
        Rank::Rook,
        Rank::Knight,
        Rank::Queen,
        Rank::King,
    ];

    /// Get rank from a piece letter (case-insensitive)
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(Rank::Pawn),
            'B' => Some(Rank::Bishop),
            'R' => Some(Rank::Rook),
            'N' => Some(Rank::Knight),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            _ => None,
        }
    }

    /// Cipher value of this rank
    pub fn value(&self) -> u32 {
        *self as u32
    }

    /// Uppercase FEN letter for this rank
    pub fn letter(&self) -> char {
        match self {
            Rank::Pawn => 'P',
            Rank::Bishop => 'B',
            Rank::Rook => 'R',
            Rank::Knight => 'N',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    /// Check if this rank terminates the message
    pub fn is_king(&self) -> bool {
        matches!(self, Rank::King)
    }
}

/// Classification of one board character that denotes a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceToken {
    /// Color from letter case
    pub color: Color,
    /// Rank from the case-folded letter
    pub rank: Rank,
}

impl PieceToken {
    /// Create a piece token
    pub fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// FEN letter for this token, uppercase for light pieces
    pub fn to_char(&self) -> char {
        match self.color {
            Color::Light => self.rank.letter(),
            Color::Dark => self.rank.letter().to_ascii_lowercase(),
        }
    }
}
