/// Output alphabet, indexed 0-based: A-Z then `! ? . ,`
pub const CHARACTER_MAP: [char; 30] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '!', '?', '.', ',',
];

/// Table length as the accumulator modulus
pub const MAP_LEN: u32 = CHARACTER_MAP.len() as u32;

/// Cipher shift applied when mapping accumulator values to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherShift(pub i32);

impl CipherShift {
    /// +3, accumulator 1 maps to 'D'
    pub const STANDARD: CipherShift = CipherShift(3);
    /// -3, the `accumulator - 4` arithmetic used by the legacy C decoder
    pub const LEGACY: CipherShift = CipherShift(-3);
}

impl Default for CipherShift {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Table index for an accumulator value: `(acc - 1 + shift) mod 30`
pub fn map_index(accumulator: u32, shift: CipherShift) -> usize {
    let raw = accumulator as i64 - 1 + shift.0 as i64;
    raw.rem_euclid(MAP_LEN as i64) as usize
}

/// Map an accumulator value to its output character
pub fn map_accumulator(accumulator: u32, shift: CipherShift) -> char {
    CHARACTER_MAP[map_index(accumulator, shift)]
}
