use super::tables::CipherShift;

/// Default output capacity, in decoded characters
pub const DEFAULT_MAX_MESSAGE: usize = 24;
/// Upper clamp for the output capacity
pub const MAX_MESSAGE_LIMIT: usize = 4096;
/// Default bound on board length, in bytes
pub const DEFAULT_MAX_INPUT: usize = 4096;

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn parse_var_usize<F>(var: &F, name: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    var(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_var_i32<F>(var: &F, name: &str, default: i32) -> i32
where
    F: Fn(&str) -> Option<String>,
{
    var(name)
        .and_then(|v| v.trim().parse::<i32>().ok())
        .unwrap_or(default)
}

/// Settings for one [`BoardDecoder`](super::board_decoder::BoardDecoder)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum number of decoded characters before `CapacityExceeded`
    pub max_message: usize,
    /// Maximum board length in bytes before `InputTooLong`
    pub max_input: usize,
    /// Shift applied by the character mapper
    pub shift: CipherShift,
    /// Print every scan step to stderr
    pub trace: bool,
}

impl DecoderConfig {
    /// Defaults overridden by `PIECE_CIPHER_*` environment variables
    ///
    /// - `PIECE_CIPHER_MAX_MESSAGE` (clamped to 1..=4096)
    /// - `PIECE_CIPHER_MAX_INPUT` (at least 1)
    /// - `PIECE_CIPHER_SHIFT`
    /// - `PIECE_CIPHER_DEBUG` (presence enables tracing)
    ///
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            trace: crate::debug::debug_enabled(),
            ..Self::from_vars(env_var)
        }
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `var`
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            max_message: parse_var_usize(&var, "PIECE_CIPHER_MAX_MESSAGE", DEFAULT_MAX_MESSAGE)
                .clamp(1, MAX_MESSAGE_LIMIT),
            max_input: parse_var_usize(&var, "PIECE_CIPHER_MAX_INPUT", DEFAULT_MAX_INPUT).max(1),
            shift: CipherShift(parse_var_i32(
                &var,
                "PIECE_CIPHER_SHIFT",
                CipherShift::STANDARD.0,
            )),
            trace: var("PIECE_CIPHER_DEBUG").is_some(),
        }
    }

    /// Set the output capacity (clamped to 1..=4096)
    pub fn with_max_message(mut self, max_message: usize) -> Self {
        self.max_message = max_message.clamp(1, MAX_MESSAGE_LIMIT);
        self
    }

    /// Set the input bound (at least 1)
    pub fn with_max_input(mut self, max_input: usize) -> Self {
        self.max_input = max_input.max(1);
        self
    }

    /// Set the cipher shift
    pub fn with_shift(mut self, shift: CipherShift) -> Self {
        self.shift = shift;
        self
    }

    /// Enable or disable step tracing
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_message: DEFAULT_MAX_MESSAGE,
            max_input: DEFAULT_MAX_INPUT,
            shift: CipherShift::STANDARD,
            trace: false,
        }
    }
}
