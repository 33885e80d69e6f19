use clap::{Args, Parser, Subcommand};
use piece_cipher::tools::{SAMPLE_BOARDS, default_board, read_boards};
use piece_cipher::{BoardDecoder, CipherShift, DecodedMessage, DecoderConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "piece-cipher", version, about = "Decode messages hidden in FEN boards")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct DecodeOpts {
    /// Cipher shift (3 = standard, -3 = legacy C decoder)
    #[arg(long, allow_hyphen_values = true)]
    shift: Option<i32>,
    /// Maximum decoded characters
    #[arg(long)]
    capacity: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a single board (the built-in sample if omitted)
    Decode {
        board: Option<String>,
        #[command(flatten)]
        opts: DecodeOpts,
        /// Print every scan step to stderr
        #[arg(long)]
        trace: bool,
    },
    /// Decode every board in a file, one per line
    Batch {
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        opts: DecodeOpts,
    },
    /// List the built-in sample boards and their decodings
    Samples,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Decode { board, opts, trace } => decode_cmd(board.as_deref(), &opts, trace),
        Command::Batch { file, opts } => batch_cmd(&file, &opts),
        Command::Samples => samples_cmd(),
    }
}

fn resolve_board(board: Option<&str>) -> &str {
    board.unwrap_or(default_board())
}

fn build_decoder(opts: &DecodeOpts, trace: bool) -> BoardDecoder {
    apply_opts(DecoderConfig::from_env(), opts, trace)
}

fn apply_opts(mut config: DecoderConfig, opts: &DecodeOpts, trace: bool) -> BoardDecoder {
    if let Some(shift) = opts.shift {
        config = config.with_shift(CipherShift(shift));
    }
    if let Some(capacity) = opts.capacity {
        config = config.with_max_message(capacity);
    }
    if trace {
        config = config.with_trace(true);
    }
    BoardDecoder::with_config(config)
}

fn report(msg: &DecodedMessage) {
    println!("decoded message: {}", msg);
    if !msg.is_complete() {
        eprintln!("note: no king found, message is incomplete");
    }
}

fn decode_cmd(board: Option<&str>, opts: &DecodeOpts, trace: bool) -> ExitCode {
    let decoder = build_decoder(opts, trace);
    let board = resolve_board(board);

    match decoder.decode(board) {
        Ok(msg) => {
            report(&msg);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to decode {}: {}", board, err);
            ExitCode::FAILURE
        }
    }
}

fn batch_cmd(file: &Path, opts: &DecodeOpts) -> ExitCode {
    let boards = match read_boards(file) {
        Ok(boards) => boards,
        Err(err) => {
            eprintln!("Failed to read boards from {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let decoder = build_decoder(opts, false);
    let results = decoder.decode_batch(&boards);

    let mut failures = 0;
    let mut incomplete = 0;
    for (board, result) in boards.iter().zip(&results) {
        match result {
            Ok(msg) if msg.is_complete() => println!("{} -> {}", board, msg),
            Ok(msg) => {
                incomplete += 1;
                println!("{} -> {} (incomplete)", board, msg);
            }
            Err(err) => {
                failures += 1;
                println!("{} -> error: {}", board, err);
            }
        }
    }

    println!(
        "\nDecoded {} boards: {} incomplete, {} failed",
        boards.len(),
        incomplete,
        failures
    );

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn samples_cmd() -> ExitCode {
    for sample in SAMPLE_BOARDS.iter() {
        let decoder = BoardDecoder::with_config(DecoderConfig::default().with_shift(sample.shift));
        match decoder.decode(sample.board) {
            Ok(msg) => println!(
                "{:<16} shift={:+} {} -> {}",
                sample.name, sample.shift.0, sample.board, msg
            ),
            Err(err) => println!("{:<16} {} -> error: {}", sample.name, sample.board, err),
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_board_prefers_argument() {
        assert_eq!(resolve_board(Some("K")), "K");
        let owned = String::from("P1q1");
        assert_eq!(resolve_board(Some(owned.as_str())), "P1q1");
    }

    #[test]
    fn test_resolve_board_defaults_to_sample() {
        let board = resolve_board(None);
        assert_eq!(board, default_board());
        let msg = BoardDecoder::new().decode(board).unwrap();
        assert_eq!(msg.text, "DIGHERE!");
    }

    #[test]
    fn test_cli_parses_decode_options() {
        let cli = Cli::try_parse_from([
            "piece-cipher",
            "decode",
            "rr6/RN6/qn6/NBr5/qb6/rrR5/qb6/qQ5k",
            "--shift",
            "-3",
            "--capacity",
            "12",
        ])
        .unwrap();
        let Command::Decode { board, opts, trace } = cli.command else {
            panic!("expected decode subcommand");
        };
        let decoder = apply_opts(DecoderConfig::default(), &opts, trace);
        assert_eq!(decoder.config().shift, CipherShift::LEGACY);
        assert_eq!(decoder.config().max_message, 12);
        let msg = decoder.decode(resolve_board(board.as_deref())).unwrap();
        assert_eq!(msg.text, "DIGHERE!?");
    }
}
