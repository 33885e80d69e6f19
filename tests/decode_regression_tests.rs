//! Integration tests for board decoding regression testing
//!
//! These tests pin decoded text and completion status for known boards and
//! protect the tolerance rules: noise is skipped, a missing King truncates,
//! and overrunning the output bound is an error rather than a panic.

use piece_cipher::tools::{SAMPLE_BOARDS, parse_boards};
use piece_cipher::{
    BoardDecoder, CHARACTER_MAP, CipherShift, DecodeError, DecodedMessage, DecoderConfig,
    MessageStatus, decode, decode_batch, is_piece, map_accumulator,
};

fn decode_with_shift(board: &str, shift: CipherShift) -> Result<DecodedMessage, DecodeError> {
    BoardDecoder::with_config(DecoderConfig::default().with_shift(shift)).decode(board)
}

/// Strip everything except pieces and digits
fn strip_noise(board: &str) -> String {
    board
        .chars()
        .filter(|c| is_piece(*c) || c.is_ascii_digit())
        .collect()
}

#[test]
fn test_decode_standard_sample() {
    let msg = decode("P1q1N1n1/B1bQ1B2/BRNK4/8/8/8/8/8").unwrap();
    assert_eq!(msg.text, "DIGHERE!");
    assert_eq!(msg.status, MessageStatus::Complete);
}

#[test]
fn test_decode_legacy_sample() {
    let msg =
        decode_with_shift("rr6/RN6/qn6/NBr5/qb6/rrR5/qb6/qQ5k", CipherShift::LEGACY).unwrap();
    assert!(msg.text.starts_with("DIGHERE!"));
    assert!(msg.is_complete());
}

#[test]
fn test_every_sample_is_stable() {
    let expected = ["DIGHERE!", "DIGHERE!?", "GJKJHUC"];
    for (sample, want) in SAMPLE_BOARDS.iter().zip(expected) {
        let msg = decode_with_shift(sample.board, sample.shift).unwrap();
        assert_eq!(msg.text, want, "sample {}", sample.name);
        assert!(msg.is_complete());
    }
}

#[test]
fn test_noise_tolerance() {
    let boards = [
        "P1q1N1n1/B1bQ1B2/BRNK4/8/8/8/8/8",
        "N1rr2BN/1bn3n1/8/5qR1/8/8/2qQPK2/k7",
        "rr6/RN6/qn6/NBr5/qb6/rrR5/qb6/qQ5",
        "/x/P/ 1 -- q?1 zz N\t1",
    ];
    for board in boards {
        let noisy = decode(board).unwrap();
        let clean = decode(&strip_noise(board)).unwrap();
        assert_eq!(noisy, clean, "board {:?}", board);
    }
}

#[test]
fn test_truncated_board_reports_incomplete() {
    let msg = decode("P1q1N1n1/B1bQ1B2/BRN").unwrap();
    assert_eq!(msg.text, "DIGHERE");
    assert_eq!(msg.status, MessageStatus::Incomplete);
}

#[test]
fn test_garbage_input_never_panics() {
    let inputs = ["", "////////", "hello world", "12345678", "\u{0}\u{7f}\u{ff}", "♔♕♖♗♘♙"];
    for input in inputs {
        let msg = decode(input).unwrap();
        assert_eq!(msg.status, MessageStatus::Incomplete, "input {:?}", input);
    }
    // "hello world": only the 'r' is a piece, and no digit closes it
    assert!(decode("hello world").unwrap().text.is_empty());
}

#[test]
fn test_capacity_bound_is_enforced() {
    let board = "p1".repeat(100);
    assert_eq!(
        decode(&board),
        Err(DecodeError::CapacityExceeded { capacity: 24 })
    );

    let wide = BoardDecoder::with_config(DecoderConfig::default().with_max_message(100));
    let msg = wide.decode(&board).unwrap();
    assert_eq!(msg.len(), 100);
    // p: 1 + 1 = 2 -> 'E'
    assert!(msg.text.chars().all(|c| c == 'E'));
}

#[test]
fn test_input_bound_is_enforced() {
    let board = "8/".repeat(3000);
    assert!(matches!(
        decode(&board),
        Err(DecodeError::InputTooLong { max: 4096, .. })
    ));
}

#[test]
fn test_mapper_wraps_for_every_accumulator() {
    for acc in 1..=90u32 {
        let c = map_accumulator(acc, CipherShift::STANDARD);
        assert!(CHARACTER_MAP.contains(&c));
        assert_eq!(c, map_accumulator(acc + 30, CipherShift::STANDARD));
    }
}

#[test]
fn test_single_piece_letters() {
    // One piece then a digit: light multiplies 1, dark adds to 1
    let cases = [
        ("P1", 'D'),
        ("B1", 'E'),
        ("R1", 'F'),
        ("N1", 'G'),
        ("Q1", 'H'),
        ("p1", 'E'),
        ("b1", 'F'),
        ("r1", 'G'),
        ("n1", 'H'),
        ("q1", 'I'),
    ];
    for (board, want) in cases {
        assert_eq!(decode(board).unwrap().text, want.to_string(), "board {}", board);
    }
}

#[test]
fn test_batch_matches_sequential() {
    let content = "# regression boards\nP1q1N1n1/B1bQ1B2/BRNK4/8/8/8/8/8\n\nK\nP1q1\n";
    let boards = parse_boards(content);
    assert_eq!(boards.len(), 3);

    let batch = decode_batch(&boards);
    let sequential: Vec<_> = boards.iter().map(|b| decode(b)).collect();
    assert_eq!(batch, sequential);
}
