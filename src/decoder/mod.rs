//! Board decoding modules
//!
//! This module contains the whole decoding path:
//! - Piece classification (letter case = color, letter = rank)
//! - Character mapping with the cipher shift
//! - The scan/emit state machine and the bounded output buffer

/// Main decoder that runs the scan over a board string
pub mod board_decoder;
/// Bounded output buffer
pub mod buffer;
/// Piece classifier (character -> color and rank)
pub mod classifier;
/// Decoder settings and environment overrides
pub mod config;
/// Decode errors
pub mod error;
/// Scan state machine and accumulator
pub mod scan;
/// Output alphabet and accumulator mapping
pub mod tables;
