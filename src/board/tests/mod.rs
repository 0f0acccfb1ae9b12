//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Starting position, pawn steps, en passant, castling, pins
//! - `make_move.rs` - Move application, captures, highlights, clone isolation
//! - `status.rs` - Check, checkmate, stalemate and king validation
//! - `codec.rs` - Plain board encoding, decoding and wire shape
//! - `proptest.rs` - Property-based tests over random legal games

mod codec;

use crate::board::Coord;

/// Shorthand coordinate constructor for test positions.
pub(super) fn c(x: usize, y: usize) -> Coord {
    Coord { x, y }
}
