//! Chess board representation and rules.
//!
//! The board is a flat row-major grid of 64 squares. Pieces live inside
//! squares and are addressed by coordinate. Legality is decided by testing a
//! move's geometry, then replaying it on a clone and looking for check.
//! Supports castling, en passant and the pawn double step.
//!
//! # Example
//! ```
//! use chess_duel::board::{Board, Color, Coord};
//!
//! let mut board = Board::new();
//! let targets = board.legal_moves_from(Coord { x: 4, y: 6 });
//! assert_eq!(targets.len(), 2);
//!
//! board.move_piece(Coord { x: 4, y: 6 }, Coord { x: 4, y: 4 });
//! assert!(!board.is_in_check(Color::Black));
//! ```

mod builder;
pub mod codec;
mod display;
mod error;
mod make_move;
mod movegen;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use codec::{decode, encode, PlainBoard, PlainCoord, PlainMove, PlainPiece, PlainSquare};
pub use error::{CodecError, PositionError, SquareError};
pub use state::Board;
pub use status::GameStatus;
pub use types::{AppliedMove, Color, Coord, LastMove, MoveKind, Piece, PieceKind, Square};
