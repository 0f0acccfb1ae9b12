//! Core chess types.
//!
//! - `Piece`, `PieceKind` and `Color`
//! - `Coord` - a board location
//! - `Square` - one cell of the grid, holding at most one piece
//! - `LastMove`, `AppliedMove`, `MoveKind` - move records

mod coord;
mod moves;
mod piece;
mod square;

pub use coord::Coord;
pub use moves::{AppliedMove, LastMove, MoveKind};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
