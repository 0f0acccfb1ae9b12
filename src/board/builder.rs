//! Fluent builder for constructing positions piece by piece.
//!
//! # Example
//! ```
//! use chess_duel::board::{BoardBuilder, Color, Coord, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece(Coord { x: 4, y: 7 }, Color::White, PieceKind::King)
//!     .piece(Coord { x: 4, y: 0 }, Color::Black, PieceKind::King)
//!     .piece(Coord { x: 0, y: 6 }, Color::White, PieceKind::Pawn)
//!     .build();
//! assert!(!board.is_in_check(Color::White));
//! ```

use super::{Board, Color, Coord, LastMove, Piece, PieceKind};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Coord, Piece)>,
    captured: Vec<Piece>,
    last_move: Option<LastMove>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            builder.pieces.extend(board.pieces(color));
        }
        builder
    }

    /// Place an unmoved piece, replacing any existing one on that square.
    #[must_use]
    pub fn piece(self, at: Coord, color: Color, kind: PieceKind) -> Self {
        self.placed(at, Piece::new(kind, color))
    }

    /// Place a piece that has already moved (no castling, no pawn double step).
    #[must_use]
    pub fn moved_piece(self, at: Coord, color: Color, kind: PieceKind) -> Self {
        self.placed(at, Piece::new(kind, color).with_moved(true))
    }

    /// Place an arbitrary piece value.
    #[must_use]
    pub fn placed(mut self, at: Coord, piece: Piece) -> Self {
        self.pieces.retain(|(c, _)| *c != at);
        self.pieces.push((at, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, at: Coord) -> Self {
        self.pieces.retain(|(c, _)| *c != at);
        self
    }

    /// Append a piece to the capture list of the side that took it.
    #[must_use]
    pub fn captured(mut self, color: Color, kind: PieceKind) -> Self {
        self.captured.push(Piece::new(kind, color));
        self
    }

    /// Set the last move (the en passant memory).
    #[must_use]
    pub fn last_move(mut self, from: Coord, to: Coord) -> Self {
        self.last_move = Some(LastMove { from, to });
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (at, piece) in self.pieces {
            board.put(at, piece);
        }
        for piece in self.captured {
            board.record_capture(piece);
        }
        board.last_move = self.last_move;
        board
    }
}
