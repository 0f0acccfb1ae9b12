//! Board square (a single cell of the grid).

use super::coord::Coord;
use super::piece::{Color, Piece};

/// One cell of the board.
///
/// The tint is fixed at construction. `available` is a transient highlight
/// flag for move previews and is not part of the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
    pub(crate) coord: Coord,
    pub(crate) tint: Color,
    pub(crate) piece: Option<Piece>,
    pub(crate) available: bool,
}

impl Square {
    /// Empty square at `coord`, tinted from `(x + y) mod 2`.
    #[must_use]
    pub const fn empty(coord: Coord) -> Self {
        let tint = if (coord.x + coord.y) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        Square {
            coord,
            tint,
            piece: None,
            available: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    #[must_use]
    pub const fn tint(&self) -> Color {
        self.tint
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// True if the square holds a piece of the other color than `color`.
    #[inline]
    #[must_use]
    pub fn is_enemy_of(&self, color: Color) -> bool {
        matches!(self.piece, Some(p) if p.color != color)
    }

    /// Highlight flag set by `Board::highlight_moves`.
    #[inline]
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }
}
