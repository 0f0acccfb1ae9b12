//! Move records.

use std::fmt;

use super::coord::Coord;
use super::piece::Piece;

/// The immediately preceding half-move, kept for en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub from: Coord,
    pub to: Coord,
}

impl LastMove {
    /// Number of rows the move spanned
    #[inline]
    #[must_use]
    pub fn rank_distance(&self) -> usize {
        self.from.y.abs_diff(self.to.y)
    }
}

/// What kind of move `Board::move_piece` performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture,
    /// Pawn advanced two squares from its start rank
    DoubleStep,
    /// The captured pawn stood beside the mover, not on the target square
    EnPassant { captured_at: Coord },
    Castle { rook_from: Coord, rook_to: Coord },
}

/// Result of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Coord,
    pub to: Coord,
    /// The mover as it stood before the move
    pub piece: Piece,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
}

impl AppliedMove {
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant { .. })
    }
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.piece, self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, " x {captured}")?;
        }
        Ok(())
    }
}
