//! Check, checkmate and stalemate.

use super::error::PositionError;
use super::{Board, Color, PieceKind};

/// Game state from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a way out
    Check,
    Checkmate { winner: Color },
    /// The side to move is not in check and has no legal move
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl Board {
    /// In check with no legal move.
    ///
    /// A side that is not in check is never mated, even without legal moves;
    /// see `is_stalemate` for that case.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check and no legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Status for `to_move`, the side about to play.
    #[must_use]
    pub fn status(&self, to_move: Color) -> GameStatus {
        let in_check = self.is_in_check(to_move);
        match (in_check, self.has_legal_move(to_move)) {
            (true, false) => GameStatus::Checkmate {
                winner: to_move.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        }
    }

    /// Exactly one king per color.
    pub fn validate_kings(&self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            let count = self
                .pieces(color)
                .filter(|(_, p)| p.kind == PieceKind::King)
                .count();
            match count {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                _ => return Err(PositionError::ExtraKing { color, count }),
            }
        }
        Ok(())
    }
}
