//! Move rules: pseudo-legal geometry per piece kind, then legality filtering
//! by simulating the move on a board copy.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Coord, Piece, PieceKind};

impl Piece {
    /// Pseudo-legal predicate for this piece standing on `from`.
    ///
    /// Only geometry and occupancy are checked; the mover's own king may be
    /// left in check. `Board::legal_moves_from` does that filtering.
    #[must_use]
    pub fn can_move(&self, board: &Board, from: Coord, to: Coord) -> bool {
        if matches!(board.piece_at(to), Some(target) if target.color == self.color) {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => board.pawn_can_move(self, from, to),
            PieceKind::Knight => board.knight_can_move(from, to),
            PieceKind::Bishop => board.is_empty_diagonal(from, to),
            PieceKind::Rook => {
                board.is_empty_vertical(from, to) || board.is_empty_horizontal(from, to)
            }
            PieceKind::Queen => {
                board.is_empty_diagonal(from, to)
                    || board.is_empty_vertical(from, to)
                    || board.is_empty_horizontal(from, to)
            }
            PieceKind::King => board.king_can_move(self, from, to),
        }
    }
}

impl Board {
    /// Pseudo-legal predicate for whatever stands on `from`.
    #[must_use]
    pub fn can_move(&self, from: Coord, to: Coord) -> bool {
        match self.piece_at(from) {
            Some(piece) => piece.can_move(self, from, to),
            None => false,
        }
    }

    /// Every destination of the piece on `from` that does not leave its own
    /// king in check, in row-major order. Empty for an empty square.
    #[must_use]
    pub fn legal_moves_from(&self, from: Coord) -> Vec<Coord> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        Coord::all()
            .filter(|&to| {
                piece.can_move(self, from, to) && self.keeps_king_safe(piece.color, from, to)
            })
            .collect()
    }

    /// All legal (from, to) pairs for `color`.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<(Coord, Coord)> {
        self.pieces(color)
            .flat_map(|(from, _)| {
                self.legal_moves_from(from)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }

    /// True if `color` has at least one legal move. Stops at the first one.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces(color).any(|(from, piece)| {
            Coord::all().any(|to| {
                piece.can_move(self, from, to) && self.keeps_king_safe(color, from, to)
            })
        })
    }

    /// Set each square's highlight flag to whether the piece on `selected`
    /// may legally move there. `None` clears all flags.
    pub fn highlight_moves(&mut self, selected: Option<Coord>) {
        let targets = selected
            .map(|from| self.legal_moves_from(from))
            .unwrap_or_default();
        for square in self.squares.iter_mut() {
            square.available = targets.contains(&square.coord);
        }
    }

    /// Coordinates currently flagged by `highlight_moves`.
    #[must_use]
    pub fn highlighted(&self) -> Vec<Coord> {
        self.squares
            .iter()
            .filter(|sq| sq.available)
            .map(|sq| sq.coord)
            .collect()
    }

    /// Play `from -> to` on a copy and report whether `mover` is out of check.
    fn keeps_king_safe(&self, mover: Color, from: Coord, to: Coord) -> bool {
        let mut copy = self.clone();
        copy.move_piece(from, to).is_some() && !copy.is_in_check(mover)
    }
}
