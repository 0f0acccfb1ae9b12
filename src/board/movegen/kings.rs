use super::super::{Board, Color, Coord, Piece, PieceKind};

impl Board {
    pub(crate) fn king_can_move(&self, king: &Piece, from: Coord, to: Coord) -> bool {
        let (dx, dy) = from.delta(to);
        if dx.abs().max(dy.abs()) == 1 {
            return true;
        }
        dx.abs() == 2 && dy == 0 && self.can_castle(king, from, to)
    }

    /// Castling toward the rook on the king's side of `to`.
    ///
    /// The destination must be empty before any attack test runs; check
    /// detection only ever targets occupied king squares, so it never
    /// re-enters this path.
    fn can_castle(&self, king: &Piece, from: Coord, to: Coord) -> bool {
        if king.moved || !self.is_empty(to) {
            return false;
        }

        let kingside = to.x > from.x;
        let rook_at = Coord {
            x: if kingside { 7 } else { 0 },
            y: from.y,
        };
        let rook_ready = matches!(
            self.piece_at(rook_at),
            Some(rook) if rook.is(PieceKind::Rook, king.color) && !rook.moved
        );
        if !rook_ready || !self.is_empty_horizontal(from, rook_at) {
            return false;
        }

        if self.is_in_check(king.color) {
            return false;
        }
        let Some(pass) = from.offset(if kingside { 1 } else { -1 }, 0) else {
            return false;
        };
        !self.king_checked_on(king, from, pass) && !self.king_checked_on(king, from, to)
    }

    /// Step the king onto `to` on a copy and test for check there.
    fn king_checked_on(&self, king: &Piece, from: Coord, to: Coord) -> bool {
        let mut copy = self.clone();
        copy.take(from);
        copy.put(to, *king);
        copy.is_in_check(king.color)
    }

    /// True iff some enemy piece can reach the king of `color`.
    ///
    /// A board without a king of `color` is reported as not in check; use
    /// `validate_kings` to reject such positions.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_at) = self.find_king(color) else {
            return false;
        };
        self.pieces(color.opponent())
            .any(|(from, attacker)| attacker.can_move(self, from, king_at))
    }
}
