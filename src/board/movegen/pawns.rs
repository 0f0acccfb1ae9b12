use super::super::{Board, Coord, Piece, PieceKind};

impl Board {
    pub(crate) fn pawn_can_move(&self, pawn: &Piece, from: Coord, to: Coord) -> bool {
        let dir = pawn.color.pawn_direction();
        let (dx, dy) = from.delta(to);

        if dx == 0 {
            if dy == dir {
                return self.is_empty(to);
            }
            if dy == 2 * dir && pawn.is_first_step() && from.y == pawn.color.pawn_start_rank() {
                let Some(between) = from.offset(0, dir) else {
                    return false;
                };
                return self.is_empty(between) && self.is_empty(to);
            }
            return false;
        }

        if dx.abs() == 1 && dy == dir {
            if self.square(to).is_enemy_of(pawn.color) {
                return true;
            }
            return self.is_empty(to) && self.can_en_passant(pawn, from, to);
        }

        false
    }

    /// Diagonal step onto an empty square behind an enemy pawn that has just
    /// advanced two squares and now stands beside the capturer.
    pub(crate) fn can_en_passant(&self, pawn: &Piece, from: Coord, to: Coord) -> bool {
        let Some(last) = self.last_move else {
            return false;
        };
        if last.to != (Coord { x: to.x, y: from.y }) {
            return false;
        }
        let just_moved_enemy_pawn = matches!(
            self.piece_at(last.to),
            Some(p) if p.kind == PieceKind::Pawn && p.color != pawn.color
        );

        just_moved_enemy_pawn
            && last.rank_distance() == 2
            && from.y == pawn.color.en_passant_rank()
    }
}
