use log::{debug, trace};

use super::{AppliedMove, Board, Coord, LastMove, MoveKind, PieceKind};

impl Board {
    /// Relocate the piece on `from` to `to`, resolving captures, en passant
    /// and castling.
    ///
    /// The move is re-checked with `can_move` first; a move that fails it is
    /// a no-op and returns `None` (the board, including `last_move`, is left
    /// untouched). King safety is not checked here: callers that need legal
    /// moves go through `legal_moves_from`.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Option<AppliedMove> {
        let Some(piece) = self.piece_at(from) else {
            trace!("move {from}-{to} ignored: {from} is empty");
            return None;
        };
        if !piece.can_move(self, from, to) {
            trace!("move {from}-{to} ignored: not a valid {} move", piece.kind);
            return None;
        }

        let (dx, dy) = from.delta(to);
        let mut captured = None;
        let mut kind = match piece.kind {
            PieceKind::Pawn if dx != 0 && self.is_empty(to) => {
                let captured_at = Coord { x: to.x, y: from.y };
                captured = self.take(captured_at);
                debug!("en passant: {piece} on {from} takes the pawn on {captured_at}");
                MoveKind::EnPassant { captured_at }
            }
            PieceKind::Pawn if dy.abs() == 2 => MoveKind::DoubleStep,
            PieceKind::King if dx.abs() == 2 => {
                let (rook_from, rook_to) = if dx > 0 {
                    (Coord { x: 7, y: from.y }, Coord { x: from.x + 1, y: from.y })
                } else {
                    (Coord { x: 0, y: from.y }, Coord { x: from.x - 1, y: from.y })
                };
                if let Some(mut rook) = self.take(rook_from) {
                    rook.mark_moved();
                    self.put(rook_to, rook);
                }
                debug!("{} castles: rook {rook_from}-{rook_to}", piece.color);
                MoveKind::Castle { rook_from, rook_to }
            }
            _ => MoveKind::Quiet,
        };

        let mut mover = piece;
        self.take(from);
        if let Some(occupant) = self.take(to) {
            captured = Some(occupant);
            kind = MoveKind::Capture;
        }
        mover.mark_moved();
        self.put(to, mover);

        if let Some(taken) = captured {
            self.record_capture(taken);
        }
        self.last_move = Some(LastMove { from, to });

        let applied = AppliedMove {
            from,
            to,
            piece,
            kind,
            captured,
        };
        debug!("applied {applied}");
        Some(applied)
    }
}
