//! Local game loop over a single board.
//!
//! `Game` tracks whose turn it is and whether the game has ended. A rendering
//! layer calls `select` when a piece is picked (to light up its targets) and
//! `play` when a destination is picked.

use log::{debug, info, trace};

use crate::board::{AppliedMove, Board, Color, Coord, GameStatus};

/// What `Game::play` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub applied: AppliedMove,
    /// Status for the side now to move
    pub status: GameStatus,
    pub to_move: Color,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Color,
    status: GameStatus,
}

impl Game {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new(), Color::White)
    }

    /// Resume from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let status = board.status(to_move);
        Game {
            board,
            to_move,
            status,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Highlight and return the legal targets of the piece on `at`.
    ///
    /// Empty (and all highlights cleared) when the square is empty, holds a
    /// piece of the side not to move, or the game is over.
    pub fn select(&mut self, at: Coord) -> Vec<Coord> {
        let selectable = !self.is_over()
            && matches!(self.board.piece_at(at), Some(p) if p.color == self.to_move);
        if !selectable {
            self.board.highlight_moves(None);
            return Vec::new();
        }
        self.board.highlight_moves(Some(at));
        self.board.highlighted()
    }

    /// Play `from -> to` for the side to move.
    ///
    /// The move is tried on a working copy and committed only if it leaves
    /// the mover's king safe. Returns `None` for illegal moves and for any
    /// input once the game is over.
    pub fn play(&mut self, from: Coord, to: Coord) -> Option<MoveReport> {
        if self.is_over() {
            trace!("move {from}-{to} ignored: game is over");
            return None;
        }
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.to_move => {}
            _ => {
                trace!("move {from}-{to} ignored: no {} piece on {from}", self.to_move);
                return None;
            }
        }

        let mut next = self.board.clone();
        let applied = next.move_piece(from, to)?;
        if next.is_in_check(self.to_move) {
            trace!("move {from}-{to} ignored: leaves the {} king in check", self.to_move);
            return None;
        }
        next.highlight_moves(None);

        let opponent = self.to_move.opponent();
        let status = next.status(opponent);
        self.board = next;
        self.to_move = opponent;
        self.status = status;

        match status {
            GameStatus::Checkmate { winner } => info!("checkmate, {winner} wins"),
            GameStatus::Stalemate => info!("stalemate, {opponent} has no legal move"),
            GameStatus::Check => debug!("{opponent} is in check"),
            GameStatus::InProgress => {}
        }

        Some(MoveReport {
            applied,
            status,
            to_move: opponent,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
