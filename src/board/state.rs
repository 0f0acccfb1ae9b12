use once_cell::sync::Lazy;

use super::{Color, Coord, LastMove, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for color in Color::BOTH {
        for (x, &kind) in BACK_RANK.iter().enumerate() {
            board.put(Coord { x, y: color.home_rank() }, Piece::new(kind, color));
            let pawn_rank = color.pawn_start_rank();
            board.put(Coord { x, y: pawn_rank }, Piece::new(PieceKind::Pawn, color));
        }
    }
    board
});

/// The 8x8 grid, capture lists and last-move memory.
///
/// `Clone` is a full value copy: squares, pieces, capture lists and the last
/// move are all duplicated, so a clone can be mutated freely for what-if tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Square; 64],
    /// Black pieces taken by White, in capture order
    pub(crate) captured_by_white: Vec<Piece>,
    /// White pieces taken by Black, in capture order
    pub(crate) captured_by_black: Vec<Piece>,
    pub(crate) last_move: Option<LastMove>,
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        STARTING_BOARD.clone()
    }

    /// A board with tinted, empty squares and no history.
    #[must_use]
    pub fn empty() -> Self {
        let mut squares = [Square::empty(Coord { x: 0, y: 0 }); 64];
        for (idx, square) in squares.iter_mut().enumerate() {
            *square = Square::empty(Coord::from_index(idx));
        }
        Board {
            squares,
            captured_by_white: Vec::new(),
            captured_by_black: Vec::new(),
            last_move: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn square(&self, at: Coord) -> &Square {
        &self.squares[at.index()]
    }

    /// All squares in row-major order.
    #[must_use]
    pub fn squares(&self) -> &[Square; 64] {
        &self.squares
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.squares[at.index()].piece
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.squares[at.index()].piece.is_none()
    }

    /// Pieces of `color` with their coordinates, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.squares.iter().filter_map(move |sq| match sq.piece {
            Some(p) if p.color == color => Some((sq.coord, p)),
            _ => None,
        })
    }

    #[must_use]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Black pieces White has captured, oldest first.
    #[must_use]
    pub fn captured_by_white(&self) -> &[Piece] {
        &self.captured_by_white
    }

    /// White pieces Black has captured, oldest first.
    #[must_use]
    pub fn captured_by_black(&self) -> &[Piece] {
        &self.captured_by_black
    }

    /// Append to the capture list of the side that took `captured`.
    ///
    /// Capture lists keep kind and color only; move history is dropped.
    pub(crate) fn record_capture(&mut self, captured: Piece) {
        let entry = Piece::new(captured.kind, captured.color);
        match captured.color {
            Color::Black => self.captured_by_white.push(entry),
            Color::White => self.captured_by_black.push(entry),
        }
    }

    /// Place a piece without any rule checks, replacing the occupant.
    pub(crate) fn put(&mut self, at: Coord, piece: Piece) {
        self.squares[at.index()].piece = Some(piece);
    }

    /// Detach and return the occupant of `at`.
    pub(crate) fn take(&mut self, at: Coord) -> Option<Piece> {
        self.squares[at.index()].piece.take()
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Coord> {
        self.squares
            .iter()
            .find(|sq| matches!(sq.piece, Some(p) if p.is(PieceKind::King, color)))
            .map(|sq| sq.coord)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
