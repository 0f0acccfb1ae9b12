pub mod board;
pub mod game;
pub mod session;

pub use board::{Board, Color, Coord, GameStatus, Piece, PieceKind, PlainBoard, Square};
pub use game::{Game, MoveReport};
pub use session::{SessionConfig, SessionError, SessionStore};
