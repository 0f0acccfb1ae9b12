//! Error types for board operations.
//!
//! Illegal moves are not errors: the rules report them as `false`, `None` or
//! an empty target list. These types cover malformed input only.

use std::fmt;

use super::{Color, Coord};

/// Error type for coordinate parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for decoding a plain board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The grid does not have 8 rows
    RowCount { found: usize },
    /// A row does not have 8 squares
    RowLength { row: usize, found: usize },
    /// A square's stored coordinates disagree with its grid position
    CoordinateMismatch {
        expected: Coord,
        found: (usize, usize),
    },
    /// A square's stored tint disagrees with `(x + y) mod 2`
    TintMismatch { at: Coord, found: Color },
    /// The last move points outside the board
    LastMoveOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::RowCount { found } => {
                write!(f, "Board must have 8 rows, found {found}")
            }
            CodecError::RowLength { row, found } => {
                write!(f, "Row {row} must have 8 squares, found {found}")
            }
            CodecError::CoordinateMismatch { expected, found } => {
                write!(
                    f,
                    "Square at {expected} claims coordinates ({}, {})",
                    found.0, found.1
                )
            }
            CodecError::TintMismatch { at, found } => {
                write!(f, "Square {at} has tint {found}, which is wrong for its position")
            }
            CodecError::LastMoveOutOfBounds { x, y } => {
                write!(f, "Last move refers to ({x}, {y}), outside the board")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Error type for structurally invalid positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// No king of this color on the board
    MissingKing { color: Color },
    /// More than one king of this color
    ExtraKing { color: Color, count: usize },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::ExtraKing { color, count } => {
                write!(f, "{color} has {count} kings")
            }
        }
    }
}

impl std::error::Error for PositionError {}
