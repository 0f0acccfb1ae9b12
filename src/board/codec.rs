//! Plain, transport-safe representation of a board.
//!
//! `encode` flattens a `Board` into nested rows of plain squares plus the two
//! capture lists and the last move; `decode` rebuilds it. With the `serde`
//! feature the plain types serialize to the JSON shape the game clients
//! exchange:
//!
//! ```text
//! { "cells": [[{"x":0,"y":0,"color":"white","figure":{"type":"Rook","color":"black","hasMoved":false}}, ...], ...],
//!   "lostBlackFigures": [{"type":"Pawn","color":"black"}],
//!   "lostWhiteFigures": [],
//!   "lastMove": {"from":{"x":4,"y":1},"to":{"x":4,"y":3}} }
//! ```
//!
//! Pawns carry `isFirstStep`; every other piece carries `hasMoved`, so castling
//! rights survive a round trip. Capture-list entries carry kind and color only.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::CodecError;
use super::{Board, Color, Coord, LastMove, Piece, PieceKind, Square};

/// Plain board: 8 rows of 8 squares, indexed `cells[y][x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlainBoard {
    pub cells: Vec<Vec<PlainSquare>>,
    /// Black pieces taken by White
    #[cfg_attr(feature = "serde", serde(rename = "lostBlackFigures"))]
    pub captured_by_white: Vec<PlainPiece>,
    /// White pieces taken by Black
    #[cfg_attr(feature = "serde", serde(rename = "lostWhiteFigures"))]
    pub captured_by_black: Vec<PlainPiece>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub last_move: Option<PlainMove>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlainSquare {
    pub x: usize,
    pub y: usize,
    #[cfg_attr(feature = "serde", serde(rename = "color"))]
    pub tint: Color,
    #[cfg_attr(feature = "serde", serde(rename = "figure"))]
    pub piece: Option<PlainPiece>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlainPiece {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: PieceKind,
    pub color: Color,
    /// Pawns only
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub is_first_step: Option<bool>,
    /// Every kind except pawns
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub has_moved: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlainCoord {
    pub x: usize,
    pub y: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlainMove {
    pub from: PlainCoord,
    pub to: PlainCoord,
}

impl PlainPiece {
    /// Kind and color only, as stored in capture lists.
    #[must_use]
    pub const fn bare(kind: PieceKind, color: Color) -> Self {
        PlainPiece {
            kind,
            color,
            is_first_step: None,
            has_moved: None,
        }
    }

    fn from_piece(piece: Piece) -> Self {
        let mut plain = PlainPiece::bare(piece.kind, piece.color);
        if piece.kind == PieceKind::Pawn {
            plain.is_first_step = Some(piece.is_first_step());
        } else {
            plain.has_moved = Some(piece.moved);
        }
        plain
    }

    /// Missing flags mean the piece has not moved.
    fn to_piece(self) -> Piece {
        let moved = match self.kind {
            PieceKind::Pawn => self.is_first_step.is_some_and(|first| !first),
            _ => self.has_moved.unwrap_or(false),
        };
        Piece::new(self.kind, self.color).with_moved(moved)
    }
}

impl From<Coord> for PlainCoord {
    fn from(c: Coord) -> Self {
        PlainCoord { x: c.x, y: c.y }
    }
}

impl TryFrom<PlainCoord> for Coord {
    type Error = CodecError;

    fn try_from(c: PlainCoord) -> Result<Self, Self::Error> {
        Coord::new(c.x, c.y).ok_or(CodecError::LastMoveOutOfBounds { x: c.x, y: c.y })
    }
}

/// Flatten a board into its plain form.
#[must_use]
pub fn encode(board: &Board) -> PlainBoard {
    let cells = board
        .squares()
        .chunks(8)
        .map(|row| {
            row.iter()
                .map(|sq| PlainSquare {
                    x: sq.coord.x,
                    y: sq.coord.y,
                    tint: sq.tint,
                    piece: sq.piece.map(PlainPiece::from_piece),
                })
                .collect()
        })
        .collect();

    let bare = |p: &Piece| PlainPiece::bare(p.kind, p.color);
    PlainBoard {
        cells,
        captured_by_white: board.captured_by_white.iter().map(bare).collect(),
        captured_by_black: board.captured_by_black.iter().map(bare).collect(),
        last_move: board.last_move.map(|m| PlainMove {
            from: m.from.into(),
            to: m.to.into(),
        }),
    }
}

/// Rebuild a board from its plain form.
///
/// Every square must sit at the grid position its coordinates claim and
/// carry the tint that position implies.
pub fn decode(plain: &PlainBoard) -> Result<Board, CodecError> {
    if plain.cells.len() != 8 {
        return Err(CodecError::RowCount {
            found: plain.cells.len(),
        });
    }

    let mut board = Board::empty();
    for (y, row) in plain.cells.iter().enumerate() {
        if row.len() != 8 {
            return Err(CodecError::RowLength {
                row: y,
                found: row.len(),
            });
        }
        for (x, cell) in row.iter().enumerate() {
            let expected = Coord { x, y };
            if (cell.x, cell.y) != (x, y) {
                return Err(CodecError::CoordinateMismatch {
                    expected,
                    found: (cell.x, cell.y),
                });
            }
            if cell.tint != Square::empty(expected).tint() {
                return Err(CodecError::TintMismatch {
                    at: expected,
                    found: cell.tint,
                });
            }
            if let Some(piece) = cell.piece {
                board.put(expected, piece.to_piece());
            }
        }
    }

    let free_standing = |p: &PlainPiece| Piece::new(p.kind, p.color);
    board.captured_by_white = plain.captured_by_white.iter().map(free_standing).collect();
    board.captured_by_black = plain.captured_by_black.iter().map(free_standing).collect();

    board.last_move = plain
        .last_move
        .map(|m| -> Result<LastMove, CodecError> {
            Ok(LastMove {
                from: m.from.try_into()?,
                to: m.to.try_into()?,
            })
        })
        .transpose()?;

    Ok(board)
}

impl From<&Board> for PlainBoard {
    fn from(board: &Board) -> Self {
        encode(board)
    }
}

impl TryFrom<&PlainBoard> for Board {
    type Error = CodecError;

    fn try_from(plain: &PlainBoard) -> Result<Self, Self::Error> {
        decode(plain)
    }
}
