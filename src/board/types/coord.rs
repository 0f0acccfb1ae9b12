//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A location on the board: `x` is the column, `y` the row.
///
/// Row 0 is Black's home rank, row 7 is White's. In algebraic naming the file
/// is `a + x` and the rank is `8 - y`, so White's king starts on e1 = (4, 7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    // Field order gives row-major ordering.
    pub y: usize,
    pub x: usize,
}

impl Coord {
    /// Create a coordinate with bounds checking
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Coord { x, y })
        } else {
            None
        }
    }

    /// Coordinate from a flat row-major index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Coord {
            x: idx % 8,
            y: idx / 8,
        }
    }

    /// Flat row-major index (`y * 8 + x`)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        debug_assert!(self.x < 8 && self.y < 8, "coordinate off the board");
        self.y * 8 + self.x
    }

    /// Step by a signed delta, `None` when it leaves the board.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x as isize + dx;
        let y = self.y as isize + dy;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Coord {
                x: x as usize,
                y: y as usize,
            })
        } else {
            None
        }
    }

    /// Signed (dx, dy) from `self` to `other`.
    #[inline]
    #[must_use]
    pub fn delta(self, other: Coord) -> (isize, isize) {
        (
            other.x as isize - self.x as isize,
            other.y as isize - self.y as isize,
        )
    }

    /// Iterate all 64 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.x as u8 + b'a') as char, 8 - self.y)
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = SquareError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        if x >= 8 {
            return Err(SquareError::FileOutOfBounds { file: x });
        }
        if y >= 8 {
            return Err(SquareError::RankOutOfBounds { rank: y });
        }
        Ok(Coord { x, y })
    }
}

impl FromStr for Coord {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let x = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let y = match rank {
            '1'..='8' => 7 - (rank as usize - '1' as usize),
            _ => return Err(invalid()),
        };

        Ok(Coord { x, y })
    }
}
