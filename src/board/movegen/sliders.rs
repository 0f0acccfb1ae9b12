//! Line-of-sight queries used by the sliding pieces.
//!
//! Each query returns false when the two coordinates are not on that kind of
//! line, and otherwise checks the squares strictly between them.

use super::super::{Board, Coord};

impl Board {
    /// Same column, nothing in between.
    #[must_use]
    pub fn is_empty_vertical(&self, from: Coord, to: Coord) -> bool {
        if from.x != to.x {
            return false;
        }
        let (low, high) = (from.y.min(to.y), from.y.max(to.y));
        (low + 1..high).all(|y| self.is_empty(Coord { x: from.x, y }))
    }

    /// Same row, nothing in between.
    #[must_use]
    pub fn is_empty_horizontal(&self, from: Coord, to: Coord) -> bool {
        if from.y != to.y {
            return false;
        }
        let (low, high) = (from.x.min(to.x), from.x.max(to.x));
        (low + 1..high).all(|x| self.is_empty(Coord { x, y: from.y }))
    }

    /// Same diagonal, nothing in between.
    #[must_use]
    pub fn is_empty_diagonal(&self, from: Coord, to: Coord) -> bool {
        let (dx, dy) = from.delta(to);
        if dx.abs() != dy.abs() {
            return false;
        }
        let (step_x, step_y) = (dx.signum(), dy.signum());
        (1..dx.abs()).all(|i| {
            from.offset(step_x * i, step_y * i)
                .is_some_and(|between| self.is_empty(between))
        })
    }
}
