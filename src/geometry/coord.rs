//! Grid coordinates.
//!
//! Coordinates are 1-indexed: the top-left cell of a board is (1, 1),
//! columns grow rightward, rows grow downward. `Coord::OFF_BOARD` is
//! the sentinel for a piece that has not been placed.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A grid coordinate: (column, row), 1-indexed on a board.
///
/// Plain `Copy` value with component-wise equality. Coordinates carry
/// no bounds information; (0, 0) and negative components are simply
/// off every board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column, growing rightward from 1.
    pub col: i32,
    /// Row, growing downward from 1.
    pub row: i32,
}

impl Coord {
    /// Sentinel for "not placed on any board".
    pub const OFF_BOARD: Coord = Coord { col: 0, row: 0 };

    /// Create a coordinate.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Translate by a cell offset.
    ///
    /// ```
    /// use klotski_engine::Coord;
    ///
    /// assert_eq!(Coord::new(2, 1).offset(1, 1), Coord::new(3, 2));
    /// ```
    #[must_use]
    pub const fn offset(self, dc: i32, dr: i32) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    /// The adjacent coordinate one step in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        self.offset(dc, dr)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
