//! Piece footprints.
//!
//! A footprint is the axis-aligned width x height rectangle of cells a
//! piece covers, anchored at its top-left corner. `cells` derives the
//! concrete cell set for an anchor; it performs no bounds checking.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coord;

/// The cell set of one footprint.
///
/// Inline capacity covers the largest catalog kind (2x2), so deriving
/// a footprint never allocates.
pub type FootprintCells = SmallVec<[Coord; 4]>;

/// Width x height of a piece, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub width: i32,
    pub height: i32,
}

impl Footprint {
    /// Create a footprint.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Number of cells this footprint covers.
    #[must_use]
    pub const fn area(self) -> i32 {
        self.width * self.height
    }

    /// All cells covered when anchored at `anchor`.
    ///
    /// Exactly `width * height` distinct coordinates in row-major
    /// order: every `(anchor.col + dc, anchor.row + dr)` for `dc` in
    /// `[0, width)`, `dr` in `[0, height)`.
    ///
    /// ```
    /// use klotski_engine::{Coord, Footprint};
    ///
    /// let tall = Footprint::new(1, 2);
    /// let cells = tall.cells(Coord::new(1, 1));
    /// assert_eq!(cells.as_slice(), &[Coord::new(1, 1), Coord::new(1, 2)]);
    /// ```
    #[must_use]
    pub fn cells(self, anchor: Coord) -> FootprintCells {
        let mut cells = FootprintCells::new();
        for dr in 0..self.height {
            for dc in 0..self.width {
                cells.push(anchor.offset(dc, dr));
            }
        }
        cells
    }
}
