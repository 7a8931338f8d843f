//! Piece instances - runtime piece state.
//!
//! A `Piece` is a specific piece on a specific board: identity, kind,
//! and current anchor. The board owns every instance exclusively;
//! everything else refers to pieces by `PieceId`.

use serde::{Deserialize, Serialize};

use super::kind::PieceKind;
use crate::geometry::{Coord, FootprintCells};

/// Unique identifier for a piece within a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A piece on a board.
///
/// The anchor is the top-left cell of the footprint; `Coord::OFF_BOARD`
/// means the piece has not been placed yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Identity, unique within the owning board.
    pub id: PieceId,

    /// Display name (for debugging/UI), unique within the owning board.
    pub name: String,

    /// Catalog kind; fixes the footprint dimensions.
    pub kind: PieceKind,

    /// Top-left cell of the current footprint.
    pub anchor: Coord,
}

impl Piece {
    /// Create a piece.
    #[must_use]
    pub fn new(id: PieceId, name: impl Into<String>, kind: PieceKind, anchor: Coord) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            anchor,
        }
    }

    /// Has the piece been placed on a board?
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.anchor != Coord::OFF_BOARD
    }

    /// The cells the footprint covers at the current anchor.
    #[must_use]
    pub fn footprint(&self) -> FootprintCells {
        self.kind.dimensions().cells(self.anchor)
    }

    /// The cells the footprint would cover anchored at `anchor`.
    #[must_use]
    pub fn footprint_at(&self, anchor: Coord) -> FootprintCells {
        self.kind.dimensions().cells(anchor)
    }

    /// Does the footprint cover `coord` at the current anchor?
    ///
    /// Containment arithmetic, no cell-set allocation.
    #[must_use]
    pub fn covers(&self, coord: Coord) -> bool {
        let dims = self.kind.dimensions();
        coord.col >= self.anchor.col
            && coord.col < self.anchor.col + dims.width
            && coord.row >= self.anchor.row
            && coord.row < self.anchor.row + dims.height
    }
}
