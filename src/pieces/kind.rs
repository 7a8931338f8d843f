//! The piece kind catalog.
//!
//! Kinds are static configuration: each has a fixed (width, height)
//! held in one dimension table. Move logic never matches on kinds -
//! adding a kind is a table edit, nothing else.
//!
//! ## Empty
//!
//! `Empty` belongs to the catalog vocabulary but is never stored on a
//! board: vacancy is derived from the cells no solid piece covers.

use serde::{Deserialize, Serialize};

use crate::geometry::Footprint;

/// A kind of sliding piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// 1 wide x 2 tall.
    Tall,
    /// 2 wide x 2 tall.
    Fat,
    /// 2 wide x 1 tall.
    Wide,
    /// 1x1.
    Normal,
    /// 1x1 vacancy marker; never placed on a board.
    Empty,
}

/// Dimension table for every catalog kind.
const DIMENSIONS: [(PieceKind, Footprint); 5] = [
    (PieceKind::Tall, Footprint::new(1, 2)),
    (PieceKind::Fat, Footprint::new(2, 2)),
    (PieceKind::Wide, Footprint::new(2, 1)),
    (PieceKind::Normal, Footprint::new(1, 1)),
    (PieceKind::Empty, Footprint::new(1, 1)),
];

impl PieceKind {
    /// Fixed (width, height) of this kind.
    ///
    /// Table lookup. The enum is closed, so the lookup is total;
    /// it panics only if the table and the enum ever drift.
    #[must_use]
    pub fn dimensions(self) -> Footprint {
        DIMENSIONS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, dims)| *dims)
            .unwrap_or_else(|| panic!("Kind {:?} missing from dimension table", self))
    }

    /// Does this kind occupy space as a stored piece?
    ///
    /// Everything but `Empty`.
    #[must_use]
    pub fn is_solid(self) -> bool {
        !matches!(self, PieceKind::Empty)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PieceKind::Tall => "tall",
            PieceKind::Fat => "fat",
            PieceKind::Wide => "wide",
            PieceKind::Normal => "normal",
            PieceKind::Empty => "empty",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [PieceKind; 5] = [
        PieceKind::Tall,
        PieceKind::Fat,
        PieceKind::Wide,
        PieceKind::Normal,
        PieceKind::Empty,
    ];

    #[test]
    fn test_every_kind_has_dimensions() {
        // Guards against the enum and the table drifting apart.
        for kind in ALL_KINDS {
            let dims = kind.dimensions();
            assert!(dims.width >= 1);
            assert!(dims.height >= 1);
        }
    }

    #[test]
    fn test_reference_dimensions() {
        assert_eq!(PieceKind::Tall.dimensions(), Footprint::new(1, 2));
        assert_eq!(PieceKind::Fat.dimensions(), Footprint::new(2, 2));
        assert_eq!(PieceKind::Wide.dimensions(), Footprint::new(2, 1));
        assert_eq!(PieceKind::Normal.dimensions(), Footprint::new(1, 1));
        assert_eq!(PieceKind::Empty.dimensions(), Footprint::new(1, 1));
    }

    #[test]
    fn test_only_empty_is_not_solid() {
        for kind in ALL_KINDS {
            assert_eq!(kind.is_solid(), kind != PieceKind::Empty);
        }
    }
}
