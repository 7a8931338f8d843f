//! Board construction.
//!
//! A `Layout` collects named placements and validates the whole
//! arrangement once, at `build`. A bad arrangement is a programmer
//! error - `build` panics rather than returning `Result`, the same
//! contract as inserting a duplicate identity.

use super::state::Board;
use crate::geometry::Coord;
use crate::pieces::{Piece, PieceId, PieceKind};

/// Builder for a board with a fixed piece arrangement.
///
/// ## Example
///
/// ```
/// use klotski_engine::{Coord, Layout, PieceKind};
///
/// let board = Layout::new(2, 2)
///     .place("lone", PieceKind::Normal, Coord::new(1, 1))
///     .build();
///
/// assert_eq!(board.len(), 1);
/// assert!(board.is_empty(Coord::new(2, 2)));
/// ```
pub struct Layout {
    width: i32,
    height: i32,
    placements: Vec<(String, PieceKind, Coord)>,
}

impl Layout {
    /// Start a layout for a `width` x `height` board.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "Board dimensions must be at least 1x1, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            placements: Vec::new(),
        }
    }

    /// Add a named piece anchored at `anchor` (top-left cell).
    #[must_use]
    pub fn place(mut self, name: impl Into<String>, kind: PieceKind, anchor: Coord) -> Self {
        self.placements.push((name.into(), kind, anchor));
        self
    }

    /// The classic 4x5 arrangement.
    ///
    /// Four tall pieces, one fat, one wide, four normal; cells (2,5)
    /// and (3,5) start vacant.
    #[must_use]
    pub fn classic() -> Self {
        Layout::new(4, 5)
            .place("tall1", PieceKind::Tall, Coord::new(1, 1))
            .place("fatPiece", PieceKind::Fat, Coord::new(2, 1))
            .place("tall2", PieceKind::Tall, Coord::new(4, 1))
            .place("tall3", PieceKind::Tall, Coord::new(1, 3))
            .place("widePiece", PieceKind::Wide, Coord::new(2, 3))
            .place("tall4", PieceKind::Tall, Coord::new(4, 3))
            .place("normal1", PieceKind::Normal, Coord::new(2, 4))
            .place("normal2", PieceKind::Normal, Coord::new(3, 4))
            .place("normal3", PieceKind::Normal, Coord::new(1, 5))
            .place("normal4", PieceKind::Normal, Coord::new(4, 5))
    }

    /// Build the board, assigning ids in placement order.
    ///
    /// Panics on an `Empty` placement, a duplicate name, or a
    /// footprint that leaves the board or overlaps an earlier one.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::with_dimensions(self.width, self.height);

        for (index, (name, kind, anchor)) in self.placements.into_iter().enumerate() {
            assert!(
                kind.is_solid(),
                "Cannot place {} piece {:?}: vacancy is derived, not placed",
                kind,
                name
            );

            let piece = Piece::new(PieceId::new(index as u32), name, kind, anchor);
            for &cell in piece.footprint().iter() {
                assert!(
                    board.in_bounds(cell),
                    "Piece {:?} leaves the board at {}",
                    piece.name,
                    cell
                );
                if let Some(other) = board.piece_at(cell) {
                    panic!(
                        "Piece {:?} overlaps {:?} at {}",
                        piece.name, other.name, cell
                    );
                }
            }
            board.insert(piece);
        }

        board
    }
}

impl Board {
    /// An initialized board in the classic reference layout.
    #[must_use]
    pub fn classic() -> Board {
        Layout::classic().build()
    }
}
