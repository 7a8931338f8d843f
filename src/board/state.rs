//! The board: owned piece collection and the single mutation path.
//!
//! ## Vacancy
//!
//! Only solid pieces are stored. A cell is empty iff it is in bounds
//! and no stored piece's footprint covers it. Moving a piece therefore
//! rewrites exactly one anchor; the vacated cells become vacant by
//! derivation, with no placeholder bookkeeping.
//!
//! ## Ownership
//!
//! The board owns every `Piece` exclusively. External code holds
//! `PieceId`s (or looks an id up by name) and goes through the board
//! for every read and for the one mutation, `apply_move`.

use rustc_hash::FxHashMap;

use super::error::MoveError;
use crate::geometry::{Coord, Direction, FootprintCells};
use crate::pieces::{Piece, PieceId};
use crate::rules::MoveEvaluator;

/// A sliding-block puzzle board.
///
/// Constructed once from a [`Layout`](super::Layout) (or
/// [`Board::classic`](Board::classic)); mutated only by successful
/// moves. A board is a plain owned value - one puzzle session, one
/// board, and independent sessions are independent values.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,

    /// Piece storage keyed by identity.
    pieces: FxHashMap<PieceId, Piece>,

    /// Insertion order, so iteration is stable across runs.
    order: Vec<PieceId>,
}

impl Board {
    pub(crate) fn with_dimensions(width: i32, height: i32) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "Board dimensions must be at least 1x1, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            pieces: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Add a piece to the board.
    ///
    /// Panics on duplicate identity or name; layout validation
    /// (bounds, overlap, solidity) happens in `Layout::build`.
    pub(crate) fn insert(&mut self, piece: Piece) {
        if self.pieces.contains_key(&piece.id) {
            panic!("Piece with ID {} already on the board", piece.id);
        }
        if self.find(&piece.name).is_some() {
            panic!("Piece named {:?} already on the board", piece.name);
        }
        self.order.push(piece.id);
        self.pieces.insert(piece.id, piece);
    }

    // === Dimensions ===

    /// Board width in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Is `coord` inside `[1, width] x [1, height]`?
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.col >= 1 && coord.col <= self.width && coord.row >= 1 && coord.row <= self.height
    }

    // === Piece access ===

    /// Get a piece by identity.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Look up a piece id by display name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PieceId> {
        self.pieces()
            .find(|piece| piece.name == name)
            .map(|piece| piece.id)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Iterate pieces in insertion order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.order.iter().map(|id| &self.pieces[id])
    }

    /// The piece whose footprint covers `coord`, if any.
    ///
    /// `None` for vacant and out-of-bounds coordinates.
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.pieces().find(|piece| piece.covers(coord))
    }

    /// Is `coord` an in-bounds cell no piece covers?
    ///
    /// Convenience forwarding to [`MoveEvaluator::is_empty`].
    #[must_use]
    pub fn is_empty(&self, coord: Coord) -> bool {
        MoveEvaluator::new(self).is_empty(coord)
    }

    /// The cells a piece currently occupies, for rendering or
    /// highlighting. Complete and duplicate-free; row-major order.
    #[must_use]
    pub fn grid_spaces(&self, id: PieceId) -> Option<FootprintCells> {
        self.get(id).map(Piece::footprint)
    }

    // === Mutation ===

    /// Move a piece to a new anchor.
    ///
    /// Legality is re-validated here regardless of any earlier
    /// [`MoveEvaluator::can_move`] answer the caller obtained. On
    /// error the board is unchanged.
    pub fn apply_move(&mut self, id: PieceId, new_anchor: Coord) -> Result<(), MoveError> {
        let verdict = {
            let piece = self.pieces.get(&id).ok_or(MoveError::UnknownPiece(id))?;
            if MoveEvaluator::new(self).can_move(piece, new_anchor) {
                Ok(())
            } else if piece
                .footprint_at(new_anchor)
                .iter()
                .any(|&cell| !self.in_bounds(cell))
            {
                Err(MoveError::OutOfBounds(new_anchor))
            } else {
                Err(MoveError::Blocked(new_anchor))
            }
        };

        match verdict {
            Ok(()) => {
                let piece = self
                    .pieces
                    .get_mut(&id)
                    .expect("piece disappeared between validation and move");
                log::debug!("{} moves {} -> {}", piece.name, piece.anchor, new_anchor);
                piece.anchor = new_anchor;
                Ok(())
            }
            Err(err) => {
                log::trace!("move rejected for {}: {}", id, err);
                Err(err)
            }
        }
    }

    /// Slide a piece one step in `direction`.
    ///
    /// Resolves the shifted anchor, then goes through [`apply_move`](Board::apply_move).
    pub fn slide(&mut self, id: PieceId, direction: Direction) -> Result<(), MoveError> {
        let piece = self.pieces.get(&id).ok_or(MoveError::UnknownPiece(id))?;
        let target = piece.anchor.step(direction);
        self.apply_move(id, target)
    }
}
