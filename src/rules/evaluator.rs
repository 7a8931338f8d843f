//! Move legality.
//!
//! The evaluator answers, against a given board state: is a cell
//! empty, does a piece's whole footprint fit at a candidate anchor,
//! may a piece move there. Purely advisory - it mutates nothing, and
//! `Board::apply_move` is the only code that does.

use crate::board::Board;
use crate::geometry::{Coord, Direction};
use crate::pieces::Piece;

/// Read-only legality view over a board.
///
/// Borrows the board it evaluates against; owns no piece data.
/// Calling any query repeatedly without an intervening `apply_move`
/// yields identical results.
pub struct MoveEvaluator<'a> {
    board: &'a Board,
}

impl<'a> MoveEvaluator<'a> {
    /// Create an evaluator over `board`.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Is `coord` an in-bounds cell not covered by any piece?
    ///
    /// Out-of-bounds coordinates are never empty.
    #[must_use]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.board.in_bounds(coord) && self.board.piece_at(coord).is_none()
    }

    /// Would `piece`'s whole footprint land on empty cells when
    /// anchored at `candidate_anchor`?
    ///
    /// Cells of the piece's own current footprint are not special-
    /// cased: callers pass genuinely candidate (not-yet-applied)
    /// anchors.
    #[must_use]
    pub fn fits(&self, piece: &Piece, candidate_anchor: Coord) -> bool {
        piece
            .footprint_at(candidate_anchor)
            .iter()
            .all(|&cell| self.is_empty(cell))
    }

    /// May `piece` move to `candidate_anchor`?
    ///
    /// The anchor cell is checked first: in the dominant rejection
    /// case that cell is already occupied, and the full footprint
    /// scan is skipped. Once both checks run, `fits` subsumes the
    /// anchor check - the ordering is only a short-circuit.
    #[must_use]
    pub fn can_move(&self, piece: &Piece, candidate_anchor: Coord) -> bool {
        if !self.is_empty(candidate_anchor) {
            return false;
        }
        self.fits(piece, candidate_anchor)
    }

    /// May `piece` slide one step in `direction`?
    #[must_use]
    pub fn can_slide(&self, piece: &Piece, direction: Direction) -> bool {
        self.can_move(piece, piece.anchor.step(direction))
    }
}
