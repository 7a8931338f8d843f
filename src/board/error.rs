//! Errors reported by the move API.

use thiserror::Error;

use crate::geometry::Coord;
use crate::pieces::PieceId;

/// A rejected move request.
///
/// Every variant leaves the board unchanged: `Board::apply_move` is
/// all-or-nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The request names a piece the board does not own.
    #[error("unknown piece: {0}")]
    UnknownPiece(PieceId),

    /// The candidate footprint exits the board's fixed dimensions.
    #[error("footprint out of bounds at anchor {0}")]
    OutOfBounds(Coord),

    /// A cell of the candidate footprint is covered by a solid piece.
    #[error("target blocked at anchor {0}")]
    Blocked(Coord),
}
