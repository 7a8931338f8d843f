//! # klotski-engine
//!
//! A sliding-block puzzle board and move-legality engine.
//!
//! A rectangular grid holds pieces of varying footprint sizes; a piece
//! may move when its entire footprint lands on unoccupied cells. This
//! crate is the board and legality core only; solving and presentation
//! live elsewhere.
//!
//! ## Design Principles
//!
//! 1. **Derived vacancy**: Only solid pieces are stored. A cell is
//!    empty iff no stored piece's footprint covers it - there are no
//!    placeholder "empty" pieces to keep in sync after a move.
//!
//! 2. **Identity-keyed mutation**: The board owns every piece;
//!    external code holds `PieceId`s. The single mutator,
//!    `Board::apply_move`, resolves the key itself and re-validates
//!    legality on every call.
//!
//! 3. **Table-driven catalog**: Piece kinds and their dimensions live
//!    in one static table; move logic never matches on kinds.
//!
//! 4. **Concrete regions**: Footprints are enumerable coordinate
//!    sets, not predicates. Every footprint is at most 2x2, so the
//!    sets stay inline and directly comparable in tests.
//!
//! ## Modules
//!
//! - `geometry`: coordinates, directions, footprints
//! - `pieces`: the kind catalog and piece instances
//! - `board`: the owned board state, layouts, the single mutation path
//! - `rules`: advisory move-legality evaluation

pub mod board;
pub mod geometry;
pub mod pieces;
pub mod rules;

// Re-export commonly used types
pub use crate::board::{Board, Layout, MoveError};
pub use crate::geometry::{Coord, Direction, Footprint, FootprintCells};
pub use crate::pieces::{Piece, PieceId, PieceKind};
pub use crate::rules::MoveEvaluator;
