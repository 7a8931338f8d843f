//! Classic layout integration tests.
//!
//! These tests pin the reference 4x5 arrangement and the occupancy
//! queries against it, including the behaviors a UI layer relies on
//! (`grid_spaces`, `piece_at`, `is_empty`).

use klotski_engine::{Board, Coord, MoveEvaluator, PieceKind};

// =============================================================================
// Layout Shape
// =============================================================================

/// The classic board is 4 wide, 5 tall, with ten solid pieces.
#[test]
fn test_classic_shape() {
    let board = Board::classic();

    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 5);
    assert_eq!(board.len(), 10);
}

/// Every reference piece starts at its reference anchor.
#[test]
fn test_classic_initial_anchors() {
    let board = Board::classic();

    let expected = [
        ("tall1", PieceKind::Tall, Coord::new(1, 1)),
        ("fatPiece", PieceKind::Fat, Coord::new(2, 1)),
        ("tall2", PieceKind::Tall, Coord::new(4, 1)),
        ("tall3", PieceKind::Tall, Coord::new(1, 3)),
        ("widePiece", PieceKind::Wide, Coord::new(2, 3)),
        ("tall4", PieceKind::Tall, Coord::new(4, 3)),
        ("normal1", PieceKind::Normal, Coord::new(2, 4)),
        ("normal2", PieceKind::Normal, Coord::new(3, 4)),
        ("normal3", PieceKind::Normal, Coord::new(1, 5)),
        ("normal4", PieceKind::Normal, Coord::new(4, 5)),
    ];

    for (name, kind, anchor) in expected {
        let id = board.find(name).unwrap_or_else(|| panic!("missing piece {:?}", name));
        let piece = board.get(id).unwrap();
        assert_eq!(piece.kind, kind, "kind of {}", name);
        assert_eq!(piece.anchor, anchor, "anchor of {}", name);
    }
}

/// 18 of the 20 cells are covered, each by exactly one piece; the two
/// reference vacancies are (2,5) and (3,5).
#[test]
fn test_classic_coverage() {
    let board = Board::classic();
    let mut covered = 0;

    for row in 1..=5 {
        for col in 1..=4 {
            let coord = Coord::new(col, row);
            let owners = board
                .pieces()
                .filter(|piece| piece.covers(coord))
                .count();
            assert!(owners <= 1, "{} covered by {} pieces", coord, owners);
            covered += owners;

            let vacant = (col, row) == (2, 5) || (col, row) == (3, 5);
            assert_eq!(board.is_empty(coord), vacant, "emptiness of {}", coord);
        }
    }

    assert_eq!(covered, 18);
}

// =============================================================================
// Specification Scenarios
// =============================================================================

/// Scenario 1: tall1 at (1,1) occupies {(1,1), (1,2)}.
#[test]
fn test_grid_spaces_tall1() {
    let board = Board::classic();
    let tall1 = board.find("tall1").unwrap();

    let spaces = board.grid_spaces(tall1).unwrap();
    assert_eq!(spaces.as_slice(), &[Coord::new(1, 1), Coord::new(1, 2)]);
}

/// Scenario 2: fatPiece at (2,1) occupies {(2,1), (3,1), (2,2), (3,2)}.
#[test]
fn test_grid_spaces_fat_piece() {
    let board = Board::classic();
    let fat = board.find("fatPiece").unwrap();

    let spaces = board.grid_spaces(fat).unwrap();
    assert_eq!(
        spaces.as_slice(),
        &[
            Coord::new(2, 1),
            Coord::new(3, 1),
            Coord::new(2, 2),
            Coord::new(3, 2),
        ]
    );
}

/// Scenario 3: (2,5) starts empty, (1,1) does not.
#[test]
fn test_initial_emptiness() {
    let board = Board::classic();

    assert!(board.is_empty(Coord::new(2, 5)));
    assert!(!board.is_empty(Coord::new(1, 1)));
}

/// Scenario 4: normal1 may move into the adjacent vacancy at (2,5).
#[test]
fn test_can_move_into_vacancy() {
    let board = Board::classic();
    let eval = MoveEvaluator::new(&board);
    let normal1 = board.get(board.find("normal1").unwrap()).unwrap();

    assert!(eval.can_move(normal1, Coord::new(2, 5)));
}

/// Scenario 5: normal1 may not move onto (1,3), covered by tall3.
#[test]
fn test_cannot_move_onto_occupied_cell() {
    let board = Board::classic();
    let eval = MoveEvaluator::new(&board);
    let normal1 = board.get(board.find("normal1").unwrap()).unwrap();

    assert!(!eval.can_move(normal1, Coord::new(1, 3)));
}

/// Scenario 6: fatPiece does not fit at (2,3) - it would overlap
/// widePiece's occupied cells.
#[test]
fn test_fat_piece_does_not_fit_on_wide_piece() {
    let board = Board::classic();
    let eval = MoveEvaluator::new(&board);
    let fat = board.get(board.find("fatPiece").unwrap()).unwrap();

    assert!(!eval.fits(fat, Coord::new(2, 3)));
}

// =============================================================================
// Lookup Queries
// =============================================================================

/// `piece_at` resolves interior footprint cells, not just anchors.
#[test]
fn test_piece_at_interior_cell() {
    let board = Board::classic();

    assert_eq!(board.piece_at(Coord::new(3, 2)).unwrap().name, "fatPiece");
    assert_eq!(board.piece_at(Coord::new(1, 4)).unwrap().name, "tall3");
    assert_eq!(board.piece_at(Coord::new(3, 3)).unwrap().name, "widePiece");
}

/// `piece_at` misses on vacant and out-of-bounds coordinates.
#[test]
fn test_piece_at_misses() {
    let board = Board::classic();

    assert!(board.piece_at(Coord::new(2, 5)).is_none());
    assert!(board.piece_at(Coord::new(3, 5)).is_none());
    assert!(board.piece_at(Coord::new(0, 0)).is_none());
    assert!(board.piece_at(Coord::new(5, 1)).is_none());
    assert!(board.piece_at(Coord::new(1, 6)).is_none());
}

/// Two boards are independent sessions: moving on one does not touch
/// the other.
#[test]
fn test_independent_sessions() {
    let mut first = Board::classic();
    let second = Board::classic();

    let normal1 = first.find("normal1").unwrap();
    first.apply_move(normal1, Coord::new(2, 5)).unwrap();

    assert_eq!(
        second.get(second.find("normal1").unwrap()).unwrap().anchor,
        Coord::new(2, 4)
    );
}
