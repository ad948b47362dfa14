//! Board tests - grid access, line search, deletion and garbage

use blockfall::core::rng::seeded;
use blockfall::core::Board;
use blockfall::types::PieceKind;

#[test]
fn test_board_new_empty() {
    let board = Board::new(12, 22);
    assert_eq!(board.width(), 12);
    assert_eq!(board.height(), 22);
    assert_eq!(board.cells().len(), 12 * 22);
    assert_eq!(board.occupied_count(), 0);
    assert!(board.search_full_lines().is_empty());
}

#[test]
fn test_board_get_out_of_bounds_is_empty() {
    let mut board = Board::new(12, 22);
    for y in 0..22 {
        board.fill_row_except(y, PieceKind::S, &[]);
    }

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(12, 0), None);
    assert_eq!(board.get(0, 22), None);
    assert_eq!(board.get(i32::MIN, i32::MAX), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(12, 22);

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(PieceKind::T));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), None);
}

#[test]
fn test_board_set_out_of_bounds_is_noop() {
    let mut board = Board::new(12, 22);
    let before = board.clone();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(12, 0, Some(PieceKind::T)));
    assert!(!board.set(0, 22, Some(PieceKind::T)));
    assert_eq!(board, before);
}

#[test]
fn test_inside_and_above() {
    let board = Board::new(12, 22);
    assert!(board.is_inside(0, 0));
    assert!(!board.is_inside(0, -1));
    assert!(board.is_inside_or_above(0, -5));
    assert!(!board.is_inside_or_above(-1, -5));
    assert!(!board.is_inside_or_above(12, 0));
    assert!(!board.is_inside_or_above(0, 22));
}

#[test]
fn test_search_full_lines_ascending() {
    let mut board = Board::new(8, 10);
    board.fill_row_except(9, PieceKind::I, &[]);
    board.fill_row_except(4, PieceKind::L, &[]);
    board.fill_row_except(6, PieceKind::J, &[3]);

    assert_eq!(board.search_full_lines(), vec![4, 9]);
}

#[test]
fn test_delete_lines_keeps_height_and_drops_rows_above() {
    let mut board = Board::new(8, 10);
    board.fill_row_except(9, PieceKind::I, &[]);
    board.fill_row_except(7, PieceKind::I, &[]);
    board.set(2, 8, Some(PieceKind::T));
    board.set(5, 3, Some(PieceKind::Z));

    let full = board.search_full_lines();
    board.delete_lines(&full);

    assert_eq!(board.height(), 10);
    assert_eq!(board.cells().len(), 80);
    assert!(board.search_full_lines().is_empty());
    // Row 8 sat between the two deleted rows and drops by one.
    assert_eq!(board.get(2, 9), Some(PieceKind::T));
    // Row 3 sat above both and drops by two.
    assert_eq!(board.get(5, 5), Some(PieceKind::Z));
    assert_eq!(board.row(0).unwrap(), &[None; 8]);
    assert_eq!(board.row(1).unwrap(), &[None; 8]);
}

#[test]
fn test_delete_lines_skips_rows_outside() {
    let mut board = Board::new(8, 10);
    board.set(0, 9, Some(PieceKind::O));
    board.delete_lines(&[10, 400]);
    assert_eq!(board.get(0, 9), Some(PieceKind::O));
}

#[test]
fn test_insert_lines_shape() {
    let mut rng = seeded(99);
    let mut board = Board::new(12, 22);
    board.insert_lines(3, &mut rng);

    for y in 0..19 {
        assert_eq!(board.row(y).unwrap(), &[None; 12]);
    }
    for y in 19..22 {
        let holes = board.row(y).unwrap().iter().filter(|c| c.is_none()).count();
        assert_eq!(holes, board.default_empty_count());
    }
}

#[test]
fn test_insert_lines_is_seed_deterministic() {
    let mut a = Board::new(10, 12);
    let mut b = Board::new(10, 12);
    a.insert_lines(6, &mut seeded(5));
    b.insert_lines(6, &mut seeded(5));
    assert_eq!(a, b);
}

#[test]
fn test_clear() {
    let mut board = Board::new(6, 4);
    board.fill_row_except(3, PieceKind::T, &[]);
    board.clear();
    assert_eq!(board.occupied_count(), 0);
}
