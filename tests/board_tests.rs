//! Board tests - collision, locking and row clearing

use blockfall::core::{spawn_shape, Board, Shape};
use blockfall::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

fn i_piece() -> Shape {
    Shape::from_rows(&[[1u8, 1, 1, 1]]).unwrap()
}

fn snapshot(board: &Board) -> Vec<Vec<Cell>> {
    board.rows().map(|r| r.to_vec()).collect()
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(EMPTY), "({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
    assert!(!board.is_occupied(0, -1));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::default();
    assert!(!board.set(-1, 0, 1));
    assert!(!board.set(0, BOARD_HEIGHT as i32, 1));
    assert!(board.set(9, 19, 1));
    assert!(board.is_occupied(9, 19));
}

#[test]
fn test_i_piece_in_bounds_does_not_collide() {
    let board = Board::new(10, 20);
    assert!(!board.collides(&i_piece(), 4, 0));
}

#[test]
fn test_i_piece_past_right_edge_collides() {
    let board = Board::new(10, 20);
    assert!(!board.collides(&i_piece(), 6, 0));
    assert!(board.collides(&i_piece(), 8, 0));
}

#[test]
fn test_walls_and_floor_collide() {
    let board = Board::default();
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        let max_x = (BOARD_WIDTH - shape.width()) as i32;
        let max_y = (BOARD_HEIGHT - shape.height()) as i32;

        assert!(!board.collides(&shape, 0, 0), "{:?}", kind);
        assert!(!board.collides(&shape, max_x, max_y), "{:?}", kind);
        assert!(board.collides(&shape, -1, 0), "{:?}", kind);
        assert!(board.collides(&shape, max_x + 1, 0), "{:?}", kind);
        assert!(board.collides(&shape, 0, max_y + 1), "{:?}", kind);
    }
}

#[test]
fn test_top_edge_is_open() {
    let board = Board::default();
    assert!(!board.collides(&i_piece(), 3, -1));
    assert!(!board.collides(&spawn_shape(PieceKind::O), 3, -2));
}

#[test]
fn test_occupied_cell_collides() {
    let mut board = Board::default();
    board.set(5, 10, 2);
    assert!(board.collides(&i_piece(), 4, 10));
    assert!(!board.collides(&i_piece(), 4, 9));
    assert!(!board.collides(&i_piece(), 6, 10));
}

#[test]
fn test_empty_shape_cells_do_not_collide() {
    let mut board = Board::default();
    // T is [[1,1,1],[0,1,0]]; its bottom corners are holes.
    board.set(0, 1, 3);
    let t = spawn_shape(PieceKind::T);
    assert!(!board.collides(&t, 0, 0));
}

#[test]
fn test_lock_writes_values_and_skips_outside() {
    let mut board = Board::default();
    let t = spawn_shape(PieceKind::T);

    assert_eq!(board.lock(&t, 0, 18), 4);
    assert_eq!(board.get(1, 19), Some(PieceKind::T.code()));
    assert_eq!(board.get(0, 19), Some(EMPTY));

    assert_eq!(board.lock(&t, 5, -1), 1);
    assert_eq!(board.get(6, 0), Some(PieceKind::T.code()));
}

#[test]
fn test_clearing_single_bottom_row_leaves_empty_board() {
    let mut board = Board::new(10, 20);
    for x in 0..10 {
        board.set(x, 19, 1);
    }

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.height(), 20);
    assert_eq!(board.rows().count(), 20);
    assert!(board.cells().iter().all(|&c| c == EMPTY));
}

#[test]
fn test_clearing_inserts_one_empty_row_on_top() {
    let mut board = Board::new(4, 5);
    board.set(1, 0, 9);
    board.set(2, 2, 8);
    for x in 0..4 {
        board.set(x, 3, 1);
    }

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(
        snapshot(&board),
        vec![
            vec![0, 0, 0, 0],
            vec![0, 9, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 8, 0],
            vec![0, 0, 0, 0],
        ]
    );
}

#[test]
fn test_adjacent_full_rows_clear_in_one_pass() {
    let mut board = Board::new(4, 6);
    board.set(0, 2, 5);
    for y in 3..6 {
        for x in 0..4 {
            board.set(x, y, 1);
        }
    }

    assert_eq!(board.clear_full_rows(), 3);
    assert_eq!(board.height(), 6);
    assert!(board.is_occupied(0, 5));
    assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY).count(), 1);
    assert_eq!(board.clear_full_rows(), 0);
}

#[test]
fn test_split_full_rows_both_clear() {
    let rows: [[Cell; 3]; 5] = [
        [0, 0, 0],
        [1, 1, 1],
        [0, 4, 0],
        [1, 1, 1],
        [4, 0, 4],
    ];
    let mut board = Board::from_rows(&rows).unwrap();

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(
        snapshot(&board),
        vec![
            vec![0, 0, 0],
            vec![0, 0, 0],
            vec![0, 0, 0],
            vec![0, 4, 0],
            vec![4, 0, 4],
        ]
    );
}

#[test]
fn test_clear_resets_everything() {
    let mut board = Board::default();
    board.set(3, 3, 1);
    board.clear();
    assert_eq!(board, Board::default());
}
