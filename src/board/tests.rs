use super::*;
use crate::error::Error;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_values() {
    assert_eq!(Stone::Empty.value(), 0);
    assert_eq!(Stone::Black.value(), 1);
    assert_eq!(Stone::White.value(), -1);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 11);
    assert_eq!(TOTAL_CELLS, 121);
}

#[test]
fn test_pos_center() {
    assert_eq!(Pos::center(), Pos::new(5, 5));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(10, 10));
    assert!(Pos::is_valid(5, 5));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(11, 0));
    assert!(!Pos::is_valid(0, 11));
}

#[test]
fn test_pos_try_new() {
    assert_eq!(Pos::try_new(3, 7), Ok(Pos::new(3, 7)));
    assert_eq!(
        Pos::try_new(-1, 7),
        Err(Error::OutOfBounds { row: -1, col: 7 })
    );
    assert_eq!(
        Pos::try_new(4, 11),
        Err(Error::OutOfBounds { row: 4, col: 11 })
    );
}

#[test]
fn test_pos_index() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(5, 5).to_index(), 60);
    assert_eq!(Pos::new(10, 10).to_index(), 120);
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.place_stone(Pos::new(5, 5), Stone::Black);
    assert_eq!(board.get(Pos::new(5, 5)), Stone::Black);
    assert!(!board.is_empty_at(Pos::new(5, 5)));
    assert!(board.is_empty_at(Pos::new(5, 6)));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_board_child_isolation() {
    let board = Board::new();
    let child = board.child(Pos::new(2, 3), Stone::White);

    assert_eq!(child.get(Pos::new(2, 3)), Stone::White);
    assert!(board.is_board_empty(), "parent board must not be mutated");
}

#[test]
fn test_is_legal_move() {
    let mut board = Board::new();
    board.place_stone(Pos::new(5, 5), Stone::Black);

    assert!(board.is_legal_move(5, 6));
    assert!(!board.is_legal_move(5, 5), "occupied cell is illegal");
    assert!(!board.is_legal_move(-1, 5));
    assert!(!board.is_legal_move(5, 11));
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    assert!(!board.is_full());

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let stone = if (row + col) % 2 == 0 {
                Stone::Black
            } else {
                Stone::White
            };
            board.place_stone(Pos::new(row as u8, col as u8), stone);
        }
    }
    assert!(board.is_full());
}

#[test]
fn test_rotation_moves_corner() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);

    let rotated = board.rotated();
    // Counter-clockwise quarter turn: top-left corner lands bottom-left.
    assert_eq!(rotated.get(Pos::new(10, 0)), Stone::Black);
    assert_eq!(rotated.stone_count(), 1);
}

#[test]
fn test_rotation_turns_column_into_row() {
    let mut board = Board::new();
    // Vertical run at column 3, rows 2..=5
    for row in 2..=5u8 {
        board.place_stone(Pos::new(row, 3), Stone::White);
    }

    let rotated = board.rotated();
    // rotated[r][c] = board[c][10 - r], so column 3 becomes row 7.
    for col in 2..=5u8 {
        assert_eq!(rotated.get(Pos::new(7, col)), Stone::White);
    }
}

#[test]
fn test_rotation_preserves_stone_count() {
    let mut board = Board::new();
    board.place_stone(Pos::new(1, 9), Stone::Black);
    board.place_stone(Pos::new(4, 4), Stone::White);
    board.place_stone(Pos::new(10, 0), Stone::Black);

    assert_eq!(board.rotated().stone_count(), board.stone_count());
}
