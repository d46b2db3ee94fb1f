//! Frontier move generation
//!
//! Successor boards are restricted to the frontier: empty cells with at
//! least one occupied 8-neighbor. This keeps the branching factor near the
//! action instead of spanning 100+ empty cells, which is what makes a
//! depth-3 search tractable on an 11x11 board.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// 8-neighborhood offsets, probed in a fixed order.
const NEIGHBORS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (0, 1),
    (0, -1),
];

/// Expand a board into its frontier successors for `side`.
///
/// Returns one `(board-copy, position)` pair per empty cell adjacent to at
/// least one stone of either color, enumerated row-major. Each child is an
/// independent copy of the parent with one stone added, so trial moves in
/// one branch cannot leak into another. On a board with no stones the
/// frontier is empty.
#[must_use]
pub fn children(board: &Board, side: Stone) -> Vec<(Board, Pos)> {
    debug_assert_ne!(side, Stone::Empty, "moves belong to a real side");

    let mut out = Vec::with_capacity(32);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row as u8, col as u8);
            if board.is_empty_at(pos) && has_occupied_neighbor(board, pos) {
                out.push((board.child(pos, side), pos));
            }
        }
    }
    out
}

/// Whether any in-bounds 8-neighbor of `pos` holds a stone.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn has_occupied_neighbor(board: &Board, pos: Pos) -> bool {
    NEIGHBORS.iter().any(|&(dr, dc)| {
        let r = i32::from(pos.row) + dr;
        let c = i32::from(pos.col) + dc;
        Pos::is_valid(r, c) && !board.is_empty_at(Pos::new(r as u8, c as u8))
    })
}
