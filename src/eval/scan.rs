//! Line scanning: locating extendable runs of consecutive stones
//!
//! Two counting policies feed the evaluator:
//!
//! - [`count_runs`] scans rows left to right with a consecutive-stone
//!   counter and requires an open end (or an empty cell at a fixed offset
//!   behind the run) before a run counts.
//! - [`count_diagonal_runs`] slides a `length`x`length` window over the
//!   board and counts every fully-occupied SE diagonal, with no open-end
//!   requirement at all.
//!
//! The asymmetry between the two policies is deliberate and load-bearing
//! for the evaluator's tuning; do not harmonize them. Columns and the SW
//! diagonal are covered by re-running both counters on a rotated board
//! copy (see [`Board::rotated`]).

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// Count positions where an extendable run of `length` consecutive stones
/// of `side` exists along a row.
///
/// Scans each row left to right maintaining a consecutive counter. Once the
/// counter has reached `length`, the cell just after the run decides the
/// outcome: if it is empty the run counts; if it is occupied, the cell
/// exactly `length + 1` positions back is consulted instead (and only when
/// that offset stays on the board). A run flush against the right edge is
/// never revisited after the row ends, so it does not count.
///
/// Runs longer than `length` trigger the check once per `length` stones
/// accumulated, because the counter resets after each check.
#[must_use]
pub fn count_runs(board: &Board, side: Stone, length: usize) -> u32 {
    debug_assert_ne!(side, Stone::Empty, "runs belong to a real side");
    debug_assert!(length >= 1 && length <= BOARD_SIZE);

    let mut count = 0;
    for row in 0..BOARD_SIZE {
        let mut consecutive = 0;
        for col in 0..BOARD_SIZE {
            let cell = board.get(Pos::new(row as u8, col as u8));
            if consecutive >= length {
                if cell == Stone::Empty {
                    count += 1;
                } else if col >= length + 1
                    && board.is_empty_at(Pos::new(row as u8, (col - length - 1) as u8))
                {
                    count += 1;
                }
                consecutive = 0;
            }
            if cell == side {
                consecutive += 1;
            } else {
                consecutive = 0;
            }
        }
    }
    count
}

/// Count `length`x`length` windows whose SE diagonal is entirely `side`.
///
/// Unlike [`count_runs`], a find needs no open end: any fully-occupied
/// window diagonal counts, and overlapping windows over a longer run each
/// count separately.
#[must_use]
pub fn count_diagonal_runs(board: &Board, side: Stone, length: usize) -> u32 {
    debug_assert_ne!(side, Stone::Empty, "runs belong to a real side");
    debug_assert!(length >= 1 && length <= BOARD_SIZE);

    let mut count = 0;
    for row in 0..=(BOARD_SIZE - length) {
        for col in 0..=(BOARD_SIZE - length) {
            let filled = (0..length)
                .all(|i| board.get(Pos::new((row + i) as u8, (col + i) as u8)) == side);
            if filled {
                count += 1;
            }
        }
    }
    count
}
