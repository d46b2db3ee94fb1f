//! Heuristic evaluation function for Gomoku board positions
//!
//! The evaluator scores a board from a single side's perspective by
//! counting extendable runs of that side's stones. It never net-scores
//! both sides; adversarial behavior comes entirely from the minimax
//! recursion alternating which side's score is maximized or minimized.

use crate::board::{Board, Stone};

use super::scan::{count_diagonal_runs, count_runs};
use super::weights::RunWeight;

/// Evaluate the board from the perspective of the given side.
///
/// Returns [`RunWeight::WIN`] if any five-in-a-row exists for `side`
/// (row or SE diagonal, on the board or on its rotated copy). Otherwise
/// returns the weighted run sum: fours weigh 4, threes weigh 3, twos
/// weigh 1, accumulated over both board orientations. The non-winning
/// score is always non-negative.
///
/// # Example
///
/// ```
/// use gomoku_agent::board::{Board, Pos, Stone};
/// use gomoku_agent::eval::evaluate;
///
/// let mut board = Board::new();
/// for col in 3..6 {
///     board.place_stone(Pos::new(5, col), Stone::Black);
/// }
/// assert!(evaluate(&board, Stone::Black) > 0);
/// assert_eq!(evaluate(&board, Stone::White), 0);
/// ```
#[must_use]
pub fn evaluate(board: &Board, side: Stone) -> i32 {
    debug_assert_ne!(side, Stone::Empty, "evaluation side must be a real side");

    let rotated = board.rotated();
    if has_winning_run(board, side) || has_winning_run(&rotated, side) {
        return RunWeight::WIN;
    }

    directional_score(board, side) + directional_score(&rotated, side)
}

/// Whether `side` has a five-in-a-row visible to the row or diagonal scan.
fn has_winning_run(board: &Board, side: Stone) -> bool {
    count_runs(board, side, 5) > 0 || count_diagonal_runs(board, side, 5) > 0
}

/// Weighted run sum over one board orientation.
#[allow(clippy::cast_possible_wrap)]
fn directional_score(board: &Board, side: Stone) -> i32 {
    let mut score = count_runs(board, side, 4) as i32 * RunWeight::FOUR;
    score += count_runs(board, side, 3) as i32 * RunWeight::THREE;
    score += count_runs(board, side, 2) as i32 * RunWeight::TWO;
    score += count_diagonal_runs(board, side, 4) as i32 * RunWeight::FOUR;
    score += count_diagonal_runs(board, side, 3) as i32 * RunWeight::THREE;
    score += count_diagonal_runs(board, side, 2) as i32 * RunWeight::TWO;
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Stone::Black), 0);
        assert_eq!(evaluate(&board, Stone::White), 0);
    }

    #[test]
    fn test_evaluate_deterministic() {
        let mut board = Board::new();
        board.place_stone(Pos::new(5, 5), Stone::Black);
        board.place_stone(Pos::new(5, 6), Stone::Black);
        board.place_stone(Pos::new(6, 6), Stone::White);

        let first = evaluate(&board, Stone::Black);
        let second = evaluate(&board, Stone::Black);
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_open_four_weight() {
        // Black run of 4 at row 5, cols 3..=6, both ends empty.
        let mut board = Board::new();
        for col in 3..=6u8 {
            board.place_stone(Pos::new(5, col), Stone::Black);
        }

        let score = evaluate(&board, Stone::Black);
        assert!(
            score >= RunWeight::FOUR,
            "four-run must contribute at least its weight, got {score}"
        );
        assert!(score < RunWeight::WIN);
    }

    #[test]
    fn test_evaluate_completing_four_wins() {
        let mut base = Board::new();
        for col in 3..=6u8 {
            base.place_stone(Pos::new(5, col), Stone::Black);
        }

        // Either open end completes five-in-a-row.
        let right = base.child(Pos::new(5, 7), Stone::Black);
        assert_eq!(evaluate(&right, Stone::Black), RunWeight::WIN);

        let left = base.child(Pos::new(5, 2), Stone::Black);
        assert_eq!(evaluate(&left, Stone::Black), RunWeight::WIN);
    }

    #[test]
    fn test_evaluate_win_iff_five_counted() {
        // The sentinel fires exactly when a scanner sees a length-5 run.
        let mut board = Board::new();
        for col in 2..=5u8 {
            board.place_stone(Pos::new(8, col), Stone::White);
        }
        let rotated = board.rotated();
        assert_eq!(count_runs(&board, Stone::White, 5), 0);
        assert_eq!(count_diagonal_runs(&board, Stone::White, 5), 0);
        assert_eq!(count_runs(&rotated, Stone::White, 5), 0);
        assert_eq!(count_diagonal_runs(&rotated, Stone::White, 5), 0);
        assert!(evaluate(&board, Stone::White) < RunWeight::WIN);

        board.place_stone(Pos::new(8, 6), Stone::White);
        assert!(count_runs(&board, Stone::White, 5) > 0);
        assert_eq!(evaluate(&board, Stone::White), RunWeight::WIN);
    }

    #[test]
    fn test_evaluate_vertical_five_wins() {
        // Vertical runs are only visible after rotation.
        let mut board = Board::new();
        for row in 2..=6u8 {
            board.place_stone(Pos::new(row, 9), Stone::Black);
        }
        assert_eq!(evaluate(&board, Stone::Black), RunWeight::WIN);
    }

    #[test]
    fn test_evaluate_diagonal_five_wins() {
        let mut board = Board::new();
        for i in 0..5u8 {
            board.place_stone(Pos::new(3 + i, 2 + i), Stone::White);
        }
        assert_eq!(evaluate(&board, Stone::White), RunWeight::WIN);
    }

    #[test]
    fn test_evaluate_anti_diagonal_five_wins() {
        // SW diagonal, covered via the rotated rescan.
        let mut board = Board::new();
        for i in 0..5u8 {
            board.place_stone(Pos::new(2 + i, 8 - i), Stone::Black);
        }
        assert_eq!(evaluate(&board, Stone::Black), RunWeight::WIN);
    }

    #[test]
    fn test_evaluate_single_perspective() {
        // One side's runs never change the other side's score.
        let mut board = Board::new();
        for col in 3..=5u8 {
            board.place_stone(Pos::new(5, col), Stone::Black);
        }
        assert!(evaluate(&board, Stone::Black) > 0);
        assert_eq!(evaluate(&board, Stone::White), 0);
    }

    #[test]
    fn test_evaluate_edge_run_stays_in_bounds() {
        // Run touching the right edge: the open-end probe must not
        // read past column 10.
        let mut board = Board::new();
        for col in 7..=10u8 {
            board.place_stone(Pos::new(5, col), Stone::Black);
        }
        let _ = evaluate(&board, Stone::Black);
    }
}
