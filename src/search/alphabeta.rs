//! Depth-limited minimax with alpha-beta pruning
//!
//! The search is a synchronous depth-first recursion with a fixed depth
//! budget. Every node owns a private board copy (see
//! [`children`](super::movegen::children)), so no locking or undo logic is
//! needed. Leaves are scored by the run-counting evaluator, always from the
//! searching side's perspective; minimizing levels model the opponent by
//! driving that same score down, never by scoring the opponent's stones.
//!
//! # Example
//!
//! ```
//! use gomoku_agent::board::{Board, Pos, Stone};
//! use gomoku_agent::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(5, 5), Stone::Black);
//!
//! let mut searcher = Searcher::with_depth(2);
//! let result = searcher.search(&board, Stone::White);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, RunWeight};

use super::movegen::children;

/// Infinity bound for the alpha-beta window, strictly above the winning
/// sentinel so a found win always improves on the initial best.
const INF: i32 = RunWeight::WIN + 1;

/// Default search depth in plies. Depth is a strength/latency knob, not a
/// correctness requirement.
pub const DEFAULT_DEPTH: u8 = 3;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` when the frontier is empty
    pub best_move: Option<Pos>,
    /// Score of the best line, from the searching side's perspective
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Depth-limited minimax searcher.
///
/// The searcher keeps no state between moves beyond its configuration;
/// each call to [`search`](Searcher::search) starts from scratch.
pub struct Searcher {
    depth: u8,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with the default depth.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create a searcher with a custom depth budget.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self { depth, nodes: 0 }
    }

    /// Search for the best move for `side` on the given board.
    ///
    /// Runs minimax to the configured depth with a full alpha-beta window.
    /// Deterministic: equal scores keep the first move found in frontier
    /// order, so repeated searches of the same board return the same move.
    #[must_use]
    pub fn search(&mut self, board: &Board, side: Stone) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.minimax(board, side, self.depth, -INF, INF, true);
        log::debug!(
            "search for {side:?} done: move {best_move:?}, score {score}, {} nodes",
            self.nodes
        );
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Recursive minimax step.
    ///
    /// `side` is the searching side and fixes the evaluation perspective
    /// for the whole tree; `maximizing` tracks whose turn it is. At the
    /// depth limit (or a dead frontier) the board is scored with no move
    /// attached. Expansion stops as soon as `beta <= alpha`: the remaining
    /// siblings cannot change the outcome because the other side already
    /// has a better alternative elsewhere.
    fn minimax(
        &mut self,
        board: &Board,
        side: Stone,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if depth == 0 {
            return (evaluate(board, side), None);
        }

        let mover = if maximizing { side } else { side.opponent() };
        let kids = children(board, mover);
        if kids.is_empty() {
            return (evaluate(board, side), None);
        }

        if maximizing {
            let mut best_score = -INF;
            let mut best_move = None;
            for (child, pos) in kids {
                let (score, _) = self.minimax(&child, side, depth - 1, alpha, beta, false);
                if score > best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            (best_score, best_move)
        } else {
            let mut best_score = INF;
            let mut best_move = None;
            for (child, pos) in kids {
                let (score, _) = self.minimax(&child, side, depth - 1, alpha, beta, true);
                if score < best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            (best_score, best_move)
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
