//! Top-level move selection policy
//!
//! The [`Agent`] wires the opening shortcuts and the minimax search
//! together behind a single `decide_move` entry point. It holds no board
//! state between requests; every call works on the snapshot it is given.
//!
//! # Example
//!
//! ```
//! use gomoku_agent::{Agent, Board, Pos, Stone};
//!
//! let mut agent = Agent::new();
//! let board = Board::new();
//!
//! // First move on an empty board is always the true center.
//! let pos = agent.decide_move(&board, Stone::Black).unwrap();
//! assert_eq!(pos, Pos::new(5, 5));
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::error::Error;
use crate::search::{Searcher, DEFAULT_DEPTH};

/// Where a chosen move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// One of the fixed opening shortcuts near the center
    Opening,
    /// The minimax search
    Search,
}

/// Result of a move decision with search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// The chosen move
    pub pos: Pos,
    /// Score of the chosen line (0 for opening shortcuts)
    pub score: i32,
    /// Which policy produced the move
    pub source: MoveSource,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes visited by the search (0 for opening shortcuts)
    pub nodes: u64,
}

/// Gomoku playing agent.
///
/// Move policy, in order:
/// 1. Play the center (5, 5) if it is free.
/// 2. Play (5, 6), the opening cell next to the center, if free.
/// 3. Otherwise run the depth-limited alpha-beta search.
///
/// The agent does not adjudicate finished games; the game loop must stop
/// calling it once a side has won or the board is full. On a full board
/// `decide_move` reports [`Error::NoLegalMoves`] rather than guessing.
pub struct Agent {
    searcher: Searcher,
}

impl Agent {
    /// Create an agent with the default search depth.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an agent with a custom search depth (in plies).
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            searcher: Searcher::with_depth(depth),
        }
    }

    /// Decide the next move for `side` on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] if no move is available.
    pub fn decide_move(&mut self, board: &Board, side: Stone) -> Result<Pos, Error> {
        self.decide_move_with_stats(board, side).map(|result| result.pos)
    }

    /// Decide the next move and report how it was found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] if no move is available.
    #[allow(clippy::cast_possible_truncation)]
    pub fn decide_move_with_stats(
        &mut self,
        board: &Board,
        side: Stone,
    ) -> Result<MoveResult, Error> {
        debug_assert_ne!(side, Stone::Empty, "agent must play a real side");
        let start = Instant::now();

        // Opening shortcuts: the center, then the cell right of it.
        let center = Pos::center();
        for pos in [center, Pos::new(center.row, center.col + 1)] {
            if board.is_legal_move(i32::from(pos.row), i32::from(pos.col)) {
                log::debug!("opening shortcut for {side:?}: ({}, {})", pos.row, pos.col);
                return Ok(MoveResult {
                    pos,
                    score: 0,
                    source: MoveSource::Opening,
                    time_ms: start.elapsed().as_millis() as u64,
                    nodes: 0,
                });
            }
        }

        let result = self.searcher.search(board, side);
        let pos = result.best_move.ok_or(Error::NoLegalMoves)?;
        Ok(MoveResult {
            pos,
            score: result.score,
            source: MoveSource::Search,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: result.nodes,
        })
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}
