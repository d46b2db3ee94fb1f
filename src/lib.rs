//! Gomoku agent for 11x11 five-in-a-row
//!
//! A game-playing agent that selects the next move for its side with a
//! depth-limited minimax search and alpha-beta pruning, driven by a
//! heuristic evaluator that counts open lines of consecutive stones.
//!
//! # Architecture
//!
//! - [`board`]: 11x11 tri-state board, a cheap-to-copy value type
//! - [`eval`]: line scanning and the run-weight evaluator
//! - [`search`]: frontier move generation and alpha-beta minimax
//! - [`agent`]: opening shortcuts and the `decide_move` entry point
//! - [`error`]: boundary error types
//!
//! The agent is single-threaded and stateless between move requests:
//! every search node owns a private copy of the board, and the whole
//! decision runs to completion before returning. Turn bookkeeping, win
//! detection, and all I/O belong to the surrounding game loop, not to
//! this crate.
//!
//! # Quick Start
//!
//! ```
//! use gomoku_agent::{Agent, Board, Pos, Stone};
//!
//! let mut agent = Agent::new();
//! let mut board = Board::new();
//!
//! // Opening move is always the center of the 11x11 board.
//! if let Ok(pos) = agent.decide_move(&board, Stone::Black) {
//!     assert_eq!(pos, Pos::new(5, 5));
//!     board.place_stone(pos, Stone::Black);
//! }
//! ```

pub mod agent;
pub mod board;
pub mod error;
pub mod eval;
pub mod search;

// Re-export commonly used types for convenience
pub use agent::{Agent, MoveResult, MoveSource};
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use error::Error;
pub use search::{SearchResult, Searcher};
