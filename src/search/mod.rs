//! Search module for the Gomoku agent
//!
//! Contains:
//! - Frontier move generation (empty cells adjacent to existing stones)
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, Searcher, DEFAULT_DEPTH};
pub use movegen::children;
