//! Error types for the Gomoku agent

use thiserror::Error;

/// Main error type for the agent crate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate ({row}, {col}) is outside the 11x11 board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("no legal move remains on the board")]
    NoLegalMoves,
}
