//! Run weights for Gomoku evaluation
//!
//! These constants define the scoring weights the evaluator assigns to
//! runs of consecutive stones, plus the sentinel returned for a completed
//! five-in-a-row.

/// Weights for scoring runs by length
pub struct RunWeight;

impl RunWeight {
    /// Five in a row - the winning sentinel.
    ///
    /// A large finite constant rather than a true infinity, so scores stay
    /// comparable and summable without special-casing. It dominates every
    /// reachable heuristic sum: even a board saturated with weighted runs
    /// stays far below this value.
    pub const WIN: i32 = 1_000_000;

    /// Run of four: one move from winning
    pub const FOUR: i32 = 4;
    /// Run of three
    pub const THREE: i32 = 3;
    /// Run of two
    pub const TWO: i32 = 1;
}
