//! Evaluation module for Gomoku positions
//!
//! This module provides run counting and scoring for board positions:
//! - Line scanning (extendable runs along rows, diagonal windows)
//! - Weighted scoring of twos, threes, fours
//! - Five-in-a-row win detection via the winning sentinel

pub mod heuristic;
pub mod scan;
pub mod weights;

pub use heuristic::evaluate;
pub use scan::{count_diagonal_runs, count_runs};
pub use weights::RunWeight;
