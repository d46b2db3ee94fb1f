//! Board representation for the Gomoku agent

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

use crate::error::Error;

/// Board size (11x11)
pub const BOARD_SIZE: usize = 11;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 121

/// Cell states / stone colors.
///
/// The canonical signed encoding is Empty = 0, Black = +1, White = -1
/// (see [`Stone::value`]). A cell holds exactly one of these three states,
/// so degenerate cell values are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    #[must_use]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Canonical signed value: 0 for empty, +1 for Black, -1 for White.
    #[inline]
    #[must_use]
    pub fn value(self) -> i8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => -1,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked construction from signed coordinates.
    ///
    /// Rejects out-of-range coordinates at the boundary, before any scan
    /// can touch the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if either coordinate falls outside
    /// `[0, 10]`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn try_new(row: i32, col: i32) -> Result<Self, Error> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    /// Center of the board: (5, 5) on 11x11.
    #[inline]
    #[must_use]
    pub fn center() -> Self {
        Self::new((BOARD_SIZE / 2) as u8, (BOARD_SIZE / 2) as u8)
    }

    #[inline]
    #[must_use]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    #[must_use]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}
