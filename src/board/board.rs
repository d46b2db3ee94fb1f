//! Board value type

use std::fmt;

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board: a flat array of tri-state cells.
///
/// `Board` is a `Copy` value type, cheap enough to duplicate at every search
/// node. Each node in the minimax tree owns its own copy, so no trial move
/// in one branch can leak into a sibling branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    #[must_use]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.to_index()] = stone;
    }

    /// Copy of this board with one additional stone placed.
    #[inline]
    #[must_use]
    pub fn child(&self, pos: Pos, stone: Stone) -> Self {
        let mut next = *self;
        next.place_stone(pos, stone);
        next
    }

    /// Whether a move at the given coordinates is legal: in bounds and
    /// targeting an empty cell.
    #[must_use]
    pub fn is_legal_move(&self, row: i32, col: i32) -> bool {
        Pos::try_new(row, col).map_or(false, |pos| self.is_empty_at(pos))
    }

    /// Total stones on board
    #[must_use]
    pub fn stone_count(&self) -> u32 {
        self.cells
            .iter()
            .filter(|&&cell| cell != Stone::Empty)
            .count() as u32
    }

    /// Check if board has no stones
    #[must_use]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Stone::Empty)
    }

    /// Check if every cell is occupied
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Stone::Empty)
    }

    /// Copy of this board rotated 90 degrees counter-clockwise.
    ///
    /// The line scanners only cover rows and the SE diagonal directly;
    /// re-running them on the rotated copy supplies the column and SW
    /// diagonal coverage.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut rotated = Self::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let src = Pos::new(col as u8, (BOARD_SIZE - 1 - row) as u8);
                rotated.place_stone(Pos::new(row as u8, col as u8), self.get(src));
            }
        }
        rotated
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{col:2}")?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{row:2} ")?;
            for col in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(row as u8, col as u8)) {
                    Stone::Black => " X",
                    Stone::White => " O",
                    Stone::Empty => " .",
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
