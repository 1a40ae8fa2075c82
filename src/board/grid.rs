//! Flat row-major grid with exact win detection

use std::ops::{Deref, DerefMut};

use super::{Cell, Pos, DEFAULT_SIZE, DIRECTIONS, WIN_LENGTH};

/// Game board: a fixed `rows x cols` grid of [`Cell`]s.
///
/// Stored as a flat vector indexed `row * cols + col` behind bounds-checked
/// accessors. `place` and `remove` are the only mutators; both report
/// success by boolean so the caller decides how to treat an invalid move.
#[derive(Debug, Clone)]
pub struct Board {
    rows: i32,
    cols: i32,
    grid: Vec<Cell>,
}

impl Board {
    pub fn new(rows: i32, cols: i32) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Self {
            rows,
            cols,
            grid: vec![Cell::Empty; (rows * cols) as usize],
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> usize {
        (row * self.cols + col) as usize
    }

    /// Check whether a coordinate pair lies on the board
    #[inline]
    pub fn is_inside(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    /// Get the cell at a position. Out-of-bounds reads return `Empty`.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Cell {
        if self.is_inside(row, col) {
            self.grid[self.index(row, col)]
        } else {
            Cell::Empty
        }
    }

    /// Check whether a cell is empty. `false` for out-of-bounds positions.
    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.is_inside(row, col) && self.grid[self.index(row, col)] == Cell::Empty
    }

    /// Place a symbol at `(row, col)`.
    ///
    /// Succeeds iff the cell is empty; otherwise the board is untouched
    /// and `false` is returned.
    #[inline]
    pub fn place(&mut self, row: i32, col: i32, symbol: Cell) -> bool {
        if !self.is_empty(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.grid[idx] = symbol;
        true
    }

    /// Remove the stone at `(row, col)`, used for undo.
    ///
    /// Succeeds iff the position is in bounds; the cell becomes empty
    /// regardless of its prior value.
    #[inline]
    pub fn remove(&mut self, row: i32, col: i32) -> bool {
        if !self.is_inside(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.grid[idx] = Cell::Empty;
        true
    }

    /// Clear the whole board
    pub fn reset(&mut self) {
        self.grid.fill(Cell::Empty);
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        self.grid.iter().all(|&c| c != Cell::Empty)
    }

    /// True iff no stone has been placed yet
    pub fn is_board_empty(&self) -> bool {
        self.grid.iter().all(|&c| c == Cell::Empty)
    }

    /// Check for a win through `(row, col)` for `symbol`.
    ///
    /// For each of the four axes the run through `(row, col)` is assembled
    /// in extension order: cells found walking backward, then `(row, col)`
    /// itself, then cells found walking forward. If the run reaches
    /// [`WIN_LENGTH`] the **first** `WIN_LENGTH` cells of that run are
    /// returned. For an overline this window is biased toward the backward
    /// end of the axis; the truncation is deliberate and must not be
    /// "centered".
    pub fn check_win(&self, row: i32, col: i32, symbol: Cell) -> Option<Vec<Pos>> {
        if !self.is_inside(row, col) {
            return None;
        }

        for &(dr, dc) in &DIRECTIONS {
            // Walk backward, collecting nearest-first
            let mut back = Vec::new();
            let (mut r, mut c) = (row - dr, col - dc);
            while self.is_inside(r, c) && self.get(r, c) == symbol {
                back.push(Pos::new(r, c));
                r -= dr;
                c -= dc;
            }

            let mut line: Vec<Pos> = back.into_iter().rev().collect();
            line.push(Pos::new(row, col));

            let (mut r, mut c) = (row + dr, col + dc);
            while self.is_inside(r, c) && self.get(r, c) == symbol {
                line.push(Pos::new(r, c));
                r += dr;
                c += dc;
            }

            if line.len() >= WIN_LENGTH {
                line.truncate(WIN_LENGTH);
                return Some(line);
            }
        }
        None
    }

    /// Place a stone under a guard that removes it again on drop.
    ///
    /// Returns `None` if the cell is not empty. Every hypothetical
    /// placement in the engine goes through this, so no exit path — early
    /// return, deadline cutoff, propagated error — can leak a stray stone.
    pub fn scoped_place(&mut self, pos: Pos, symbol: Cell) -> Option<PlacedStone<'_>> {
        if !self.place(pos.row, pos.col, symbol) {
            return None;
        }
        Some(PlacedStone { board: self, pos })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

/// Guard for a hypothetical placement; restores the cell on drop.
///
/// Derefs to [`Board`] so queries and nested placements work through it.
pub struct PlacedStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Deref for PlacedStone<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedStone<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        let _ = self.board.remove(self.pos.row, self.pos.col);
    }
}
