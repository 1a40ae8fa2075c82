//! Board representation for Caro (five-in-a-row)

pub mod grid;


// Re-exports
pub use grid::{Board, PlacedStone};

/// Default board size (15x15)
pub const DEFAULT_SIZE: i32 = 15;

/// Number of contiguous cells needed to win
pub const WIN_LENGTH: usize = 5;

/// Line axes for win checking and chain counting (4 directions).
/// Each axis is scanned both ways, so four entries cover all eight rays.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Cell state: empty or owned by one of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Get the opposing symbol
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// Position on the board.
///
/// Coordinates are signed so direction walks can step one cell past the
/// edge and let [`Board::is_inside`] decide, without any casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}
