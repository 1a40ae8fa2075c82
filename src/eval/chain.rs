//! Chain-counting primitives shared by all AI tiers
//!
//! Every threat predicate in the engine reduces to one question: how long
//! is the contiguous run of a symbol through a cell along an axis, and how
//! many of its ends are open? These functions answer it over a borrowed
//! board; callers that want a hypothetical answer place the stone first
//! through [`Board::scoped_place`](crate::board::Board::scoped_place).

use crate::board::{Board, Cell, Pos, DIRECTIONS, WIN_LENGTH};

/// Count the maximal contiguous run of `symbol` through `pos` along one
/// axis, scanning both directions. Returns `(run, open_ends)` where
/// `open_ends` (0..=2) counts ends whose next cell is in bounds and empty.
///
/// The run includes `pos` itself; the caller is expected to have the
/// symbol placed there (or to treat the cell as hypothetically owned).
pub fn count_chain_around(board: &Board, pos: Pos, dir: (i32, i32), symbol: Cell) -> (i32, u8) {
    let (dr, dc) = dir;
    let mut run = 1;

    let (mut r, mut c) = (pos.row + dr, pos.col + dc);
    while board.is_inside(r, c) && board.get(r, c) == symbol {
        run += 1;
        r += dr;
        c += dc;
    }
    let forward_open = board.is_empty(r, c);

    let (mut r, mut c) = (pos.row - dr, pos.col - dc);
    while board.is_inside(r, c) && board.get(r, c) == symbol {
        run += 1;
        r -= dr;
        c -= dc;
    }
    let backward_open = board.is_empty(r, c);

    (run, u8::from(forward_open) + u8::from(backward_open))
}

/// Count the run of `symbol` starting at `pos` and extending forward along
/// one axis. `pos` must be an axis-start cell (its backward neighbor is not
/// `symbol`), which is how the full-board evaluation counts each run
/// exactly once. Open ends are the cell past the run and the backward
/// neighbor of `pos`.
pub fn count_chain_forward(board: &Board, pos: Pos, dir: (i32, i32), symbol: Cell) -> (i32, u8) {
    let (dr, dc) = dir;
    let mut run = 0;

    let (mut r, mut c) = (pos.row, pos.col);
    while board.is_inside(r, c) && board.get(r, c) == symbol {
        run += 1;
        r += dr;
        c += dc;
    }

    let mut open_ends = 0;
    if board.is_empty(r, c) {
        open_ends += 1;
    }
    if board.is_empty(pos.row - dr, pos.col - dc) {
        open_ends += 1;
    }

    (run, open_ends)
}

/// True if the stone at `pos` completes a run of [`WIN_LENGTH`] or more
#[inline]
pub fn makes_five(board: &Board, pos: Pos, symbol: Cell) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| count_chain_around(board, pos, dir, symbol).0 >= WIN_LENGTH as i32)
}

/// True if `pos` sits in a run of exactly four with both ends open
#[inline]
pub fn is_open_four(board: &Board, pos: Pos, symbol: Cell) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| count_chain_around(board, pos, dir, symbol) == (4, 2))
}

/// True if `pos` sits in a run of exactly four with exactly one open end
#[inline]
pub fn is_closed_four(board: &Board, pos: Pos, symbol: Cell) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| count_chain_around(board, pos, dir, symbol) == (4, 1))
}

/// Number of axes on which `pos` sits in an open three (run 3, both ends
/// open). Two or more is a double-open-three.
pub fn open_three_dirs(board: &Board, pos: Pos, symbol: Cell) -> usize {
    DIRECTIONS
        .iter()
        .filter(|&&dir| count_chain_around(board, pos, dir, symbol) == (3, 2))
        .count()
}

/// Longest run of `symbol` through `pos` over the four axes
pub fn max_chain(board: &Board, pos: Pos, symbol: Cell) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&dir| count_chain_around(board, pos, dir, symbol).0)
        .max()
        .unwrap_or(0)
}

/// Exhaustive scan for a completed five anywhere on the board.
///
/// Used as terminal detection inside the search. Correctness over speed:
/// a win is reported as soon as it exists, no incremental state to go
/// stale mid-search.
pub fn has_five(board: &Board, symbol: Cell) -> bool {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col) == symbol
                && makes_five(board, Pos::new(row, col), symbol)
            {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(board: &mut Board, row: i32, cols: std::ops::Range<i32>, symbol: Cell) {
        for c in cols {
            board.place(row, c, symbol);
        }
    }

    #[test]
    fn chain_around_counts_both_directions() {
        let mut board = Board::default();
        row_of(&mut board, 7, 4..9, Cell::X);
        let (run, open) = count_chain_around(&board, Pos::new(7, 6), (0, 1), Cell::X);
        assert_eq!(run, 5);
        assert_eq!(open, 2);
    }

    #[test]
    fn open_ends_blocked_by_stone_and_edge() {
        let mut board = Board::default();
        row_of(&mut board, 7, 0..4, Cell::X); // touches the left edge
        board.place(7, 4, Cell::O);
        let (run, open) = count_chain_around(&board, Pos::new(7, 1), (0, 1), Cell::X);
        assert_eq!(run, 4);
        assert_eq!(open, 0);
    }

    #[test]
    fn open_and_closed_four() {
        let mut board = Board::default();
        row_of(&mut board, 7, 4..8, Cell::X);
        assert!(is_open_four(&board, Pos::new(7, 5), Cell::X));
        assert!(!is_closed_four(&board, Pos::new(7, 5), Cell::X));

        board.place(7, 3, Cell::O);
        assert!(!is_open_four(&board, Pos::new(7, 5), Cell::X));
        assert!(is_closed_four(&board, Pos::new(7, 5), Cell::X));

        board.place(7, 8, Cell::O);
        assert!(!is_closed_four(&board, Pos::new(7, 5), Cell::X));
    }

    #[test]
    fn double_open_three_counts_axes() {
        let mut board = Board::default();
        // Horizontal and vertical open threes crossing at (7,7)
        row_of(&mut board, 7, 6..9, Cell::X);
        for r in 6..9 {
            if r != 7 {
                board.place(r, 7, Cell::X);
            }
        }
        board.place(9, 7, Cell::X);
        assert!(open_three_dirs(&board, Pos::new(7, 7), Cell::X) >= 2);
    }

    #[test]
    fn max_chain_picks_longest_axis() {
        let mut board = Board::default();
        row_of(&mut board, 7, 5..8, Cell::O);
        board.place(6, 6, Cell::O);
        assert_eq!(max_chain(&board, Pos::new(7, 6), Cell::O), 3);
    }

    #[test]
    fn has_five_full_scan() {
        let mut board = Board::default();
        assert!(!has_five(&board, Cell::X));
        row_of(&mut board, 10, 2..7, Cell::O);
        assert!(has_five(&board, Cell::O));
        assert!(!has_five(&board, Cell::X));
    }

    #[test]
    fn forward_chain_from_axis_start() {
        let mut board = Board::default();
        row_of(&mut board, 7, 4..7, Cell::X);
        let (run, open) = count_chain_forward(&board, Pos::new(7, 4), (0, 1), Cell::X);
        assert_eq!(run, 3);
        assert_eq!(open, 2);

        board.place(7, 3, Cell::O);
        let (run, open) = count_chain_forward(&board, Pos::new(7, 4), (0, 1), Cell::X);
        assert_eq!(run, 3);
        assert_eq!(open, 1);
    }
}
