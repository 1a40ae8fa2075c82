//! Pattern scores and the two-sided static evaluation
//!
//! The search leaf evaluation sums a fixed score per run found on the
//! board. A run is counted once per axis by only scoring it from its
//! axis-start cell (the cell whose backward neighbor is not the same
//! symbol).

use crate::board::{Board, Cell, Pos, DIRECTIONS};

use super::chain::count_chain_forward;

/// Static pattern scores, keyed by run length and open-end count
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: i32 = 200_000;
    /// Open four: both extension ends empty
    pub const OPEN_FOUR: i32 = 35_000;
    /// Closed four: one extension end empty
    pub const CLOSED_FOUR: i32 = 8_000;
    /// Open three
    pub const OPEN_THREE: i32 = 2_500;
    /// Closed three
    pub const CLOSED_THREE: i32 = 700;
    /// Open two
    pub const OPEN_TWO: i32 = 250;
}

/// Sum of pattern scores over all runs of `symbol`
pub fn side_score(board: &Board, symbol: Cell) -> i32 {
    let mut total = 0;

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col) != symbol {
                continue;
            }
            for &(dr, dc) in &DIRECTIONS {
                // Only score from the start of a run on this axis
                if board.get(row - dr, col - dc) == symbol {
                    continue;
                }

                let (run, open_ends) =
                    count_chain_forward(board, Pos::new(row, col), (dr, dc), symbol);

                total += match (run, open_ends) {
                    (r, _) if r >= 5 => PatternScore::FIVE,
                    (4, 2) => PatternScore::OPEN_FOUR,
                    (4, 1) => PatternScore::CLOSED_FOUR,
                    (3, 2) => PatternScore::OPEN_THREE,
                    (3, 1) => PatternScore::CLOSED_THREE,
                    (2, 2) => PatternScore::OPEN_TWO,
                    _ => 0,
                };
            }
        }
    }
    total
}

/// Two-sided evaluation from the mover's perspective:
/// own pattern total minus the opponent's.
#[inline]
pub fn evaluate(board: &Board, me: Cell, opp: Cell) -> i32 {
    side_score(board, me) - side_score(board, opp)
}
