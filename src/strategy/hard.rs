//! Hard tier: tactical rule ladder backed by deadline-bounded alpha-beta
//!
//! The ladder handles every forced situation (wins, blocks, four and
//! double-three creation/denial, counter-threats); only genuinely open
//! positions reach the search. The searcher's deadline is captured before
//! the ladder runs, so rule scanning spends from the same clock budget.

use crate::board::{Board, Cell, Pos};
use crate::config::DifficultyProfile;
use crate::search::candidates::{first_empty, generate_candidates};
use crate::search::{tactics, Searcher, NEAR_RADIUS};

use super::Strategy;

pub struct HardStrategy {
    symbol: Cell,
    profile: DifficultyProfile,
}

impl HardStrategy {
    pub fn new(symbol: Cell, profile: DifficultyProfile) -> Self {
        debug_assert!(symbol != Cell::Empty);
        Self { symbol, profile }
    }
}

impl Strategy for HardStrategy {
    fn symbol(&self) -> Cell {
        self.symbol
    }

    fn get_move(&mut self, board: &mut Board) -> Option<Pos> {
        if board.is_full() {
            return None;
        }

        // Deadline starts now; everything below draws on it
        let searcher = Searcher::new(&self.profile, self.symbol);

        // Opening: take the center
        if board.is_board_empty() {
            return Some(Pos::new(board.rows() / 2, board.cols() / 2));
        }

        // Forced moves first
        if let Some(mv) = tactics::rule_move(board, self.symbol) {
            return Some(mv);
        }

        // Open position: search over the near neighborhood
        let limit = self.profile.max_candidates.max(10);
        let roots = generate_candidates(board, self.symbol, NEAR_RADIUS, limit);
        if roots.is_empty() {
            return first_empty(board);
        }

        Some(searcher.best_move(board, &roots))
    }
}
