//! Normal tier: win/block rules, then a chain-length heuristic over every
//! empty cell, with an occasional random move to stay less predictable

use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell, Pos};
use crate::config::DifficultyProfile;
use crate::eval::chain;
use crate::search::tactics::winning_square;

use super::Strategy;

pub struct NormalStrategy {
    symbol: Cell,
    profile: DifficultyProfile,
    rng: StdRng,
}

impl NormalStrategy {
    pub fn new(symbol: Cell, profile: DifficultyProfile) -> Self {
        Self::with_seed(symbol, profile, rand::random())
    }

    /// Deterministic construction for tests
    pub fn with_seed(symbol: Cell, profile: DifficultyProfile, seed: u64) -> Self {
        debug_assert!(symbol != Cell::Empty);
        Self {
            symbol,
            profile,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Weighted attack + defense score for placing at `pos`: the longest
    /// chain either side would get through this cell.
    fn position_score(&self, board: &mut Board, pos: Pos) -> f64 {
        let opponent = self.symbol.opponent();
        let attack = match board.scoped_place(pos, self.symbol) {
            Some(placed) => chain::max_chain(&placed, pos, self.symbol),
            None => return f64::NEG_INFINITY,
        };
        let defense = match board.scoped_place(pos, opponent) {
            Some(placed) => chain::max_chain(&placed, pos, opponent),
            None => return f64::NEG_INFINITY,
        };
        f64::from(attack) * self.profile.attack_weight
            + f64::from(defense) * self.profile.defense_weight
    }

    /// Highest-scoring empty cell, chosen uniformly among ties
    fn heuristic_move(&mut self, board: &mut Board) -> Option<Pos> {
        let mut best_score = f64::NEG_INFINITY;
        let mut best_moves: Vec<Pos> = Vec::new();

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                if !board.is_empty(row, col) {
                    continue;
                }
                let pos = Pos::new(row, col);
                let score = self.position_score(board, pos);
                if score > best_score {
                    best_score = score;
                    best_moves.clear();
                    best_moves.push(pos);
                } else if score == best_score {
                    best_moves.push(pos);
                }
            }
        }

        best_moves.choose(&mut self.rng).copied()
    }

    fn random_empty(&mut self, board: &Board) -> Option<Pos> {
        let mut empties = Vec::new();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                if board.is_empty(row, col) {
                    empties.push(Pos::new(row, col));
                }
            }
        }
        empties.choose(&mut self.rng).copied()
    }
}

impl Strategy for NormalStrategy {
    fn symbol(&self) -> Cell {
        self.symbol
    }

    fn get_move(&mut self, board: &mut Board) -> Option<Pos> {
        let opponent = self.symbol.opponent();

        // 1) Win now
        if let Some(mv) = winning_square(board, self.symbol) {
            return Some(mv);
        }

        // 2) Block opponent win now
        if let Some(mv) = winning_square(board, opponent) {
            return Some(mv);
        }

        // 3) Occasional random move. Checked before the heuristic so the
        //    expensive scan is skipped on the random path; the observable
        //    distribution is unchanged.
        if self.rng.gen::<f64>() < self.profile.random_rate {
            return self.random_empty(board);
        }

        // 4) Best heuristic cell
        self.heuristic_move(board)
    }
}
