//! Easy tier: win if possible, block if necessary, otherwise stay close
//! to the action

use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Cell, Pos};
use crate::search::candidates::near_candidates;
use crate::search::tactics::winning_square;

use super::Strategy;

pub struct EasyStrategy {
    symbol: Cell,
    rng: StdRng,
}

impl EasyStrategy {
    pub fn new(symbol: Cell) -> Self {
        Self::with_seed(symbol, rand::random())
    }

    /// Deterministic construction for tests
    pub fn with_seed(symbol: Cell, seed: u64) -> Self {
        debug_assert!(symbol != Cell::Empty);
        Self {
            symbol,
            rng: StdRng::seed_from_u64(seed),
        }
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

impl Strategy for EasyStrategy {
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

        // 3) Random cell adjacent to the existing stones
        let near = near_candidates(board, 1);
        if let Some(&mv) = near.choose(&mut self.rng) {
            return Some(mv);
        }

        // 4) Anywhere (first stone of the game, or no empty cell at all)
        self.random_empty(board)
    }
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
    fn takes_immediate_win() {
        let mut board = Board::default();
        row_of(&mut board, 7, 3..7, Cell::X);
        let mut ai = EasyStrategy::with_seed(Cell::X, 1);
        let mv = ai.get_move(&mut board).expect("move");
        assert!(mv == Pos::new(7, 2) || mv == Pos::new(7, 7));
    }

    #[test]
    fn blocks_opponent_win() {
        let mut board = Board::default();
        row_of(&mut board, 7, 3..7, Cell::O);
        board.place(0, 0, Cell::X);
        let mut ai = EasyStrategy::with_seed(Cell::X, 1);
        let mv = ai.get_move(&mut board).expect("move");
        assert!(mv == Pos::new(7, 2) || mv == Pos::new(7, 7));
    }

    #[test]
    fn plays_adjacent_to_existing_stones() {
        let mut board = Board::default();
        board.place(7, 7, Cell::O);
        let mut ai = EasyStrategy::with_seed(Cell::X, 42);
        for _ in 0..10 {
            let mv = ai.get_move(&mut board).expect("move");
            assert!((mv.row - 7).abs() <= 1 && (mv.col - 7).abs() <= 1);
            assert!(board.is_empty(mv.row, mv.col));
        }
    }

    #[test]
    fn empty_board_gets_any_legal_move() {
        let mut board = Board::default();
        let mut ai = EasyStrategy::with_seed(Cell::O, 7);
        let mv = ai.get_move(&mut board).expect("move");
        assert!(board.is_empty(mv.row, mv.col));
    }

    #[test]
    fn full_board_yields_none() {
        let mut board = Board::new(3, 3);
        let symbols = [Cell::X, Cell::O];
        for r in 0..3 {
            for c in 0..3 {
                board.place(r, c, symbols[((r + c) % 2) as usize]);
            }
        }
        let mut ai = EasyStrategy::with_seed(Cell::X, 3);
        assert_eq!(ai.get_move(&mut board), None);
    }

    #[test]
    fn seeded_strategy_is_deterministic() {
        let mut board_a = Board::default();
        board_a.place(7, 7, Cell::O);
        let mut board_b = board_a.clone();

        let mv_a = EasyStrategy::with_seed(Cell::X, 99).get_move(&mut board_a);
        let mv_b = EasyStrategy::with_seed(Cell::X, 99).get_move(&mut board_b);
        assert_eq!(mv_a, mv_b);
    }
}
