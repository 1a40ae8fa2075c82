//! Iterative-deepening minimax with alpha-beta pruning and a wall-clock
//! deadline
//!
//! The searcher runs only when the tactical rule ladder found no forced
//! move. It deepens from 1 ply up to the configured maximum, keeping the
//! best completed result; the deadline is polled at the root-loop head,
//! before each child descent, and at the top of every recursive call, so
//! an expensive node can overrun by at most one recursive step. Scores are
//! explicit maximizing/minimizing from the AI's fixed perspective (not
//! negated), and no sentinel infinity ever escapes to the caller.

use std::time::Instant;

use log::debug;

use crate::board::{Board, Cell, Pos};
use crate::config::DifficultyProfile;
use crate::eval::{chain, patterns};

use super::candidates::{generate_candidates, order_moves};
use super::NEAR_RADIUS;

/// Finite sentinel for a decided position; never exceeded by evaluation
pub const WIN_SCORE: i32 = 10_000_000;

/// Alpha-beta bound beyond any reachable score
const INF: i32 = i32::MAX;

/// One move-selection search. Created per `get_move` call; the deadline is
/// captured at construction so rule-ladder time counts against the budget.
pub struct Searcher {
    me: Cell,
    opp: Cell,
    max_depth: usize,
    cand_limit: usize,
    deadline: Instant,
}

impl Searcher {
    pub fn new(profile: &DifficultyProfile, me: Cell) -> Self {
        Self {
            me,
            opp: me.opponent(),
            max_depth: profile.search_depth.max(2),
            cand_limit: profile.max_candidates.max(10),
            deadline: Instant::now() + profile.time_limit,
        }
    }

    #[inline]
    fn time_up(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Iterative deepening over a fixed root candidate set.
    ///
    /// Always returns a move: the first root candidate stands in until a
    /// depth completes, so a near-zero time limit degrades quality but
    /// never legality.
    pub fn best_move(&self, board: &mut Board, root_moves: &[Pos]) -> Pos {
        debug_assert!(!root_moves.is_empty());
        let mut best_move = root_moves[0];
        let mut best_score = -INF;

        for depth in 1..=self.max_depth {
            if self.time_up() {
                break;
            }
            let (score, mv) = self.search_root(board, root_moves, depth);
            if let Some(mv) = mv {
                best_score = score;
                best_move = mv;
            }
            debug!(
                "depth {depth}: best ({}, {}) score {best_score}",
                best_move.row, best_move.col
            );
            // Effectively decisive; deeper search cannot change the outcome
            if best_score >= WIN_SCORE / 2 {
                break;
            }
        }

        best_move
    }

    fn search_root(&self, board: &mut Board, moves: &[Pos], depth: usize) -> (i32, Option<Pos>) {
        let mut alpha = -INF;
        let beta = INF;
        let mut best_score = -INF;
        let mut best_move = None;

        let ordered = order_moves(board, moves, self.me);

        for mv in ordered {
            if self.time_up() {
                break;
            }
            let mut placed = match board.scoped_place(mv, self.me) {
                Some(p) => p,
                None => continue,
            };
            let mut score = self.alphabeta(&mut placed, depth - 1, alpha, beta, false);
            drop(placed);

            // Clamp any unresolved sentinel before it can propagate
            if score >= INF {
                score = WIN_SCORE;
            } else if score <= -INF {
                score = -WIN_SCORE;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }

    fn alphabeta(
        &self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        if self.time_up() {
            return self.evaluate(board);
        }

        // Terminal detection before the depth cutoff: a finished game must
        // be seen the moment it exists, whatever the remaining depth.
        if chain::has_five(board, self.me) {
            return WIN_SCORE;
        }
        if chain::has_five(board, self.opp) {
            return -WIN_SCORE;
        }

        if depth == 0 {
            return self.evaluate(board);
        }

        // Candidates are generated and ranked from the AI's perspective at
        // both node types; the ranking is about cutoff quality, not side.
        let moves = generate_candidates(board, self.me, NEAR_RADIUS, self.cand_limit);
        if moves.is_empty() {
            return self.evaluate(board);
        }

        if maximizing {
            let mut value = -INF;
            for mv in moves {
                if self.time_up() {
                    break;
                }
                let mut placed = match board.scoped_place(mv, self.me) {
                    Some(p) => p,
                    None => continue,
                };
                let score = self.alphabeta(&mut placed, depth - 1, alpha, beta, false);
                drop(placed);
                value = value.max(score);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            if value == -INF || value == INF {
                return self.evaluate(board);
            }
            value
        } else {
            let mut value = INF;
            for mv in moves {
                if self.time_up() {
                    break;
                }
                let mut placed = match board.scoped_place(mv, self.opp) {
                    Some(p) => p,
                    None => continue,
                };
                let score = self.alphabeta(&mut placed, depth - 1, alpha, beta, true);
                drop(placed);
                value = value.min(score);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            if value == -INF || value == INF {
                return self.evaluate(board);
            }
            value
        }
    }

    #[inline]
    fn evaluate(&self, board: &Board) -> i32 {
        patterns::evaluate(board, self.me, self.opp)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::search::candidates;

    fn profile(depth: usize, time_ms: u64) -> DifficultyProfile {
        DifficultyProfile {
            search_depth: depth,
            time_limit: Duration::from_millis(time_ms),
            ..DifficultyProfile::hard()
        }
    }

    fn row_of(board: &mut Board, row: i32, cols: std::ops::Range<i32>, symbol: Cell) {
        for c in cols {
            board.place(row, c, symbol);
        }
    }

    #[test]
    fn search_finds_winning_completion() {
        let mut board = Board::default();
        row_of(&mut board, 7, 3..7, Cell::X);
        board.place(9, 9, Cell::O);

        let p = profile(2, 2_000);
        let searcher = Searcher::new(&p, Cell::X);
        let roots = candidates::generate_candidates(&mut board, Cell::X, NEAR_RADIUS, 15);
        let mv = searcher.best_move(&mut board, &roots);
        assert!(mv == Pos::new(7, 2) || mv == Pos::new(7, 7));
    }

    #[test]
    fn search_restores_board() {
        let mut board = Board::default();
        board.place(7, 7, Cell::O);
        board.place(8, 8, Cell::X);
        let before = format!("{board:?}");

        let p = profile(3, 500);
        let searcher = Searcher::new(&p, Cell::X);
        let roots = candidates::generate_candidates(&mut board, Cell::X, NEAR_RADIUS, 15);
        let _ = searcher.best_move(&mut board, &roots);
        assert_eq!(before, format!("{board:?}"));
    }

    #[test]
    fn zero_time_limit_still_returns_legal_move() {
        let mut board = Board::default();
        board.place(7, 7, Cell::O);

        let p = profile(4, 0);
        let searcher = Searcher::new(&p, Cell::X);
        let roots = candidates::generate_candidates(&mut board, Cell::X, NEAR_RADIUS, 15);
        let mv = searcher.best_move(&mut board, &roots);
        assert!(board.is_empty(mv.row, mv.col));
    }

    #[test]
    fn depth_zero_recursion_returns_static_eval() {
        let mut board = Board::default();
        row_of(&mut board, 7, 5..8, Cell::X);
        let p = profile(2, 2_000);
        let searcher = Searcher::new(&p, Cell::X);
        let score = searcher.alphabeta(&mut board, 0, -INF, INF, true);
        assert_eq!(score, patterns::evaluate(&board, Cell::X, Cell::O));
    }

    #[test]
    fn terminal_position_scores_win_sentinel() {
        let mut board = Board::default();
        row_of(&mut board, 7, 3..8, Cell::X);
        let p = profile(3, 2_000);
        let searcher = Searcher::new(&p, Cell::X);
        assert_eq!(searcher.alphabeta(&mut board, 2, -INF, INF, false), WIN_SCORE);

        let mut board = Board::default();
        row_of(&mut board, 7, 3..8, Cell::O);
        assert_eq!(
            searcher.alphabeta(&mut board, 2, -INF, INF, true),
            -WIN_SCORE
        );
    }
}
