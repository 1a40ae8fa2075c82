//! Candidate generation and move ordering
//!
//! On a large board the branching factor is tamed by only considering
//! empty cells near existing stones, ranked by a fast one-ply heuristic.
//! The same `quick_score` ranking is reused to order moves inside the
//! alpha-beta search, which is what makes its cutoffs effective.

use crate::board::{Board, Cell, Pos};
use crate::eval::chain;

/// Immediate-win score: placing here completes five for the mover
const SCORE_WIN: i32 = 9_000_000;
/// Win-block score: placing here denies the opponent's five
const SCORE_BLOCK_WIN: i32 = 8_500_000;

/// Empty cells within a Chebyshev box of `radius` around any occupied
/// cell, in row-major order. Empty when the board has no stones.
pub fn near_candidates(board: &Board, radius: i32) -> Vec<Pos> {
    let mut out = Vec::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if !board.is_empty(row, col) {
                continue;
            }
            if has_neighbor(board, row, col, radius) {
                out.push(Pos::new(row, col));
            }
        }
    }
    out
}

fn has_neighbor(board: &Board, row: i32, col: i32, radius: i32) -> bool {
    for dr in -radius..=radius {
        for dc in -radius..=radius {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = (row + dr, col + dc);
            if board.is_inside(r, c) && board.get(r, c) != Cell::Empty {
                return true;
            }
        }
    }
    false
}

/// First empty cell in row-major order, the deterministic fallback when
/// candidate generation yields nothing usable
pub fn first_empty(board: &Board) -> Option<Pos> {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.is_empty(row, col) {
                return Some(Pos::new(row, col));
            }
        }
    }
    None
}

/// Bonus for proximity to the board center, by Manhattan distance
pub fn center_bonus(board: &Board, pos: Pos) -> i32 {
    let center_row = board.rows() / 2;
    let center_col = board.cols() / 2;
    let dist = (pos.row - center_row).abs() + (pos.col - center_col).abs();
    (120 - dist * 6).max(0)
}

/// Local chain strength around a placed stone: sum over axes of
/// `run^2 * 3` for fully open runs, `run^2` otherwise.
pub fn local_chain_bonus(board: &Board, pos: Pos, symbol: Cell) -> i32 {
    crate::board::DIRECTIONS
        .iter()
        .map(|&dir| {
            let (run, open_ends) = chain::count_chain_around(board, pos, dir, symbol);
            run * run * if open_ends == 2 { 3 } else { 1 }
        })
        .sum()
}

/// One-ply ranking score for placing at `pos`, weighing both sides.
///
/// Immediate wins and win-blocks short-circuit; otherwise threats created
/// by either symbol accumulate, with the mover's own weighted slightly
/// above the opponent's so attack is preferred on equal threats.
pub fn quick_score(board: &mut Board, pos: Pos, me: Cell) -> i32 {
    let opp = me.opponent();
    let mut score = center_bonus(board, pos);

    {
        let placed = match board.scoped_place(pos, me) {
            Some(p) => p,
            None => return 0,
        };
        if chain::makes_five(&placed, pos, me) {
            return SCORE_WIN;
        }
        if chain::is_open_four(&placed, pos, me) {
            score += 600_000;
        }
        if chain::is_closed_four(&placed, pos, me) {
            score += 120_000;
        }
        if chain::open_three_dirs(&placed, pos, me) >= 2 {
            score += 80_000;
        }
        score += local_chain_bonus(&placed, pos, me) * 10;
    }

    {
        let placed = match board.scoped_place(pos, opp) {
            Some(p) => p,
            None => return score,
        };
        if chain::makes_five(&placed, pos, opp) {
            return SCORE_BLOCK_WIN;
        }
        if chain::is_open_four(&placed, pos, opp) {
            score += 550_000;
        }
        if chain::is_closed_four(&placed, pos, opp) {
            score += 110_000;
        }
        if chain::open_three_dirs(&placed, pos, opp) >= 2 {
            score += 70_000;
        }
        score += local_chain_bonus(&placed, pos, opp) * 8;
    }

    score
}

/// Top `limit` near candidates ranked by [`quick_score`].
///
/// Falls back to the first empty cell when the board has no stones.
pub fn generate_candidates(board: &mut Board, me: Cell, radius: i32, limit: usize) -> Vec<Pos> {
    let cands = near_candidates(board, radius);
    if cands.is_empty() {
        return first_empty(board).into_iter().collect();
    }

    let mut scored: Vec<(i32, Pos)> = cands
        .into_iter()
        .map(|pos| (quick_score(board, pos, me), pos))
        .collect();
    // Stable sort keeps row-major order among equal scores
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(limit);
    scored.into_iter().map(|(_, pos)| pos).collect()
}

/// Re-score and re-sort an existing move list, dropping occupied cells.
/// Used at the search root where the candidate set is fixed across
/// deepening iterations but the board has evolved.
pub fn order_moves(board: &mut Board, moves: &[Pos], me: Cell) -> Vec<Pos> {
    let empty: Vec<Pos> = moves
        .iter()
        .copied()
        .filter(|pos| board.is_empty(pos.row, pos.col))
        .collect();
    let mut scored: Vec<(i32, Pos)> = empty
        .into_iter()
        .map(|pos| (quick_score(board, pos, me), pos))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, pos)| pos).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_candidates_empty_board() {
        let board = Board::default();
        assert!(near_candidates(&board, 2).is_empty());
    }

    #[test]
    fn near_candidates_respect_radius() {
        let mut board = Board::default();
        board.place(7, 7, Cell::X);
        let cands = near_candidates(&board, 2);
        // 5x5 box around the stone, minus the stone itself
        assert_eq!(cands.len(), 24);
        assert!(cands
            .iter()
            .all(|p| (p.row - 7).abs() <= 2 && (p.col - 7).abs() <= 2));
    }

    #[test]
    fn first_empty_row_major() {
        let mut board = Board::default();
        board.place(0, 0, Cell::X);
        assert_eq!(first_empty(&board), Some(Pos::new(0, 1)));
    }

    #[test]
    fn first_empty_none_when_full() {
        let mut board = Board::new(2, 2);
        for r in 0..2 {
            for c in 0..2 {
                board.place(r, c, Cell::O);
            }
        }
        assert_eq!(first_empty(&board), None);
    }

    #[test]
    fn center_bonus_peaks_at_center() {
        let board = Board::default();
        assert_eq!(center_bonus(&board, Pos::new(7, 7)), 120);
        assert_eq!(center_bonus(&board, Pos::new(7, 8)), 114);
        assert_eq!(center_bonus(&board, Pos::new(0, 0)), 36);
    }

    #[test]
    fn quick_score_short_circuits_on_win() {
        let mut board = Board::default();
        for c in 3..7 {
            board.place(7, c, Cell::X);
        }
        assert_eq!(quick_score(&mut board, Pos::new(7, 7), Cell::X), SCORE_WIN);
        // Board restored by the guards
        assert!(board.is_empty(7, 7));
    }

    #[test]
    fn quick_score_flags_win_block() {
        let mut board = Board::default();
        for c in 3..7 {
            board.place(7, c, Cell::O);
        }
        assert_eq!(
            quick_score(&mut board, Pos::new(7, 7), Cell::X),
            SCORE_BLOCK_WIN
        );
    }

    #[test]
    fn generate_candidates_caps_and_ranks() {
        let mut board = Board::default();
        board.place(7, 7, Cell::X);
        board.place(7, 8, Cell::X);
        board.place(8, 7, Cell::O);
        let cands = generate_candidates(&mut board, Cell::X, 2, 10);
        assert_eq!(cands.len(), 10);
        // Every candidate stays near the cluster
        assert!(cands
            .iter()
            .all(|p| (p.row - 7).abs() <= 3 && (p.col - 7).abs() <= 3));
    }

    #[test]
    fn generate_candidates_falls_back_to_first_empty() {
        let mut board = Board::default();
        let cands = generate_candidates(&mut board, Cell::X, 2, 15);
        assert_eq!(cands, vec![Pos::new(0, 0)]);
    }

    #[test]
    fn order_moves_puts_forcing_move_first() {
        let mut board = Board::default();
        for c in 3..7 {
            board.place(7, c, Cell::X);
        }
        board.place(9, 9, Cell::O);
        let moves = vec![Pos::new(0, 0), Pos::new(10, 10), Pos::new(7, 7)];
        let ordered = order_moves(&mut board, &moves, Cell::X);
        assert_eq!(ordered[0], Pos::new(7, 7));
    }

    #[test]
    fn order_moves_drops_occupied() {
        let mut board = Board::default();
        board.place(5, 5, Cell::X);
        let ordered = order_moves(&mut board, &[Pos::new(5, 5), Pos::new(5, 6)], Cell::X);
        assert_eq!(ordered, vec![Pos::new(5, 6)]);
    }
}
