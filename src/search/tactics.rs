//! Tactical rule ladder for the hard tier
//!
//! An ordered sequence of pattern checks runs before any search: win now,
//! block a win, then open-four / closed-four / double-three creation and
//! denial, then a counter-threat probe. The first matching rule decides
//! the move; only when nothing matches does the engine fall back to
//! alpha-beta. Ambiguous blocks (closed four, double three) pass through a
//! defense validation so the engine never spends its move on a block that
//! leaves the opponent an immediate winning answer elsewhere.

use log::debug;

use crate::board::{Board, Cell, Pos};
use crate::eval::chain;

use super::candidates::{center_bonus, near_candidates};
use super::NEAR_RADIUS;

/// Minimum counter-threat score worth playing over a search fallback
const COUNTER_THREAT_MIN: i32 = 200;

/// Full-board scan for a cell that completes five for `symbol`.
/// Used by the easy and normal tiers, which do not keep a candidate set.
pub fn winning_square(board: &mut Board, symbol: Cell) -> Option<Pos> {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let pos = Pos::new(row, col);
            if let Some(placed) = board.scoped_place(pos, symbol) {
                if chain::makes_five(&placed, pos, symbol) {
                    return Some(pos);
                }
            }
        }
    }
    None
}

/// Near-candidate scan for a cell that completes five for `symbol`,
/// falling back to every empty cell when no stone has neighbors yet
pub fn winning_square_near(board: &mut Board, symbol: Cell) -> Option<Pos> {
    let cands = near_candidates(board, NEAR_RADIUS);
    if cands.is_empty() {
        return winning_square(board, symbol);
    }
    for pos in cands {
        if let Some(placed) = board.scoped_place(pos, symbol) {
            if chain::makes_five(&placed, pos, symbol) {
                return Some(pos);
            }
        }
    }
    None
}

/// Near cell where placing `symbol` creates an open four
pub fn open_four_square(board: &mut Board, symbol: Cell) -> Option<Pos> {
    for pos in near_candidates(board, NEAR_RADIUS) {
        if let Some(placed) = board.scoped_place(pos, symbol) {
            if chain::is_open_four(&placed, pos, symbol) {
                return Some(pos);
            }
        }
    }
    None
}

/// Near cell where placing `symbol` creates a closed four
pub fn closed_four_square(board: &mut Board, symbol: Cell) -> Option<Pos> {
    for pos in near_candidates(board, NEAR_RADIUS) {
        if let Some(placed) = board.scoped_place(pos, symbol) {
            if chain::is_closed_four(&placed, pos, symbol) {
                return Some(pos);
            }
        }
    }
    None
}

/// Near cell where placing `symbol` creates the most simultaneous open
/// threes, provided there are at least two
pub fn double_three_square(board: &mut Board, symbol: Cell) -> Option<Pos> {
    let mut best = None;
    let mut best_axes = 0;
    for pos in near_candidates(board, NEAR_RADIUS) {
        let axes = match board.scoped_place(pos, symbol) {
            Some(placed) => chain::open_three_dirs(&placed, pos, symbol),
            None => continue,
        };
        if axes >= 2 && axes > best_axes {
            best_axes = axes;
            best = Some(pos);
        }
    }
    best
}

/// Validate a defensive move against immediate counterplay.
///
/// After hypothetically playing `mv`, the block is rejected if the
/// opponent can answer with an immediate win, an open four, or a
/// double-open-three anywhere in the near neighborhood. A block that
/// merely trades one loss for another is worse than trying the next rule.
pub fn defense_valid(board: &mut Board, mv: Pos, me: Cell) -> bool {
    let opp = me.opponent();
    let mut placed = match board.scoped_place(mv, me) {
        Some(p) => p,
        None => return false,
    };

    if winning_square_near(&mut placed, opp).is_some() {
        return false;
    }

    let replies = near_candidates(&placed, NEAR_RADIUS);
    for reply in replies {
        let danger = match placed.scoped_place(reply, opp) {
            Some(answered) => {
                chain::is_open_four(&answered, reply, opp)
                    || chain::open_three_dirs(&answered, reply, opp) >= 2
            }
            None => continue,
        };
        if danger {
            return false;
        }
    }
    true
}

/// Best threat-building move when no forced rule applies.
///
/// Scores each near candidate by the threats it creates (open four,
/// double three, open threes, center proximity) and plays it only when
/// strong enough to force a defensive answer.
pub fn best_counter_threat(board: &mut Board, me: Cell) -> Option<Pos> {
    let mut best = None;
    let mut best_score = -1;

    for pos in near_candidates(board, NEAR_RADIUS) {
        let score = {
            let placed = match board.scoped_place(pos, me) {
                Some(p) => p,
                None => continue,
            };
            let mut score = 0;
            if chain::is_open_four(&placed, pos, me) {
                score += 1_000;
            }
            let threes = chain::open_three_dirs(&placed, pos, me) as i32;
            if threes >= 2 {
                score += 400;
            }
            score += threes * 80;
            score + center_bonus(&placed, pos)
        };

        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    if best_score >= COUNTER_THREAT_MIN {
        best
    } else {
        None
    }
}

/// The rule ladder. First match wins; `None` defers to the search.
pub fn rule_move(board: &mut Board, me: Cell) -> Option<Pos> {
    let opp = me.opponent();

    // 1) Win now
    if let Some(mv) = winning_square_near(board, me) {
        debug!("rule: win now at ({}, {})", mv.row, mv.col);
        return Some(mv);
    }

    // 2) Block opponent win now — unconditional
    if let Some(mv) = winning_square_near(board, opp) {
        debug!("rule: block win at ({}, {})", mv.row, mv.col);
        return Some(mv);
    }

    // 3) Block opponent open four — unconditional
    if let Some(mv) = open_four_square(board, opp) {
        debug!("rule: block open four at ({}, {})", mv.row, mv.col);
        return Some(mv);
    }

    // 4) Create own open four
    if let Some(mv) = open_four_square(board, me) {
        debug!("rule: make open four at ({}, {})", mv.row, mv.col);
        return Some(mv);
    }

    // 5) Block opponent closed four, if the block survives validation
    if let Some(mv) = closed_four_square(board, opp) {
        if defense_valid(board, mv, me) {
            debug!("rule: block closed four at ({}, {})", mv.row, mv.col);
            return Some(mv);
        }
    }

    // 6) Block opponent double open three, same validation
    if let Some(mv) = double_three_square(board, opp) {
        if defense_valid(board, mv, me) {
            debug!("rule: block double three at ({}, {})", mv.row, mv.col);
            return Some(mv);
        }
    }

    // 7) Create own closed four
    if let Some(mv) = closed_four_square(board, me) {
        debug!("rule: make closed four at ({}, {})", mv.row, mv.col);
        return Some(mv);
    }

    // 8) Create own double open three
    if let Some(mv) = double_three_square(board, me) {
        debug!("rule: make double three at ({}, {})", mv.row, mv.col);
        return Some(mv);
    }

    // 9) Counter-threat
    if let Some(mv) = best_counter_threat(board, me) {
        debug!("rule: counter-threat at ({}, {})", mv.row, mv.col);
        return Some(mv);
    }

    None
}
