//! The three move-selection policies
//!
//! Every tier implements one contract: given a mutable borrow of the
//! board for the duration of the call, return a single legal move, or
//! `None` only when no empty cell exists. A strategy may place and remove
//! stones while analyzing, but the board it hands back is always in its
//! entry state.

pub mod easy;
pub mod hard;
pub mod normal;

pub use easy::EasyStrategy;
pub use hard::HardStrategy;
pub use normal::NormalStrategy;

use crate::board::{Board, Cell, Pos};

/// A move-selection policy bound to one symbol for its whole life
pub trait Strategy {
    /// The symbol this strategy plays
    fn symbol(&self) -> Cell;

    /// Choose a move. `None` iff the board has no empty cell.
    ///
    /// The board is borrowed mutably for scratch analysis only; on return
    /// its observable state equals its state at entry.
    fn get_move(&mut self, board: &mut Board) -> Option<Pos>;
}
