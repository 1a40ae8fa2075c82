//! Error types for the turn controller
//!
//! The engine core itself reports invalid moves through boolean returns
//! and `Option`; these errors only arise at the [`Game`](crate::Game)
//! layer, where a caller's request can be refused.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },

    #[error("game is already over")]
    GameOver,

    #[error("strategy plays a symbol that is not on turn")]
    OutOfTurn,

    #[error("no empty cell remains")]
    BoardFull,
}
