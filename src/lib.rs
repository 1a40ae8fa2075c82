//! Caro (five-in-a-row) engine with three AI difficulty tiers
//!
//! A complete engine for free-style Caro/Gomoku:
//! - Resizable board, 15x15 by default
//! - 5-in-a-row to win; overlines count, the reported window is the first
//!   five of the run
//! - Three opponents: random-leaning Easy, heuristic Normal, and a Hard
//!   tier combining a tactical rule ladder with deadline-bounded
//!   iterative-deepening alpha-beta
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, win detection, scoped placement
//! - [`eval`]: Chain counting and the static pattern evaluation
//! - [`search`]: Candidate generation, tactical rules, alpha-beta search
//! - [`strategy`]: The three difficulty tiers behind one [`Strategy`] trait
//! - [`game`]: Turn controller with undo/redo and result tracking
//! - [`config`]: Per-difficulty tuning profiles
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use caro::{DifficultyProfile, Game, HardStrategy};
//!
//! let mut game = Game::new();
//! game.make_move(7, 7).expect("legal move");
//!
//! // AI responds as O; short deadline keeps the doc test fast
//! let profile = DifficultyProfile {
//!     search_depth: 2,
//!     time_limit: Duration::from_millis(200),
//!     ..DifficultyProfile::hard()
//! };
//! let mut ai = HardStrategy::new(caro::Cell::O, profile);
//! let pos = game.ai_move(&mut ai).expect("AI move");
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```
//!
//! # Move Priority (Hard tier)
//!
//! 1. Win now
//! 2. Block the opponent's win
//! 3. Deny the opponent's open four
//! 4. Make an open four
//! 5. Validated blocks of closed fours and double threes
//! 6. Make a closed four or double three
//! 7. Counter-threat
//! 8. Alpha-beta search over near candidates

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;
pub mod strategy;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, DEFAULT_SIZE, WIN_LENGTH};
pub use config::DifficultyProfile;
pub use error::GameError;
pub use game::Game;
pub use search::{Searcher, WIN_SCORE};
pub use strategy::{EasyStrategy, HardStrategy, NormalStrategy, Strategy};
