//! Move selection: candidate generation, tactical rules, alpha-beta search

pub mod alphabeta;
pub mod candidates;
pub mod tactics;

pub use alphabeta::{Searcher, WIN_SCORE};

/// Neighborhood radius (Chebyshev) for candidate generation and rule scans
pub const NEAR_RADIUS: i32 = 2;
