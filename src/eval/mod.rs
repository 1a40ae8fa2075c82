//! Position analysis: chain counting and pattern-based evaluation

pub mod chain;
pub mod patterns;

pub use patterns::{evaluate, PatternScore};
