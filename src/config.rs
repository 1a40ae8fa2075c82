//! Per-tier AI configuration
//!
//! A [`DifficultyProfile`] is built once, handed to a strategy at
//! construction, and never consulted from anywhere else — there is no
//! ambient or global configuration lookup. Serde derives let a harness
//! load profiles from JSON; every field falls back to its default when
//! absent.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Immutable per-tier AI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyProfile {
    /// Maximum search depth in plies (hard tier)
    pub search_depth: usize,
    /// Cap on root/interior candidates, floored at 10 by the searcher
    pub max_candidates: usize,
    /// Wall-clock budget for one `get_move` call (hard tier)
    pub time_limit: Duration,
    /// Weight on the mover's own chains (normal tier)
    pub attack_weight: f64,
    /// Weight on the opponent's chains (normal tier)
    pub defense_weight: f64,
    /// Probability of discarding the chosen move for a random one
    pub random_rate: f64,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self {
            search_depth: 4,
            max_candidates: 15,
            time_limit: Duration::from_secs(7),
            attack_weight: 1.0,
            defense_weight: 1.0,
            random_rate: 0.01,
        }
    }
}

impl DifficultyProfile {
    /// Easy tier: pure rules-of-thumb play, no search
    pub fn easy() -> Self {
        Self {
            random_rate: 1.0,
            ..Self::default()
        }
    }

    /// Normal tier: chain heuristic with a light random touch
    pub fn normal() -> Self {
        Self::default()
    }

    /// Hard tier: rule ladder plus deadline-bounded alpha-beta
    pub fn hard() -> Self {
        Self {
            random_rate: 0.0,
            ..Self::default()
        }
    }
}
