//! Computer opponent configuration.

use serde::{Deserialize, Serialize};

/// Tuning parameters for the computer opponent.
///
/// The defaults reproduce the reference play style: medium scores a move as
/// `100·extra_turn + 10·captured + 5·store_gain ± 10`, hard searches four plies
/// and values a pit stone at half a store stone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Minimax depth in plies for hard difficulty.
    pub search_depth: u32,

    /// Medium: score bonus for a move that earns an extra turn.
    pub extra_turn_bonus: f64,

    /// Medium: score per captured stone.
    pub capture_weight: f64,

    /// Medium: score per stone added to the mover's store.
    pub store_gain_weight: f64,

    /// Medium: half-width of the uniform noise added to every score.
    /// Keeps medium play from being fully predictable.
    pub jitter: f64,

    /// Hard: weight of the pit-stone difference in the static evaluation.
    pub pit_weight: f64,

    /// Seed for `ComputerPlayer`'s RNG.
    pub seed: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            search_depth: 4,
            extra_turn_bonus: 100.0,
            capture_weight: 10.0,
            store_gain_weight: 5.0,
            jitter: 10.0,
            pit_weight: 0.5,
            seed: 42,
        }
    }
}

impl AiConfig {
    /// Set the minimax search depth.
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Set the medium-difficulty noise half-width.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set the pit-stone weight used by the static evaluator.
    pub fn with_pit_weight(mut self, weight: f64) -> Self {
        self.pit_weight = weight;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
