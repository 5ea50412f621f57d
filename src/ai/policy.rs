//! Move-selection policies, one per difficulty.
//!
//! Policies are trait-based so a front end can plug in its own opponent:
//! - `RandomPolicy`: uniform choice (easy)
//! - `HeuristicPolicy`: one-move lookahead with noise (medium)
//! - `MinimaxPolicy`: alpha-beta search (hard)

use tracing::debug;

use super::minimax::MinimaxSearch;
use crate::core::{AiConfig, Board, GameRng, Player};
use crate::rules::make_move;

/// Policy for choosing one of a player's valid moves.
pub trait MovePolicy: Send + Sync {
    /// Choose a pit from `moves`, which holds `player`'s valid moves in pit
    /// order.
    ///
    /// Returns `None` only if `moves` is empty.
    fn select(
        &self,
        board: &Board,
        player: Player,
        moves: &[usize],
        rng: &mut GameRng,
    ) -> Option<usize>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Uniform random selection.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn select(
        &self,
        _board: &Board,
        _player: Player,
        moves: &[usize],
        rng: &mut GameRng,
    ) -> Option<usize> {
        rng.choose(moves).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Greedy one-move lookahead.
///
/// Each candidate is simulated once and scored as
/// `extra_turn_bonus·extra_turn + capture_weight·captured
///  + store_gain_weight·store_gain + U(-jitter, jitter)`.
/// The highest score wins; the earliest pit wins exact ties.
#[derive(Clone, Debug)]
pub struct HeuristicPolicy {
    pub extra_turn_bonus: f64,
    pub capture_weight: f64,
    pub store_gain_weight: f64,
    pub jitter: f64,
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::from_config(&AiConfig::default())
    }
}

impl HeuristicPolicy {
    #[must_use]
    pub fn from_config(config: &AiConfig) -> Self {
        Self {
            extra_turn_bonus: config.extra_turn_bonus,
            capture_weight: config.capture_weight,
            store_gain_weight: config.store_gain_weight,
            jitter: config.jitter,
        }
    }

    /// Score of playing `pit`, noise excluded. `None` if the pit is not
    /// playable.
    #[must_use]
    pub fn base_score(&self, board: &Board, pit: usize, player: Player) -> Option<f64> {
        let result = make_move(board, pit, player).ok()?;

        let mut score = 0.0;
        if result.extra_turn {
            score += self.extra_turn_bonus;
        }
        score += self.capture_weight * f64::from(result.captured_stones);

        let gain = f64::from(result.board.store(player)) - f64::from(board.store(player));
        score += self.store_gain_weight * gain;

        Some(score)
    }
}

impl MovePolicy for HeuristicPolicy {
    fn select(
        &self,
        board: &Board,
        player: Player,
        moves: &[usize],
        rng: &mut GameRng,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for &pit in moves {
            let Some(base) = self.base_score(board, pit, player) else {
                continue;
            };
            let score = base + rng.jitter(self.jitter);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pit, score));
            }
        }

        best.map(|(pit, _)| pit)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Alpha-beta minimax to a fixed depth.
#[derive(Clone, Debug)]
pub struct MinimaxPolicy {
    pub depth: u32,
    pub pit_weight: f64,
}

impl Default for MinimaxPolicy {
    fn default() -> Self {
        Self::from_config(&AiConfig::default())
    }
}

impl MinimaxPolicy {
    #[must_use]
    pub fn from_config(config: &AiConfig) -> Self {
        Self {
            depth: config.search_depth,
            pit_weight: config.pit_weight,
        }
    }
}

impl MovePolicy for MinimaxPolicy {
    fn select(
        &self,
        board: &Board,
        player: Player,
        moves: &[usize],
        _rng: &mut GameRng,
    ) -> Option<usize> {
        if moves.is_empty() {
            return None;
        }

        let mut search = MinimaxSearch::new(self.depth, self.pit_weight);
        let result = search.search_moves(board, player, moves)?;

        debug!(
            best_move = result.best_move,
            score = result.score,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            time_us = result.stats.time_us,
            "minimax search finished"
        );

        Some(result.best_move)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}
