//! Computer opponent.
//!
//! ## Overview
//!
//! Given a board and the player to move, pick one of that player's valid
//! pits. Three difficulties, each backed by a [`MovePolicy`]:
//!
//! - **Easy**: uniformly random
//! - **Medium**: one-move lookahead favouring extra turns, captures and store
//!   gains, with random noise
//! - **Hard**: four-ply minimax with alpha-beta pruning
//!
//! Randomness always comes from a caller-supplied [`GameRng`].
//!
//! ## Usage
//!
//! ```rust
//! use mancala::ai::{select_computer_move, Difficulty};
//! use mancala::core::{GameRng, Player};
//! use mancala::rules::create_initial_board;
//!
//! let board = create_initial_board();
//! let mut rng = GameRng::new(42);
//!
//! let pit = select_computer_move(&board, Player::Two, Difficulty::Hard, &mut rng).unwrap();
//! assert!(Player::Two.pits().contains(&pit));
//! ```

pub mod eval;
pub mod minimax;
pub mod policy;
pub mod stats;

pub use eval::evaluate_board;
pub use minimax::{MinimaxSearch, SearchResult};
pub use policy::{HeuristicPolicy, MinimaxPolicy, MovePolicy, RandomPolicy};
pub use stats::SearchStats;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AiConfig, Board, GameRng, GameRngState, Player};
use crate::error::{EngineError, Result};
use crate::rules::valid_moves;

/// Computer opponent strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, weakest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Build the policy for this difficulty.
    #[must_use]
    pub fn policy(self, config: &AiConfig) -> Box<dyn MovePolicy> {
        match self {
            Difficulty::Easy => Box::new(RandomPolicy),
            Difficulty::Medium => Box::new(HeuristicPolicy::from_config(config)),
            Difficulty::Hard => Box::new(MinimaxPolicy::from_config(config)),
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Pick a move for `player` using the default [`AiConfig`].
///
/// # Errors
///
/// [`EngineError::NoValidMoves`] if every pit of `player` is empty. Callers
/// should have detected game over first.
pub fn select_computer_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Result<usize> {
    select_computer_move_with(board, player, difficulty, &AiConfig::default(), rng)
}

/// Pick a move for `player` with explicit tuning.
///
/// # Errors
///
/// [`EngineError::NoValidMoves`] if every pit of `player` is empty.
pub fn select_computer_move_with(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    config: &AiConfig,
    rng: &mut GameRng,
) -> Result<usize> {
    let moves = valid_moves(board, player);
    if moves.is_empty() {
        warn!(player = player.number(), %difficulty, "computer asked to move with no valid moves");
        return Err(EngineError::NoValidMoves(player));
    }

    let policy = difficulty.policy(config);
    let pit = policy
        .select(board, player, &moves, rng)
        .ok_or(EngineError::NoValidMoves(player))?;

    debug!(
        player = player.number(),
        %difficulty,
        policy = policy.name(),
        pit,
        "computer move selected"
    );
    Ok(pit)
}

/// A computer seat: configuration plus its own random stream.
#[derive(Clone, Debug)]
pub struct ComputerPlayer {
    config: AiConfig,
    rng: GameRng,
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

impl ComputerPlayer {
    /// Create a computer player seeded from `config.seed`.
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// Create a computer player with a caller-provided RNG.
    #[must_use]
    pub fn with_rng(config: AiConfig, rng: GameRng) -> Self {
        Self { config, rng }
    }

    /// Resume a seat whose generator was saved with [`Self::rng_state`].
    #[must_use]
    pub fn resume(config: AiConfig, state: &GameRngState) -> Self {
        Self::with_rng(config, GameRng::from_state(state))
    }

    /// Configuration this seat plays with.
    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Position of this seat's random stream, for persisting a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Choose a move for `player`.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoValidMoves`] if `player` cannot move.
    pub fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Result<usize> {
        select_computer_move_with(board, player, difficulty, &self.config, &mut self.rng)
    }
}
