//! Game state as tracked by a UI or session layer.
//!
//! The engine functions in [`super::engine`] only ever see a board and a
//! player. `GameState` bundles the extra bookkeeping a front end needs (whose
//! turn it is, cosmetic skins, the last move, the outcome) and drives turn
//! passing from `MoveResult::extra_turn`.
//!
//! Every transition returns a new `GameState`; nothing is mutated in place.

use serde::{Deserialize, Serialize};

use super::engine::{make_move, MoveResult};
use crate::core::{Board, Player};
use crate::error::{EngineError, Result};

/// Cosmetic identity shown for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    Dog,
    Cat,
}

impl std::fmt::Display for Skin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skin::Dog => write!(f, "Dog"),
            Skin::Cat => write!(f, "Cat"),
        }
    }
}

/// The most recent move played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub pit: usize,
    pub player: Player,
}

/// Board plus turn and presentation state for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub player_one_skin: Skin,
    pub player_two_skin: Skin,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub last_move: Option<LastMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game: player 1 to move, player 1 plays as the dog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_skins(Skin::Dog, Skin::Cat)
    }

    /// A fresh game with the given skins.
    #[must_use]
    pub fn with_skins(player_one_skin: Skin, player_two_skin: Skin) -> Self {
        Self {
            board: Board::initial(),
            current_player: Player::One,
            player_one_skin,
            player_two_skin,
            game_over: false,
            winner: None,
            last_move: None,
        }
    }

    /// Skin assigned to a player.
    #[must_use]
    pub fn skin(&self, player: Player) -> Skin {
        match player {
            Player::One => self.player_one_skin,
            Player::Two => self.player_two_skin,
        }
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.board.store(player)
    }

    /// Play `pit` for the current player.
    ///
    /// The current player keeps the turn after an extra-turn move; otherwise
    /// the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] once the game has finished.
    /// - [`EngineError::PreconditionViolation`] if the pit is not playable.
    pub fn apply_move(&self, pit: usize) -> Result<(GameState, MoveResult)> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }

        let mover = self.current_player;
        let result = make_move(&self.board, pit, mover)?;

        let next = GameState {
            board: result.board,
            current_player: if result.extra_turn {
                mover
            } else {
                mover.opponent()
            },
            game_over: result.game_over,
            winner: result.winner,
            last_move: Some(LastMove { pit, player: mover }),
            ..self.clone()
        };

        Ok((next, result))
    }

    /// Start over with a fresh board, keeping the skins.
    #[must_use]
    pub fn reset(&self) -> GameState {
        Self::with_skins(self.player_one_skin, self.player_two_skin)
    }

    /// Swap the two players' skins.
    #[must_use]
    pub fn swap_skins(&self) -> GameState {
        GameState {
            player_one_skin: self.player_two_skin,
            player_two_skin: self.player_one_skin,
            ..self.clone()
        }
    }

    /// Human-readable status line.
    #[must_use]
    pub fn status(&self) -> String {
        get_game_status(self)
    }
}

/// Status line for a game: whose turn it is, who won, or a tie.
#[must_use]
pub fn get_game_status(state: &GameState) -> String {
    if state.game_over {
        return match state.winner {
            Some(winner) => format!("{} wins!", state.skin(winner)),
            None => "It's a tie!".to_string(),
        };
    }
    format!("{}'s turn", state.skin(state.current_player))
}
