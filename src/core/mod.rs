//! Core types: board, players, RNG and opponent configuration.
//!
//! Nothing here knows the rules of sowing; see `rules` for that.

pub mod board;
pub mod config;
pub mod player;
pub mod rng;

pub use board::{
    Board, BOARD_SIZE, INITIAL_STONES, PITS_PER_PLAYER, PLAYER_1_STORE, PLAYER_2_STORE,
};
pub use config::AiConfig;
pub use player::Player;
pub use rng::{GameRng, GameRngState};
