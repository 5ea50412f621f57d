//! # mancala-engine
//!
//! Rules engine and computer opponent for two-player Mancala
//! (6 pits and 1 store per side, 4 stones per pit at the start).
//!
//! ## Design Principles
//!
//! 1. **Pure**: every engine call takes a board value and returns a new one.
//!    Nothing reads ambient state and nothing mutates its inputs.
//!
//! 2. **Deterministic given a seed**: the only randomness is the opponent's,
//!    and it always comes from an explicit [`GameRng`].
//!
//! 3. **Narrow interface**: rendering, animation and networking live outside
//!    this crate and talk to it through a handful of functions.
//!
//! ## Modules
//!
//! - `core`: board, players, RNG, opponent configuration
//! - `rules`: move validation and resolution, game-state bookkeeping
//! - `ai`: random, heuristic and minimax move selection
//! - `error`: the crate error type
//!
//! ## Example
//!
//! ```
//! use mancala::{create_initial_board, is_valid_move, make_move, Player};
//!
//! let board = create_initial_board();
//! assert!(is_valid_move(&board, 2, Player::One));
//!
//! let result = make_move(&board, 2, Player::One).unwrap();
//! assert!(result.extra_turn);
//! assert_eq!(result.board.total_stones(), board.total_stones());
//! ```

pub mod ai;
pub mod core;
pub mod error;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    AiConfig, Board, GameRng, GameRngState, Player, BOARD_SIZE, INITIAL_STONES,
    PITS_PER_PLAYER, PLAYER_1_STORE, PLAYER_2_STORE,
};

pub use crate::error::{EngineError, Result};

pub use crate::rules::{
    create_initial_board, get_game_status, is_valid_move, make_move, opponent_store,
    opposite_pit, player_pits, player_store, valid_moves, DistributionPath, GameResult,
    GameState, LastMove, MoveList, MoveResult, Skin,
};

pub use crate::ai::{
    evaluate_board, select_computer_move, select_computer_move_with, ComputerPlayer, Difficulty,
    HeuristicPolicy, MinimaxPolicy, MinimaxSearch, MovePolicy, RandomPolicy, SearchResult,
    SearchStats,
};
