//! Mancala rules.
//!
//! - `engine`: pure move resolution over a `Board`
//! - `state`: turn bookkeeping for a front end driving a whole game
//!
//! The opponent AI builds only on the public functions in `engine`.

pub mod engine;
pub mod state;

pub use engine::{
    create_initial_board, is_valid_move, leader, make_move, opponent_store, opposite_pit,
    player_pits, player_store, valid_moves, DistributionPath, GameResult, MoveList, MoveResult,
};
pub use state::{get_game_status, GameState, LastMove, Skin};
