//! Static board evaluation for the minimax search.

use crate::core::{Board, Player};

/// Score a board from `player`'s point of view.
///
/// `(own store - opponent store) + pit_weight * (own pit stones - opponent pit stones)`
///
/// Stones still in pits may yet change hands, so they count for less than
/// banked stones.
#[must_use]
pub fn evaluate_board(board: &Board, player: Player, pit_weight: f64) -> f64 {
    let opponent = player.opponent();
    let store_diff = f64::from(board.store(player)) - f64::from(board.store(opponent));
    let pit_diff = f64::from(board.side_stones(player)) - f64::from(board.side_stones(opponent));
    store_diff + pit_weight * pit_diff
}
