//! Move resolution: validation, sowing, capture, extra turns and endgame.
//!
//! All functions are pure. `make_move` copies the board it is given and
//! returns the result alongside move metadata; the caller's board is never
//! touched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Board, Player, BOARD_SIZE, PITS_PER_PLAYER};
use crate::error::{EngineError, Result};

/// Pit indices that received a stone, in placement order.
pub type DistributionPath = SmallVec<[usize; 16]>;

/// Legal pits for one player, in board order.
pub type MoveList = SmallVec<[usize; PITS_PER_PLAYER]>;

/// Final outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(Player),
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Everything produced by applying one move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Board after sowing, capture and any endgame sweep.
    pub board: Board,

    /// Stones moved to the mover's store by a capture (landing stone included).
    pub captured_stones: u32,

    /// The last stone landed in the mover's store.
    pub extra_turn: bool,

    /// One side ran out of stones and the remainder was swept.
    pub game_over: bool,

    /// Player with the larger store once the game is over. `None` while play
    /// continues and on a tie.
    pub winner: Option<Player>,

    /// Every slot that received a stone, for animating the sowing.
    pub distribution_path: DistributionPath,
}

impl MoveResult {
    /// The game's outcome, if this move ended it.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        if !self.game_over {
            return None;
        }
        Some(match self.winner {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Tie,
        })
    }
}

/// Create the starting board: four stones per pit, empty stores.
#[must_use]
pub fn create_initial_board() -> Board {
    Board::initial()
}

/// The six pits owned by `player`.
#[must_use]
pub fn player_pits(player: Player) -> [usize; PITS_PER_PLAYER] {
    player.pits()
}

/// Store index of `player`.
#[must_use]
pub fn player_store(player: Player) -> usize {
    player.store()
}

/// Store index of `player`'s opponent.
#[must_use]
pub fn opponent_store(player: Player) -> usize {
    player.opponent().store()
}

/// The pit facing `pit` across the board.
///
/// Only meaningful for pit indices 0-12 that are not stores.
#[must_use]
pub fn opposite_pit(pit: usize) -> usize {
    debug_assert!(pit <= 12, "pit {pit} has no opposite");
    12 - pit
}

/// Check whether `player` may sow from `pit`.
///
/// The pit must be one of the player's own six pits and hold at least one
/// stone.
#[must_use]
pub fn is_valid_move(board: &Board, pit: usize, player: Player) -> bool {
    player.owns_pit(pit) && board[pit] > 0
}

/// All pits `player` may currently sow from, in board order.
#[must_use]
pub fn valid_moves(board: &Board, player: Player) -> MoveList {
    player
        .pits()
        .into_iter()
        .filter(|&pit| is_valid_move(board, pit, player))
        .collect()
}

/// Winner by store count, `None` on a tie.
#[must_use]
pub fn leader(board: &Board) -> Option<Player> {
    let one = board.store(Player::One);
    let two = board.store(Player::Two);
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => Some(Player::One),
        std::cmp::Ordering::Less => Some(Player::Two),
        std::cmp::Ordering::Equal => None,
    }
}

/// Sow the stones from `pit` for `player` and resolve the consequences.
///
/// Sowing moves forward one slot at a time, wrapping after slot 13. The
/// opponent's store is skipped without consuming a stone, on every lap.
///
/// After sowing, in order:
/// - **Capture**: the last stone landed in one of the mover's own pits that
///   was empty, and the opposite pit is non-empty. Both pits go to the
///   mover's store.
/// - **Extra turn**: the last stone landed in the mover's store.
/// - **Game over**: either side's pits are all empty. The other side's pits
///   are swept into that side's own store and the larger store wins.
///
/// # Errors
///
/// [`EngineError::PreconditionViolation`] if `is_valid_move` fails for `pit`.
pub fn make_move(board: &Board, pit: usize, player: Player) -> Result<MoveResult> {
    if !is_valid_move(board, pit, player) {
        return Err(EngineError::PreconditionViolation { pit, player });
    }

    let mut next = *board;
    let mut stones = next[pit];
    next[pit] = 0;

    let skipped = opponent_store(player);
    let own_store = player_store(player);
    let mut index = pit;
    let mut distribution_path = DistributionPath::new();

    while stones > 0 {
        index = (index + 1) % BOARD_SIZE;
        if index == skipped {
            continue;
        }
        next[index] += 1;
        distribution_path.push(index);
        stones -= 1;
    }
    let landing = index;

    let mut captured_stones = 0;
    if player.owns_pit(landing) && next[landing] == 1 {
        let opposite = opposite_pit(landing);
        if next[opposite] > 0 {
            captured_stones = next[opposite] + 1;
            next[own_store] += captured_stones;
            next[landing] = 0;
            next[opposite] = 0;
        }
    }

    let extra_turn = landing == own_store;

    let one_empty = next.is_side_empty(Player::One);
    let game_over = one_empty || next.is_side_empty(Player::Two);
    let mut winner = None;

    if game_over {
        let remaining_side = if one_empty { Player::Two } else { Player::One };
        let swept = next.sweep_side(remaining_side);
        winner = leader(&next);
        debug!(
            player_one_store = next.store(Player::One),
            player_two_store = next.store(Player::Two),
            swept,
            winner = ?winner,
            "game over"
        );
    }

    trace!(
        pit,
        player = player.number(),
        landing,
        captured_stones,
        extra_turn,
        "move applied"
    );

    Ok(MoveResult {
        board: next,
        captured_stones,
        extra_turn,
        game_over,
        winner,
        distribution_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PLAYER_1_STORE, PLAYER_2_STORE};

    #[test]
    fn test_accessors() {
        assert_eq!(player_pits(Player::One), [0, 1, 2, 3, 4, 5]);
        assert_eq!(player_pits(Player::Two), [7, 8, 9, 10, 11, 12]);
        assert_eq!(player_store(Player::One), 6);
        assert_eq!(player_store(Player::Two), 13);
        assert_eq!(opponent_store(Player::One), 13);
        assert_eq!(opponent_store(Player::Two), 6);
    }

    #[test]
    fn test_opposite_pit() {
        assert_eq!(opposite_pit(0), 12);
        assert_eq!(opposite_pit(1), 11);
        assert_eq!(opposite_pit(5), 7);
        assert_eq!(opposite_pit(7), 5);
        assert_eq!(opposite_pit(12), 0);
    }

    #[test]
    fn test_is_valid_move() {
        let mut board = create_initial_board();
        assert!(is_valid_move(&board, 0, Player::One));
        assert!(is_valid_move(&board, 12, Player::Two));

        // Wrong side
        assert!(!is_valid_move(&board, 7, Player::One));
        assert!(!is_valid_move(&board, 0, Player::Two));

        // Stores and out of range
        assert!(!is_valid_move(&board, PLAYER_1_STORE, Player::One));
        assert!(!is_valid_move(&board, PLAYER_2_STORE, Player::Two));
        assert!(!is_valid_move(&board, 40, Player::One));

        board[0] = 0;
        assert!(!is_valid_move(&board, 0, Player::One));
    }

    #[test]
    fn test_valid_moves_in_pit_order() {
        let mut board = create_initial_board();
        board[8] = 0;
        board[11] = 0;

        assert_eq!(valid_moves(&board, Player::Two).as_slice(), &[7, 9, 10, 12]);
        assert_eq!(valid_moves(&board, Player::One).len(), 6);
    }

    #[test]
    fn test_simple_distribution() {
        let board = create_initial_board();
        let result = make_move(&board, 0, Player::One).unwrap();

        assert_eq!(result.board[0], 0);
        for pit in 1..=4 {
            assert_eq!(result.board[pit], 5);
        }
        assert_eq!(result.distribution_path.as_slice(), &[1, 2, 3, 4]);
        assert!(!result.extra_turn);
        assert!(!result.game_over);
        assert_eq!(result.outcome(), None);

        // Caller's board untouched
        assert_eq!(board, create_initial_board());
    }

    #[test]
    fn test_skips_opponent_store() {
        let mut board = create_initial_board();
        board[5] = 8;

        let result = make_move(&board, 5, Player::One).unwrap();

        assert_eq!(result.board[PLAYER_2_STORE], 0);
        assert_eq!(
            result.distribution_path.as_slice(),
            &[6, 7, 8, 9, 10, 11, 12, 0]
        );
    }

    #[test]
    fn test_multi_lap_skip_does_not_consume() {
        // 27 stones from pit 12 for player 2: laps skip store 6 twice.
        let mut board = Board::empty();
        board[12] = 27;
        board[0] = 1;

        let result = make_move(&board, 12, Player::Two).unwrap();

        assert_eq!(result.distribution_path.len(), 27);
        assert!(!result.distribution_path.contains(&PLAYER_1_STORE));
        assert_eq!(result.board[PLAYER_1_STORE], 0);
        assert_eq!(result.board.total_stones(), board.total_stones());
    }

    #[test]
    fn test_extra_turn() {
        let board = create_initial_board();
        let result = make_move(&board, 2, Player::One).unwrap();

        assert!(result.extra_turn);
        assert_eq!(result.captured_stones, 0);
        assert_eq!(result.board[PLAYER_1_STORE], 1);
    }

    #[test]
    fn test_capture() {
        let mut board = create_initial_board();
        board[0] = 1;
        board[1] = 0;
        board[11] = 3;

        let result = make_move(&board, 0, Player::One).unwrap();

        assert_eq!(result.captured_stones, 4);
        assert_eq!(result.board[1], 0);
        assert_eq!(result.board[11], 0);
        assert_eq!(result.board[PLAYER_1_STORE], 4);
    }

    #[test]
    fn test_no_capture_when_opposite_empty() {
        let mut board = create_initial_board();
        board[0] = 1;
        board[1] = 0;
        board[11] = 0;

        let result = make_move(&board, 0, Player::One).unwrap();

        assert_eq!(result.captured_stones, 0);
        assert_eq!(result.board[1], 1);
        assert_eq!(result.board[PLAYER_1_STORE], 0);
    }

    #[test]
    fn test_no_capture_on_opponent_side() {
        // Player 1 lands in empty pit 8 on player 2's side.
        let mut board = create_initial_board();
        board[5] = 3;
        board[8] = 0;

        let result = make_move(&board, 5, Player::One).unwrap();

        assert_eq!(result.captured_stones, 0);
        assert_eq!(result.board[8], 1);
    }

    #[test]
    fn test_capture_for_player_two() {
        let mut board = create_initial_board();
        board[9] = 2;
        board[11] = 0;
        board[1] = 6;

        let result = make_move(&board, 9, Player::Two).unwrap();

        assert_eq!(result.captured_stones, 7);
        assert_eq!(result.board[11], 0);
        assert_eq!(result.board[1], 0);
        assert_eq!(result.board[PLAYER_2_STORE], 7);
    }

    #[test]
    fn test_game_over_sweeps_other_side() {
        let mut board = create_initial_board();
        for pit in player_pits(Player::One) {
            board[pit] = 0;
        }
        board[5] = 1;

        let result = make_move(&board, 5, Player::One).unwrap();

        assert!(result.game_over);
        assert!(result.extra_turn);
        assert!(result.board.is_side_empty(Player::Two));
        assert_eq!(result.board[PLAYER_1_STORE], 1);
        assert_eq!(result.board[PLAYER_2_STORE], 24);
        assert_eq!(result.winner, Some(Player::Two));
        assert_eq!(result.outcome(), Some(GameResult::Winner(Player::Two)));
    }

    #[test]
    fn test_game_over_tie() {
        let mut board = Board::empty();
        board[5] = 1;
        board[PLAYER_1_STORE] = 9;
        board[7] = 2;
        board[PLAYER_2_STORE] = 8;

        let result = make_move(&board, 5, Player::One).unwrap();

        assert!(result.game_over);
        assert_eq!(result.board[PLAYER_1_STORE], 10);
        assert_eq!(result.board[PLAYER_2_STORE], 10);
        assert_eq!(result.winner, None);
        assert_eq!(result.outcome(), Some(GameResult::Tie));
    }

    #[test]
    fn test_invalid_move_is_rejected() {
        let mut board = create_initial_board();
        board[3] = 0;

        assert_eq!(
            make_move(&board, 3, Player::One),
            Err(EngineError::PreconditionViolation {
                pit: 3,
                player: Player::One
            })
        );
        assert!(make_move(&board, 7, Player::One).is_err());
        assert!(make_move(&board, PLAYER_2_STORE, Player::Two).is_err());
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Two);
        assert!(result.is_winner(Player::Two));
        assert!(!result.is_winner(Player::One));
        assert!(!GameResult::Tie.is_winner(Player::One));
    }
}
