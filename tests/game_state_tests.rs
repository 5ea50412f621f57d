//! Game-state bookkeeping tests: turn passing, skins, status and reset.

use mancala::{
    AiConfig, Board, ComputerPlayer, Difficulty, EngineError, GameState, LastMove, Player, Skin,
    PLAYER_1_STORE,
};

#[test]
fn test_extra_turn_keeps_current_player() {
    let state = GameState::new();

    let (next, result) = state.apply_move(2).unwrap();

    assert!(result.extra_turn);
    assert_eq!(next.current_player, Player::One);
    assert_eq!(next.score(Player::One), 1);
    assert_eq!(
        next.last_move,
        Some(LastMove {
            pit: 2,
            player: Player::One
        })
    );
}

#[test]
fn test_turn_passes_without_extra_turn() {
    let state = GameState::new();

    let (next, result) = state.apply_move(0).unwrap();

    assert!(!result.extra_turn);
    assert_eq!(next.current_player, Player::Two);
    assert_eq!(next.status(), "Cat's turn");
}

#[test]
fn test_apply_move_does_not_touch_original() {
    let state = GameState::new();
    let before = state.clone();

    let _ = state.apply_move(3).unwrap();

    assert_eq!(state, before);
}

#[test]
fn test_opponent_pit_rejected() {
    let state = GameState::new();

    assert_eq!(
        state.apply_move(9),
        Err(EngineError::PreconditionViolation {
            pit: 9,
            player: Player::One
        })
    );
}

#[test]
fn test_finished_game_rejects_moves() {
    let mut board = Board::empty();
    board[5] = 1;
    board[9] = 2;
    let state = GameState {
        board,
        ..GameState::new()
    };

    let (finished, result) = state.apply_move(5).unwrap();
    assert!(result.game_over);
    assert!(finished.game_over);
    assert_eq!(finished.winner, Some(Player::Two));
    assert_eq!(finished.status(), "Cat wins!");

    assert_eq!(finished.apply_move(0), Err(EngineError::GameOver));
}

#[test]
fn test_tie_status() {
    let mut board = Board::empty();
    board[5] = 1;
    board[PLAYER_1_STORE] = 23;
    board[12] = 24;
    let state = GameState {
        board,
        ..GameState::new()
    };

    // The last stone reaches store 6 and player 1's side is empty: 24 all.
    let (finished, _) = state.apply_move(5).unwrap();

    assert!(finished.game_over);
    assert_eq!(finished.winner, None);
    assert_eq!(finished.status(), "It's a tie!");
}

#[test]
fn test_swap_skins_and_reset() {
    let state = GameState::new().swap_skins();
    assert_eq!(state.skin(Player::One), Skin::Cat);
    assert_eq!(state.skin(Player::Two), Skin::Dog);
    assert_eq!(state.status(), "Cat's turn");

    let (played, _) = state.apply_move(0).unwrap();
    let fresh = played.reset();

    assert_eq!(fresh.board, Board::initial());
    assert_eq!(fresh.current_player, Player::One);
    assert_eq!(fresh.last_move, None);
    assert_eq!(fresh.player_one_skin, Skin::Cat);
    assert_eq!(fresh.player_two_skin, Skin::Dog);
}

#[test]
fn test_state_serializes_for_a_session_layer() {
    let (state, _) = GameState::new().apply_move(2).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"player_one_skin\":\"dog\""));

    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn test_human_against_computer_session() {
    let mut cpu = ComputerPlayer::new(AiConfig::default().with_seed(99));
    let mut state = GameState::new();
    let mut moves = 0;

    while !state.game_over && moves < 500 {
        let pit = match state.current_player {
            // Seat one always plays its leftmost non-empty pit.
            Player::One => Player::One
                .pits()
                .into_iter()
                .find(|&pit| state.board[pit] > 0)
                .unwrap(),
            Player::Two => cpu
                .select_move(&state.board, Player::Two, Difficulty::Medium)
                .unwrap(),
        };
        state = state.apply_move(pit).unwrap().0;
        moves += 1;
    }

    assert!(state.game_over);
    assert_eq!(state.score(Player::One) + state.score(Player::Two), 48);
    match state.winner {
        Some(winner) => assert!(state.score(winner) > state.score(winner.opponent())),
        None => assert_eq!(state.score(Player::One), 24),
    }
}
