//! Engine bindings for Python.
//!
//! Boards cross the boundary as plain `list[int]` of length 14 and players as
//! `1` or `2`, matching what the UI layer already stores.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, Player, BOARD_SIZE};
use crate::error::EngineError;
use crate::rules::{self, MoveResult};

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

pub(crate) fn board_from_py(slots: Vec<u32>) -> PyResult<Board> {
    let slots: [u32; BOARD_SIZE] = slots.try_into().map_err(|v: Vec<u32>| {
        PyValueError::new_err(format!(
            "board must have {BOARD_SIZE} slots, got {}",
            v.len()
        ))
    })?;
    Ok(Board::try_from_slots(slots)?)
}

pub(crate) fn player_from_py(player: u8) -> PyResult<Player> {
    Ok(Player::try_from(player)?)
}

/// Python view of a resolved move.
#[pyclass(name = "MoveResult")]
#[derive(Clone, Debug)]
pub struct PyMoveResult {
    #[pyo3(get)]
    pub board: Vec<u32>,
    #[pyo3(get)]
    pub captured_stones: u32,
    #[pyo3(get)]
    pub extra_turn: bool,
    #[pyo3(get)]
    pub game_over: bool,
    /// Winning player number, `None` for a tie or an unfinished game.
    #[pyo3(get)]
    pub winner: Option<u8>,
    #[pyo3(get)]
    pub distribution_path: Vec<usize>,
}

impl From<MoveResult> for PyMoveResult {
    fn from(result: MoveResult) -> Self {
        Self {
            board: result.board.as_array().to_vec(),
            captured_stones: result.captured_stones,
            extra_turn: result.extra_turn,
            game_over: result.game_over,
            winner: result.winner.map(Player::number),
            distribution_path: result.distribution_path.to_vec(),
        }
    }
}

#[pymethods]
impl PyMoveResult {
    fn __repr__(&self) -> String {
        format!(
            "MoveResult(captured={}, extra_turn={}, game_over={}, winner={:?})",
            self.captured_stones, self.extra_turn, self.game_over, self.winner
        )
    }
}

/// Starting board: four stones per pit, empty stores.
#[pyfunction]
pub fn create_initial_board() -> Vec<u32> {
    rules::create_initial_board().as_array().to_vec()
}

/// Pit indices owned by a player.
#[pyfunction]
pub fn player_pits(player: u8) -> PyResult<Vec<usize>> {
    Ok(rules::player_pits(player_from_py(player)?).to_vec())
}

/// Store index of a player.
#[pyfunction]
pub fn player_store(player: u8) -> PyResult<usize> {
    Ok(rules::player_store(player_from_py(player)?))
}

/// Store index of a player's opponent.
#[pyfunction]
pub fn opponent_store(player: u8) -> PyResult<usize> {
    Ok(rules::opponent_store(player_from_py(player)?))
}

/// Pit facing `pit` across the board.
#[pyfunction]
pub fn opposite_pit(pit: usize) -> PyResult<usize> {
    if pit > 12 {
        return Err(PyValueError::new_err(format!("pit {pit} has no opposite")));
    }
    Ok(rules::opposite_pit(pit))
}

/// Whether `player` may sow from `pit`.
#[pyfunction]
pub fn is_valid_move(board: Vec<u32>, pit: usize, player: u8) -> PyResult<bool> {
    let board = board_from_py(board)?;
    Ok(rules::is_valid_move(&board, pit, player_from_py(player)?))
}

/// Apply a move. Raises `ValueError` if the pit is not playable.
#[pyfunction]
pub fn make_move(board: Vec<u32>, pit: usize, player: u8) -> PyResult<PyMoveResult> {
    let board = board_from_py(board)?;
    let result = rules::make_move(&board, pit, player_from_py(player)?)?;
    Ok(result.into())
}
