//! Computer opponent bindings for Python.

use pyo3::prelude::*;

use crate::ai::{self, ComputerPlayer, Difficulty};
use crate::core::{AiConfig, GameRng};

use super::py_core::{board_from_py, player_from_py};

/// Pick a move for `player`.
///
/// `difficulty` is one of "easy", "medium" or "hard". Without a seed the
/// choice draws fresh OS entropy.
#[pyfunction]
#[pyo3(signature = (board, player, difficulty, seed = None))]
pub fn select_computer_move(
    board: Vec<u32>,
    player: u8,
    difficulty: &str,
    seed: Option<u64>,
) -> PyResult<usize> {
    let board = board_from_py(board)?;
    let player = player_from_py(player)?;
    let difficulty: Difficulty = difficulty.parse()?;
    let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);

    Ok(ai::select_computer_move(&board, player, difficulty, &mut rng)?)
}

/// Python wrapper for ComputerPlayer.
///
/// Keeps its own seeded random stream across calls.
#[pyclass(name = "ComputerPlayer")]
pub struct PyComputerPlayer(ComputerPlayer);

#[pymethods]
impl PyComputerPlayer {
    /// Create a computer player.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible play (default: 42)
    /// - search_depth: Minimax plies for hard difficulty (default: 4)
    #[new]
    #[pyo3(signature = (seed = 42, search_depth = 4))]
    fn new(seed: u64, search_depth: u32) -> Self {
        let config = AiConfig::default()
            .with_seed(seed)
            .with_search_depth(search_depth);
        Self(ComputerPlayer::new(config))
    }

    /// Choose a pit for `player` on `board`.
    fn select_move(&mut self, board: Vec<u32>, player: u8, difficulty: &str) -> PyResult<usize> {
        let board = board_from_py(board)?;
        let player = player_from_py(player)?;
        let difficulty: Difficulty = difficulty.parse()?;
        Ok(self.0.select_move(&board, player, difficulty)?)
    }

    #[getter]
    fn search_depth(&self) -> u32 {
        self.0.config().search_depth
    }

    fn __repr__(&self) -> String {
        let config = self.0.config();
        format!(
            "ComputerPlayer(seed={}, search_depth={})",
            config.seed, config.search_depth
        )
    }
}
