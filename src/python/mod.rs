//! Python bindings for the Mancala engine.
//!
//! Exposes the same functional contract as the Rust API for a front end or
//! session server written in Python.
//!
//! # Quick Start
//!
//! ```python
//! import mancala
//!
//! board = mancala.create_initial_board()
//! result = mancala.make_move(board, 2, 1)
//! assert result.extra_turn
//!
//! cpu = mancala.ComputerPlayer(seed=7)
//! pit = cpu.select_move(result.board, 1, "hard")
//! ```

use pyo3::prelude::*;

mod py_ai;
mod py_core;

pub use py_ai::*;
pub use py_core::*;

/// mancala: Mancala rules engine and computer opponent.
#[pymodule]
fn mancala(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMoveResult>()?;
    m.add_class::<PyComputerPlayer>()?;

    m.add_function(wrap_pyfunction!(create_initial_board, m)?)?;
    m.add_function(wrap_pyfunction!(player_pits, m)?)?;
    m.add_function(wrap_pyfunction!(player_store, m)?)?;
    m.add_function(wrap_pyfunction!(opponent_store, m)?)?;
    m.add_function(wrap_pyfunction!(opposite_pit, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_move, m)?)?;
    m.add_function(wrap_pyfunction!(make_move, m)?)?;
    m.add_function(wrap_pyfunction!(select_computer_move, m)?)?;

    Ok(())
}
