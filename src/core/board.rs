//! Board representation.
//!
//! ## Layout
//!
//! ```text
//! Indices:  12  11  10   9   8   7
//!        13                         6   <- stores
//!            0   1   2   3   4   5
//! ```
//!
//! Player 1 owns pits 0-5 and store 6; player 2 owns pits 7-12 and store 13.
//! Sowing runs in increasing index order, wrapping from 13 back to 0.
//!
//! `Board` is a small `Copy` value. Every engine operation takes a board by
//! reference and returns a new one, so search branches never share state.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::player::Player;
use crate::error::{EngineError, Result};

/// Number of slots on the board (12 pits + 2 stores).
pub const BOARD_SIZE: usize = 14;

/// Pits on each side of the board.
pub const PITS_PER_PLAYER: usize = 6;

/// Stones placed in every pit at the start of a game.
pub const INITIAL_STONES: u32 = 4;

/// Player 1's store index.
pub const PLAYER_1_STORE: usize = 6;

/// Player 2's store index.
pub const PLAYER_2_STORE: usize = 13;

/// A Mancala board: stone counts for all 14 slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    slots: [u32; BOARD_SIZE],
}

impl Board {
    /// Create a board at the starting position.
    #[must_use]
    pub fn initial() -> Self {
        let mut slots = [INITIAL_STONES; BOARD_SIZE];
        slots[PLAYER_1_STORE] = 0;
        slots[PLAYER_2_STORE] = 0;
        Self { slots }
    }

    /// Create a board with no stones anywhere.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            slots: [0; BOARD_SIZE],
        }
    }

    /// Create a board from raw slot counts.
    ///
    /// The engine adds stones with plain `u32` arithmetic, so the total must
    /// fit in a `u32`. Use [`Board::try_from_slots`] for untrusted input.
    #[must_use]
    pub const fn from_slots(slots: [u32; BOARD_SIZE]) -> Self {
        Self { slots }
    }

    /// Create a board from raw slot counts, rejecting totals above `u32::MAX`.
    ///
    /// # Errors
    ///
    /// [`EngineError::TooManyStones`] if the stones could overflow a slot.
    pub fn try_from_slots(slots: [u32; BOARD_SIZE]) -> Result<Self> {
        let total: u64 = slots.iter().map(|&stones| u64::from(stones)).sum();
        if total > u64::from(u32::MAX) {
            return Err(EngineError::TooManyStones(total));
        }
        Ok(Self { slots })
    }

    /// Raw slot counts, in index order.
    #[must_use]
    pub const fn as_array(&self) -> &[u32; BOARD_SIZE] {
        &self.slots
    }

    /// Total stones on the board, stores included.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.slots.iter().sum()
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.slots[player.store()]
    }

    /// Stones remaining in a player's six pits.
    #[must_use]
    pub fn side_stones(&self, player: Player) -> u32 {
        player.pits().iter().map(|&pit| self.slots[pit]).sum()
    }

    /// Check whether all six of a player's pits are empty.
    #[must_use]
    pub fn is_side_empty(&self, player: Player) -> bool {
        player.pits().iter().all(|&pit| self.slots[pit] == 0)
    }

    /// Move every stone on a player's side into that player's store.
    ///
    /// Returns the number of stones swept.
    pub(crate) fn sweep_side(&mut self, player: Player) -> u32 {
        let remaining = self.side_stones(player);
        for pit in player.pits() {
            self.slots[pit] = 0;
        }
        self.slots[player.store()] += remaining;
        remaining
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots[index]
    }
}

impl From<[u32; BOARD_SIZE]> for Board {
    fn from(slots: [u32; BOARD_SIZE]) -> Self {
        Self::from_slots(slots)
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as two rows with the stores at either end.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "    ")?;
        for pit in Player::Two.pits().iter().rev() {
            write!(f, "{:>3}", self.slots[*pit])?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>3}{:>22}",
            self.slots[PLAYER_2_STORE], self.slots[PLAYER_1_STORE]
        )?;
        write!(f, "    ")?;
        for pit in Player::One.pits() {
            write!(f, "{:>3}", self.slots[pit])?;
        }
        Ok(())
    }
}
