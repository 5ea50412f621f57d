//! Player identification.
//!
//! ## Player
//!
//! Mancala is strictly two-player. Players are numbered 1 and 2 to match the
//! board layout: player 1 owns pits 0-5 and store 6, player 2 owns pits 7-12
//! and store 13.
//!
//! Serializes as its number so boards and moves exchanged with the UI layer
//! stay plain integers.

use serde::{Deserialize, Serialize};

use super::board::{PITS_PER_PLAYER, PLAYER_1_STORE, PLAYER_2_STORE};
use crate::error::EngineError;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the player number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The six pit indices owned by this player, in board order.
    ///
    /// ```
    /// use mancala::core::Player;
    ///
    /// assert_eq!(Player::One.pits(), [0, 1, 2, 3, 4, 5]);
    /// assert_eq!(Player::Two.pits(), [7, 8, 9, 10, 11, 12]);
    /// ```
    #[must_use]
    pub const fn pits(self) -> [usize; PITS_PER_PLAYER] {
        match self {
            Player::One => [0, 1, 2, 3, 4, 5],
            Player::Two => [7, 8, 9, 10, 11, 12],
        }
    }

    /// Index of this player's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Player::One => PLAYER_1_STORE,
            Player::Two => PLAYER_2_STORE,
        }
    }

    /// Check whether `index` is one of this player's pits (stores excluded).
    #[must_use]
    pub fn owns_pit(self, index: usize) -> bool {
        let first = self.pits()[0];
        (first..first + PITS_PER_PLAYER).contains(&index)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

impl TryFrom<u8> for Player {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(EngineError::InvalidPlayer(other)),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(format!("{}", Player::One), "Player 1");
    }

    #[test]
    fn test_player_stores() {
        assert_eq!(Player::One.store(), 6);
        assert_eq!(Player::Two.store(), 13);
    }

    #[test]
    fn test_owns_pit_excludes_stores() {
        assert!(Player::One.owns_pit(0));
        assert!(Player::One.owns_pit(5));
        assert!(!Player::One.owns_pit(6));
        assert!(!Player::One.owns_pit(7));

        assert!(Player::Two.owns_pit(7));
        assert!(Player::Two.owns_pit(12));
        assert!(!Player::Two.owns_pit(13));
        assert!(!Player::Two.owns_pit(3));
    }

    #[test]
    fn test_try_from_number() {
        assert_eq!(Player::try_from(1), Ok(Player::One));
        assert_eq!(Player::try_from(2), Ok(Player::Two));
        assert_eq!(Player::try_from(0), Err(EngineError::InvalidPlayer(0)));
        assert_eq!(Player::try_from(3), Err(EngineError::InvalidPlayer(3)));
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::Two).unwrap();
        assert_eq!(json, "2");

        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::Two);

        assert!(serde_json::from_str::<Player>("5").is_err());
    }
}
