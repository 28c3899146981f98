use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    pub const fn other(self) -> Self {
        match self {
            Self::PlayerOne => Self::PlayerTwo,
            Self::PlayerTwo => Self::PlayerOne,
        }
    }

    /// Marker this player leaves in the cells they occupy.
    pub const fn marker(self) -> CellState {
        match self {
            Self::PlayerOne => CellState::PlayerOne,
            Self::PlayerTwo => CellState::PlayerTwo,
        }
    }

    /// 1-based number used when addressing players by name.
    pub const fn number(self) -> u8 {
        match self {
            Self::PlayerOne => 1,
            Self::PlayerTwo => 2,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::PlayerOne
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Contents of a single board slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl CellState {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::PlayerOne => Some(Player::PlayerOne),
            Self::PlayerTwo => Some(Player::PlayerTwo),
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        player.marker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn other_player_alternates() {
        assert_eq!(Player::PlayerOne.other(), Player::PlayerTwo);
        assert_eq!(Player::PlayerTwo.other(), Player::PlayerOne);
    }

    #[test]
    fn marker_and_owner_agree() {
        for player in [Player::PlayerOne, Player::PlayerTwo] {
            assert_eq!(player.marker().owner(), Some(player));
        }
        assert_eq!(CellState::Empty.owner(), None);
    }

    #[test]
    fn display_uses_one_based_number() {
        assert_eq!(Player::PlayerOne.to_string(), "Player 1");
        assert_eq!(Player::PlayerTwo.to_string(), "Player 2");
    }
}
