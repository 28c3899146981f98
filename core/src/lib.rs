#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod types;

/// Result of a successful [`GameEngine::drop_piece`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// The piece landed without completing a line; `Player` moves next.
    Continue(Player),
    /// The piece landed on `(row, column)` and completed a line for `player`.
    Win {
        player: Player,
        row: Coord,
        column: Coord,
    },
}

impl DropOutcome {
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win { .. })
    }

    /// Player to move after this drop; unchanged by a win.
    pub const fn current_player(self) -> Player {
        match self {
            Self::Continue(player) => player,
            Self::Win { player, .. } => player,
        }
    }
}
