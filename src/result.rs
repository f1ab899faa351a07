//! Winner query results.

extern crate alloc;

use alloc::vec::Vec;

use crate::board::Board;
use crate::player::Player;

/// A player who could be declared winner.
#[derive(Debug, Clone)]
pub struct PotentialWinner<'a> {
    /// The player.
    pub player: &'a Player,
    /// The player's boards in the winner state.
    pub boards: Vec<&'a Board>,
}

impl PotentialWinner<'_> {
    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.player.name()
    }
}
