use alloc::string::String;
use alloc::vec::Vec;

use crate::ball::Ball;
use crate::options::{GameOptions, Shape};
use crate::player::Player;

/// A game with a declared winner.
///
/// Nothing can change any more; the winner is always present.
#[derive(Debug, Clone)]
pub struct FinishedGame {
    name: String,
    options: GameOptions,
    pool: Vec<Ball>,
    history: Vec<Ball>,
    players: Vec<Player>,
    winner: Player,
}

impl FinishedGame {
    pub(super) const fn new(
        name: String,
        options: GameOptions,
        pool: Vec<Ball>,
        history: Vec<Ball>,
        players: Vec<Player>,
        winner: Player,
    ) -> Self {
        Self {
            name,
            options,
            pool,
            history,
            players,
            winner,
        }
    }

    /// Returns the game name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the board shape.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.options.shape
    }

    /// Returns every ball in the pool.
    #[must_use]
    pub fn ball_pool(&self) -> &[Ball] {
        &self.pool
    }

    /// Returns the called balls in call order.
    #[must_use]
    pub fn called(&self) -> &[Ball] {
        &self.history
    }

    /// Returns the registered players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the declared winner.
    #[must_use]
    pub const fn winner(&self) -> &Player {
        &self.winner
    }
}
