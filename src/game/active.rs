use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;
use tracing::{debug, info, instrument};

use crate::ball::Ball;
use crate::error::{PlayError, WinnerError};
use crate::options::{GameOptions, Shape};
use crate::player::Player;
use crate::result::PotentialWinner;

use super::FinishedGame;

/// A game in play.
///
/// Balls are called one at a time and marked on every board. Players and
/// boards can no longer change.
#[derive(Debug, Clone)]
pub struct ActiveGame {
    /// Game name.
    name: String,
    /// Game options.
    options: GameOptions,
    /// Every ball that can be called, in ascending order.
    pool: Vec<Ball>,
    /// Called balls, for membership checks.
    called: HashSet<Ball>,
    /// Called balls in call order.
    history: Vec<Ball>,
    /// Registered players in join order.
    players: Vec<Player>,
}

impl ActiveGame {
    pub(super) fn new(
        name: String,
        options: GameOptions,
        pool: Vec<Ball>,
        players: Vec<Player>,
    ) -> Self {
        Self {
            name,
            options,
            called: HashSet::with_capacity(pool.len()),
            history: Vec::with_capacity(pool.len()),
            pool,
            players,
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

    /// Returns the most recently called ball.
    #[must_use]
    pub fn last_called(&self) -> Option<Ball> {
        self.history.last().copied()
    }

    /// Returns whether the ball has been called.
    #[must_use]
    pub fn is_called(&self, ball: Ball) -> bool {
        self.called.contains(&ball)
    }

    /// Returns how many balls are left to call.
    #[must_use]
    pub fn remaining_balls(&self) -> usize {
        self.pool.len() - self.history.len()
    }

    /// Returns the registered players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    fn in_pool(&self, ball: Ball) -> bool {
        // The pool is built in ascending order.
        self.pool.binary_search(&ball).is_ok()
    }

    /// Calls a ball and marks it on every board.
    ///
    /// # Errors
    ///
    /// Returns an error if the ball is not in the pool or was already called.
    #[instrument(skip(self, ball), fields(game = %self.name, ball = %ball))]
    pub fn play_ball(&mut self, ball: Ball) -> Result<(), PlayError> {
        if !self.in_pool(ball) {
            return Err(PlayError::BallNotInPool);
        }

        if !self.called.insert(ball) {
            return Err(PlayError::BallAlreadyCalled);
        }
        self.history.push(ball);

        let completed: usize = self
            .players
            .iter_mut()
            .map(|player| player.mark(ball))
            .sum();

        debug!(called = self.history.len(), completed, "ball called");

        Ok(())
    }

    /// Calls a ball chosen uniformly from the balls not yet called.
    ///
    /// Returns the called ball.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::NoBallsRemaining`] once every ball has been called.
    pub fn play_random_ball<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Ball, PlayError> {
        let remaining = self.remaining_balls();
        if remaining == 0 {
            return Err(PlayError::NoBallsRemaining);
        }

        let pick = rng.random_range(0..remaining);
        let ball = self
            .pool
            .iter()
            .filter(|ball| !self.called.contains(*ball))
            .nth(pick)
            .copied()
            .ok_or(PlayError::NoBallsRemaining)?;

        self.play_ball(ball)?;

        Ok(ball)
    }

    /// Returns the players owning at least one winning board.
    #[must_use]
    pub fn potential_winners(&self) -> Vec<PotentialWinner<'_>> {
        self.players
            .iter()
            .filter(|player| player.has_winning_board())
            .map(|player| PotentialWinner {
                player,
                boards: player.winning_boards(),
            })
            .collect()
    }

    /// Declares the winner and finishes the game.
    ///
    /// # Errors
    ///
    /// Returns [`WinnerError::InvalidWinnerCandidate`] if no player has this
    /// name or the player has no winning board.
    #[instrument(skip(self), fields(game = %self.name))]
    pub fn set_winner(&self, name: &str) -> Result<FinishedGame, WinnerError> {
        let winner = self
            .player(name)
            .filter(|player| player.has_winning_board())
            .ok_or(WinnerError::InvalidWinnerCandidate)?;

        info!(called = self.history.len(), "winner declared");

        Ok(FinishedGame::new(
            self.name.clone(),
            self.options,
            self.pool.clone(),
            self.history.clone(),
            self.players.clone(),
            winner.clone(),
        ))
    }
}
