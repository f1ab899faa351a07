//! Player boards and win detection.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::ball::{Ball, COLUMN_COUNT, Column};

/// Board status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    /// Some configured balls have not been called yet.
    Playing,
    /// Every configured ball has been called.
    Winner,
}

/// A player's board.
///
/// A board holds a fixed set of configured balls and the subset of them that
/// has been called. Two boards are equal when their configured balls are
/// equal, regardless of play progress.
#[derive(Debug, Clone)]
pub struct Board {
    /// Balls the board plays with.
    configured: HashSet<Ball>,
    /// Configured balls that have been called.
    played: HashSet<Ball>,
    /// Current status of the board.
    state: BoardState,
}

impl Board {
    /// Creates a new board from its configured balls.
    ///
    /// Duplicate balls are collapsed. The board starts with nothing played.
    #[must_use]
    pub fn new(balls: impl IntoIterator<Item = Ball>) -> Self {
        let configured: HashSet<Ball> = balls.into_iter().collect();
        // An empty board has nothing left to call.
        let state = if configured.is_empty() {
            BoardState::Winner
        } else {
            BoardState::Playing
        };

        Self {
            configured,
            played: HashSet::new(),
            state,
        }
    }

    /// Records a called ball.
    ///
    /// Balls that are not configured on the board are ignored. Returns `true`
    /// if this call turned the board into a winner.
    pub fn mark(&mut self, ball: Ball) -> bool {
        if !self.configured.contains(&ball) {
            return false;
        }

        self.played.insert(ball);

        if self.state == BoardState::Playing && self.played == self.configured {
            self.state = BoardState::Winner;
            return true;
        }

        false
    }

    /// Returns the current status of the board.
    #[must_use]
    pub const fn state(&self) -> BoardState {
        self.state
    }

    /// Returns whether every configured ball has been called.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.state == BoardState::Winner
    }

    /// Returns the configured balls in ascending order.
    #[must_use]
    pub fn balls(&self) -> Vec<Ball> {
        sorted(&self.configured)
    }

    /// Returns the called balls in ascending order.
    #[must_use]
    pub fn played_balls(&self) -> Vec<Ball> {
        sorted(&self.played)
    }

    /// Returns the configured balls of one column in ascending order.
    #[must_use]
    pub fn column(&self, column: Column) -> Vec<Ball> {
        let mut balls: Vec<Ball> = self
            .configured
            .iter()
            .filter(|ball| ball.column == column)
            .copied()
            .collect();
        balls.sort_unstable();
        balls
    }

    /// Returns how many configured balls each column holds.
    #[must_use]
    pub fn column_counts(&self) -> [usize; COLUMN_COUNT] {
        let mut counts = [0; COLUMN_COUNT];
        for ball in &self.configured {
            counts[ball.column.index()] += 1;
        }
        counts
    }

    /// Returns whether the ball is configured on the board.
    #[must_use]
    pub fn contains(&self, ball: Ball) -> bool {
        self.configured.contains(&ball)
    }

    /// Returns whether the ball has been called on this board.
    #[must_use]
    pub fn is_played(&self, ball: Ball) -> bool {
        self.played.contains(&ball)
    }

    /// Returns the number of configured balls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configured.len()
    }

    /// Returns whether the board has no configured balls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configured.is_empty()
    }

    /// Returns the number of configured balls that have been called.
    #[must_use]
    pub fn played_count(&self) -> usize {
        self.played.len()
    }

    /// Returns the number of configured balls still waiting to be called.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.configured.len() - self.played.len()
    }

    /// Returns whether both boards play with exactly the same balls.
    #[must_use]
    pub fn same_balls(&self, other: &Self) -> bool {
        self.configured == other.configured
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.same_balls(other)
    }
}

impl Eq for Board {}

fn sorted(balls: &HashSet<Ball>) -> Vec<Ball> {
    let mut balls: Vec<Ball> = balls.iter().copied().collect();
    balls.sort_unstable();
    balls
}
