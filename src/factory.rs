//! Random board generation.

use alloc::vec::Vec;

use rand::Rng;
use tracing::{trace, warn};

use crate::ball::{Ball, COLUMN_COUNT, split_columns};
use crate::board::Board;
use crate::error::BoardError;

/// Builds random boards from a ball pool.
///
/// Every board first draws `max_per_column` distinct balls from each pool
/// column, then randomly discards balls from any column whose target is
/// lower, so the board ends up with exactly `targets[c]` balls in column `c`.
#[derive(Debug, Clone)]
pub struct BoardFactory<'a> {
    pool: &'a [Ball],
    max_per_column: usize,
    targets: [usize; COLUMN_COUNT],
}

impl<'a> BoardFactory<'a> {
    /// Creates a factory drawing from `pool`.
    ///
    /// Targets above `max_per_column` are capped to it.
    #[must_use]
    pub fn new(pool: &'a [Ball], max_per_column: usize, targets: [usize; COLUMN_COUNT]) -> Self {
        Self {
            pool,
            max_per_column,
            targets: targets.map(|target| target.min(max_per_column)),
        }
    }

    /// Returns the per-column targets of generated boards.
    #[must_use]
    pub const fn targets(&self) -> [usize; COLUMN_COUNT] {
        self.targets
    }

    /// Returns how many balls each generated board holds.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.targets.iter().sum()
    }

    /// Generates one random board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InsufficientBalls`] if any pool column holds
    /// fewer than `max_per_column` balls.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let buckets = split_columns(self.pool);
        if buckets
            .iter()
            .any(|bucket| bucket.len() < self.max_per_column)
        {
            return Err(BoardError::InsufficientBalls);
        }

        let mut balls = Vec::with_capacity(self.board_size());
        for (bucket, &target) in buckets.into_iter().zip(&self.targets) {
            let mut picked = draw(bucket, self.max_per_column, rng);
            while picked.len() > target {
                let index = rng.random_range(0..picked.len());
                picked.swap_remove(index);
            }
            balls.extend(picked);
        }

        Ok(Board::new(balls))
    }

    /// Generates a board for which `is_taken` returns `false`.
    ///
    /// Generation is repeated up to `attempts` times.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InsufficientBalls`] if a board cannot be built at
    /// all, or [`BoardError::GenerationExhausted`] if every attempt produced a
    /// taken board.
    pub fn generate_unique<R, F>(
        &self,
        rng: &mut R,
        attempts: usize,
        is_taken: F,
    ) -> Result<Board, BoardError>
    where
        R: Rng + ?Sized,
        F: Fn(&Board) -> bool,
    {
        for attempt in 1..=attempts {
            let board = self.generate(rng)?;
            if !is_taken(&board) {
                return Ok(board);
            }
            trace!(attempt, "generated board already in use, retrying");
        }

        warn!(attempts, "no unique board found");
        Err(BoardError::GenerationExhausted)
    }
}

/// Draws `count` distinct balls from `bucket` without replacement.
fn draw<R: Rng + ?Sized>(mut bucket: Vec<Ball>, count: usize, rng: &mut R) -> Vec<Ball> {
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count && !bucket.is_empty() {
        let index = rng.random_range(0..bucket.len());
        picked.push(bucket.swap_remove(index));
    }
    picked
}
