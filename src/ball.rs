//! Ball types and pool construction.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::ConfigError;

/// Number of columns a pool and every board are split into.
pub const COLUMN_COUNT: usize = 5;

/// Board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    /// First column.
    B,
    /// Second column.
    I,
    /// Middle column.
    N,
    /// Fourth column.
    G,
    /// Last column.
    O,
}

impl Column {
    /// All columns in canonical order.
    pub const ALL: [Self; COLUMN_COUNT] = [Self::B, Self::I, Self::N, Self::G, Self::O];

    /// Returns the position of the column in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::B => 0,
            Self::I => 1,
            Self::N => 2,
            Self::G => 3,
            Self::O => 4,
        }
    }

    /// Returns the column letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::B => 'B',
            Self::I => 'I',
            Self::N => 'N',
            Self::G => 'G',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A numbered ball.
///
/// Two balls are the same ball when both column and number match. Balls are
/// ordered by column first, then number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ball {
    /// The column the ball belongs to.
    pub column: Column,
    /// The ball number.
    pub number: u16,
}

impl Ball {
    /// Creates a new ball.
    ///
    /// Note: This function does not validate the number. Balls built by
    /// [`create_pool`] are numbered from 1, so a ball numbered 0 is simply
    /// never part of a game's pool.
    #[must_use]
    pub const fn new(column: Column, number: u16) -> Self {
        Self { column, number }
    }

    /// Returns the display name, e.g. `"B7"`.
    ///
    /// The name is stable and can identify the ball in messages.
    #[must_use]
    pub fn name(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.number)
    }
}

/// Builds a ball pool of `total_balls` balls.
///
/// Balls are numbered `1..=total_balls` and assigned to columns in contiguous
/// blocks of `total_balls / 5`, so the first block is column B and the last
/// is column O. The pool is returned in ascending order.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBallCount`] if `total_balls` is zero or not a
/// multiple of 5.
///
/// # Example
///
/// ```
/// use bingors::{Ball, Column, create_pool};
///
/// let pool = create_pool(10).unwrap();
/// assert_eq!(pool.len(), 10);
/// assert_eq!(pool[2], Ball::new(Column::I, 3));
/// ```
pub fn create_pool(total_balls: u16) -> Result<Vec<Ball>, ConfigError> {
    if total_balls == 0 || usize::from(total_balls) % COLUMN_COUNT != 0 {
        return Err(ConfigError::InvalidBallCount);
    }

    let per_column = usize::from(total_balls) / COLUMN_COUNT;
    let pool = (1..=total_balls)
        .map(|number| {
            let column = Column::ALL[(usize::from(number) - 1) / per_column];
            Ball::new(column, number)
        })
        .collect();

    Ok(pool)
}

/// Splits balls into one bucket per column, keeping their relative order.
pub(crate) fn split_columns(balls: &[Ball]) -> [Vec<Ball>; COLUMN_COUNT] {
    let mut buckets: [Vec<Ball>; COLUMN_COUNT] = Default::default();
    for ball in balls {
        buckets[ball.column.index()].push(*ball);
    }
    buckets
}
