//! Game configuration options.

use crate::ball::COLUMN_COUNT;
use crate::error::ConfigError;

/// Board columns a shape's base targets are written for.
const BASE_PER_COLUMN: usize = 5;

/// Board shape: how many balls each board column keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Shape {
    /// Full board with one ball fewer in the middle column (the free space).
    #[default]
    Standard,
    /// Full middle column, one ball in every other column.
    T,
    /// Full first column, one ball in every other column.
    L,
    /// Full outer columns, two balls in the inner columns.
    O,
    /// Two balls per column with a single ball in the middle.
    X,
}

impl Shape {
    /// Returns the per-column targets for a board with 5 balls per column.
    #[must_use]
    pub const fn base_targets(self) -> [usize; COLUMN_COUNT] {
        match self {
            Self::Standard => [5, 5, 4, 5, 5],
            Self::T => [1, 1, 5, 1, 1],
            Self::L => [5, 1, 1, 1, 1],
            Self::O => [5, 2, 2, 2, 5],
            Self::X => [2, 2, 1, 2, 2],
        }
    }

    /// Scales the base targets to `max_per_column` balls per column.
    ///
    /// Each target becomes `base * max_per_column / 5`, rounded with `mode`.
    /// With 5 balls per column the base targets come back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InfeasibleShape`] if any column would be left
    /// with no balls, would need more than `max_per_column`, or cannot be
    /// scaled without overflowing.
    ///
    /// # Example
    ///
    /// ```
    /// use bingors::{RoundingMode, Shape};
    ///
    /// let targets = Shape::O.column_targets(10, RoundingMode::Nearest).unwrap();
    /// assert_eq!(targets, [10, 4, 4, 4, 10]);
    /// assert!(Shape::T.column_targets(2, RoundingMode::Down).is_err());
    /// ```
    pub fn column_targets(
        self,
        max_per_column: usize,
        mode: RoundingMode,
    ) -> Result<[usize; COLUMN_COUNT], ConfigError> {
        let mut targets = self.base_targets();
        if max_per_column == BASE_PER_COLUMN {
            return Ok(targets);
        }

        for target in &mut targets {
            let product = target
                .checked_mul(max_per_column)
                .ok_or(ConfigError::InfeasibleShape)?;
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for ball counts"
            )]
            let scaled = product as f64 / BASE_PER_COLUMN as f64;
            *target = round_count(scaled, mode);
            if *target == 0 || *target > max_per_column {
                return Err(ConfigError::InfeasibleShape);
            }
        }

        Ok(targets)
    }
}

/// Rounding mode for scaled shape targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    #[default]
    Nearest,
}

#[cfg(feature = "std")]
fn round_count(value: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => value.ceil() as usize,
        RoundingMode::Down => value.floor() as usize,
        RoundingMode::Nearest => value.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_count(value: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(value) as usize,
        RoundingMode::Down => libm::floor(value) as usize,
        RoundingMode::Nearest => libm::round(value) as usize,
    }
}

/// Configuration options for a bingo game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bingors::{GameOptions, Shape};
///
/// let options = GameOptions::default()
///     .with_shape(Shape::X)
///     .with_total_balls(90)
///     .with_max_per_column(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Board shape.
    pub shape: Shape,
    /// Number of balls in the pool.
    pub total_balls: u16,
    /// Balls drawn per board column before the shape is applied.
    pub max_per_column: usize,
    /// Rounding mode used when scaling the shape.
    pub rounding: RoundingMode,
    /// How many times board generation retries to find a unique board.
    pub generation_attempts: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shape: Shape::Standard,
            total_balls: 75,
            max_per_column: 5,
            rounding: RoundingMode::Nearest,
            generation_attempts: 10,
        }
    }
}

impl GameOptions {
    /// Sets the board shape.
    ///
    /// # Example
    ///
    /// ```
    /// use bingors::{GameOptions, Shape};
    ///
    /// let options = GameOptions::default().with_shape(Shape::L);
    /// assert_eq!(options.shape, Shape::L);
    /// ```
    #[must_use]
    pub const fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the number of balls in the pool.
    ///
    /// # Example
    ///
    /// ```
    /// use bingors::GameOptions;
    ///
    /// let options = GameOptions::default().with_total_balls(90);
    /// assert_eq!(options.total_balls, 90);
    /// ```
    #[must_use]
    pub const fn with_total_balls(mut self, total_balls: u16) -> Self {
        self.total_balls = total_balls;
        self
    }

    /// Sets the balls drawn per board column.
    ///
    /// # Example
    ///
    /// ```
    /// use bingors::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_per_column(4);
    /// assert_eq!(options.max_per_column, 4);
    /// ```
    #[must_use]
    pub const fn with_max_per_column(mut self, max_per_column: usize) -> Self {
        self.max_per_column = max_per_column;
        self
    }

    /// Sets the rounding mode for scaled shapes.
    ///
    /// # Example
    ///
    /// ```
    /// use bingors::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding(RoundingMode::Up);
    /// assert_eq!(options.rounding, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Sets the number of attempts used to generate a unique board.
    ///
    /// # Example
    ///
    /// ```
    /// use bingors::GameOptions;
    ///
    /// let options = GameOptions::default().with_generation_attempts(25);
    /// assert_eq!(options.generation_attempts, 25);
    /// ```
    #[must_use]
    pub const fn with_generation_attempts(mut self, attempts: usize) -> Self {
        self.generation_attempts = attempts;
        self
    }

    /// Returns the number of balls in each pool column.
    #[must_use]
    pub fn pool_per_column(&self) -> usize {
        usize::from(self.total_balls) / COLUMN_COUNT
    }

    /// Checks the options and returns the per-column board targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the ball count is not a positive multiple of 5,
    /// if `max_per_column` is below 2 or not strictly below the balls per pool
    /// column, if no generation attempts are allowed, or if the shape cannot
    /// be scaled to `max_per_column`.
    pub fn validate(&self) -> Result<[usize; COLUMN_COUNT], ConfigError> {
        if self.total_balls == 0 || usize::from(self.total_balls) % COLUMN_COUNT != 0 {
            return Err(ConfigError::InvalidBallCount);
        }

        // Strictly fewer than the pool column leaves room for unique boards.
        if self.max_per_column <= 1 || self.max_per_column >= self.pool_per_column() {
            return Err(ConfigError::InvalidMaxPerColumn);
        }

        if self.generation_attempts == 0 {
            return Err(ConfigError::InvalidGenerationAttempts);
        }

        self.shape.column_targets(self.max_per_column, self.rounding)
    }
}
