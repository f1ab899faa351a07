//! Game engine and state management.
//!
//! Each lifecycle stage is its own type, exposing only the operations that
//! are legal in that stage. [`Game`] wraps the three stages for callers that
//! keep one value across transitions; its operations fail with the
//! `InvalidState` variant of the relevant error when called in the wrong
//! stage.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::ball::Ball;
use crate::board::Board;
use crate::error::{BoardError, ConfigError, PlayError, PlayerError, StartError, WinnerError};
use crate::options::{GameOptions, Shape};
use crate::player::Player;
use crate::result::PotentialWinner;

mod active;
mod draft;
mod finished;
pub mod state;

pub use active::ActiveGame;
pub use draft::DraftGame;
pub use finished::FinishedGame;
pub use state::GameStatus;

/// Creates a draft game from the basic settings.
///
/// Other options keep their defaults.
///
/// # Errors
///
/// Returns an error if the name is empty or the settings are invalid.
///
/// # Example
///
/// ```
/// use bingors::{Shape, create_game};
///
/// let game = create_game("club night", Shape::O, 90, 5).unwrap();
/// assert_eq!(game.column_targets(), [5, 2, 2, 2, 5]);
/// ```
pub fn create_game(
    name: impl Into<String>,
    shape: Shape,
    total_balls: u16,
    max_per_column: usize,
) -> Result<DraftGame, ConfigError> {
    let options = GameOptions::default()
        .with_shape(shape)
        .with_total_balls(total_balls)
        .with_max_per_column(max_per_column);
    DraftGame::new(name, options)
}

/// A game in any lifecycle stage.
#[derive(Debug, Clone)]
pub enum Game {
    /// Registering players and dealing boards.
    Draft(DraftGame),
    /// Calling balls.
    Active(ActiveGame),
    /// A winner has been declared.
    Finished(FinishedGame),
}

impl Game {
    /// Creates a new game in the draft stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the options are invalid.
    pub fn new(name: impl Into<String>, options: GameOptions) -> Result<Self, ConfigError> {
        DraftGame::new(name, options).map(Self::Draft)
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        match self {
            Self::Draft(_) => GameStatus::Draft,
            Self::Active(_) => GameStatus::Active,
            Self::Finished(_) => GameStatus::Finished,
        }
    }

    /// Returns the game name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Draft(game) => game.name(),
            Self::Active(game) => game.name(),
            Self::Finished(game) => game.name(),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        match self {
            Self::Draft(game) => game.options(),
            Self::Active(game) => game.options(),
            Self::Finished(game) => game.options(),
        }
    }

    /// Returns the board shape.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.options().shape
    }

    /// Returns every ball in the pool.
    #[must_use]
    pub fn ball_pool(&self) -> &[Ball] {
        match self {
            Self::Draft(game) => game.ball_pool(),
            Self::Active(game) => game.ball_pool(),
            Self::Finished(game) => game.ball_pool(),
        }
    }

    /// Returns the called balls in call order.
    ///
    /// Always empty before the game starts.
    #[must_use]
    pub fn called(&self) -> &[Ball] {
        match self {
            Self::Draft(_) => &[],
            Self::Active(game) => game.called(),
            Self::Finished(game) => game.called(),
        }
    }

    /// Returns the registered players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        match self {
            Self::Draft(game) => game.players(),
            Self::Active(game) => game.players(),
            Self::Finished(game) => game.players(),
        }
    }

    /// Returns the player with the given name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players().iter().find(|player| player.name() == name)
    }

    /// Returns the declared winner.
    ///
    /// Returns `None` until the game is finished.
    #[must_use]
    pub const fn winner(&self) -> Option<&Player> {
        match self {
            Self::Finished(game) => Some(game.winner()),
            Self::Draft(_) | Self::Active(_) => None,
        }
    }

    /// Returns the draft stage, if the game is in it.
    #[must_use]
    pub const fn as_draft(&self) -> Option<&DraftGame> {
        match self {
            Self::Draft(game) => Some(game),
            _ => None,
        }
    }

    /// Returns the active stage, if the game is in it.
    #[must_use]
    pub const fn as_active(&self) -> Option<&ActiveGame> {
        match self {
            Self::Active(game) => Some(game),
            _ => None,
        }
    }

    /// Returns the finished stage, if the game is in it.
    #[must_use]
    pub const fn as_finished(&self) -> Option<&FinishedGame> {
        match self {
            Self::Finished(game) => Some(game),
            _ => None,
        }
    }

    const fn draft_mut(&mut self) -> Option<&mut DraftGame> {
        match self {
            Self::Draft(game) => Some(game),
            _ => None,
        }
    }

    const fn active_mut(&mut self) -> Option<&mut ActiveGame> {
        match self {
            Self::Active(game) => Some(game),
            _ => None,
        }
    }

    /// Registers a new player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidState`] outside the draft stage, or any
    /// error of [`DraftGame::add_player`].
    pub fn add_player(&mut self, name: impl AsRef<str>) -> Result<(), PlayerError> {
        self.draft_mut()
            .ok_or(PlayerError::InvalidState)?
            .add_player(name)
    }

    /// Renames a player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidState`] outside the draft stage, or any
    /// error of [`DraftGame::update_player`].
    pub fn update_player(
        &mut self,
        existing: &str,
        new_name: impl AsRef<str>,
    ) -> Result<(), PlayerError> {
        self.draft_mut()
            .ok_or(PlayerError::InvalidState)?
            .update_player(existing, new_name)
    }

    /// Removes a player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidState`] outside the draft stage, or any
    /// error of [`DraftGame::remove_player`].
    pub fn remove_player(&mut self, name: &str) -> Result<Player, PlayerError> {
        self.draft_mut()
            .ok_or(PlayerError::InvalidState)?
            .remove_player(name)
    }

    /// Deals a new random board to a player.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] outside the draft stage, or any
    /// error of [`DraftGame::add_board`].
    pub fn add_board<R: Rng + ?Sized>(
        &mut self,
        player: &str,
        rng: &mut R,
    ) -> Result<Board, BoardError> {
        self.draft_mut()
            .ok_or(BoardError::InvalidState)?
            .add_board(player, rng)
    }

    /// Takes a board away from a player.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] outside the draft stage, or any
    /// error of [`DraftGame::remove_board`].
    pub fn remove_board(&mut self, player: &str, board: &Board) -> Result<(), BoardError> {
        self.draft_mut()
            .ok_or(BoardError::InvalidState)?
            .remove_board(player, board)
    }

    /// Moves the game from draft to active.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InvalidState`] outside the draft stage, or any
    /// error of [`DraftGame::start`]. The game is unchanged on error.
    pub fn start(&mut self) -> Result<(), StartError> {
        let active = self
            .as_draft()
            .ok_or(StartError::InvalidState)?
            .start()?;
        *self = Self::Active(active);
        Ok(())
    }

    /// Calls a ball.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidState`] outside the active stage, or any
    /// error of [`ActiveGame::play_ball`].
    pub fn play_ball(&mut self, ball: Ball) -> Result<(), PlayError> {
        self.active_mut()
            .ok_or(PlayError::InvalidState)?
            .play_ball(ball)
    }

    /// Calls a random ball that has not been called yet.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidState`] outside the active stage, or any
    /// error of [`ActiveGame::play_random_ball`].
    pub fn play_random_ball<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Ball, PlayError> {
        self.active_mut()
            .ok_or(PlayError::InvalidState)?
            .play_random_ball(rng)
    }

    /// Returns the players owning at least one winning board.
    ///
    /// # Errors
    ///
    /// Returns [`WinnerError::InvalidState`] outside the active stage.
    pub fn potential_winners(&self) -> Result<Vec<PotentialWinner<'_>>, WinnerError> {
        self.as_active()
            .map(ActiveGame::potential_winners)
            .ok_or(WinnerError::InvalidState)
    }

    /// Declares the winner and moves the game from active to finished.
    ///
    /// # Errors
    ///
    /// Returns [`WinnerError::InvalidState`] outside the active stage, or any
    /// error of [`ActiveGame::set_winner`]. The game is unchanged on error.
    pub fn set_winner(&mut self, name: &str) -> Result<(), WinnerError> {
        let finished = self
            .as_active()
            .ok_or(WinnerError::InvalidState)?
            .set_winner(name)?;
        *self = Self::Finished(finished);
        Ok(())
    }
}

impl From<DraftGame> for Game {
    fn from(game: DraftGame) -> Self {
        Self::Draft(game)
    }
}

impl From<ActiveGame> for Game {
    fn from(game: ActiveGame) -> Self {
        Self::Active(game)
    }
}

impl From<FinishedGame> for Game {
    fn from(game: FinishedGame) -> Self {
        Self::Finished(game)
    }
}
