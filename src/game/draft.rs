use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::ball::{Ball, COLUMN_COUNT, create_pool};
use crate::board::Board;
use crate::error::{BoardError, ConfigError, PlayerError, StartError};
use crate::factory::BoardFactory;
use crate::options::{GameOptions, Shape};
use crate::player::Player;

use super::ActiveGame;

/// Fewest players a game can start with.
const MIN_PLAYERS: usize = 2;

/// A game that is still being set up.
///
/// Players join, change names, leave, and receive boards. Nothing is called
/// until the game is started with [`DraftGame::start`].
#[derive(Debug, Clone)]
pub struct DraftGame {
    /// Game name.
    name: String,
    /// Game options.
    options: GameOptions,
    /// Per-column board targets derived from the options.
    targets: [usize; COLUMN_COUNT],
    /// Every ball that can be called, in ascending order.
    pool: Vec<Ball>,
    /// Registered players in join order.
    players: Vec<Player>,
}

impl DraftGame {
    /// Creates a new game.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use bingors::{ConfigError, DraftGame, GameOptions};
    ///
    /// let game = DraftGame::new("weekly", GameOptions::default()).unwrap();
    /// assert_eq!(game.ball_pool().len(), 75);
    ///
    /// let options = GameOptions::default().with_total_balls(72);
    /// assert_eq!(
    ///     DraftGame::new("weekly", options).unwrap_err(),
    ///     ConfigError::InvalidBallCount
    /// );
    /// ```
    #[instrument(skip_all, fields(shape = ?options.shape, total_balls = options.total_balls))]
    pub fn new(name: impl Into<String>, options: GameOptions) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidName);
        }

        let targets = options.validate()?;
        let pool = create_pool(options.total_balls)?;

        info!(game = %name, ?targets, "game created");

        Ok(Self {
            name,
            options,
            targets,
            pool,
            players: Vec::new(),
        })
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

    /// Returns how many balls each board keeps per column.
    #[must_use]
    pub const fn column_targets(&self) -> [usize; COLUMN_COUNT] {
        self.targets
    }

    /// Returns every ball in the pool.
    #[must_use]
    pub fn ball_pool(&self) -> &[Ball] {
        &self.pool
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

    fn player_index(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|player| player.name() == name)
    }

    /// Registers a new player.
    ///
    /// Surrounding whitespace is stripped from the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or already taken.
    #[instrument(skip_all, fields(game = %self.name))]
    pub fn add_player(&mut self, name: impl AsRef<str>) -> Result<(), PlayerError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(PlayerError::InvalidName);
        }

        if self.player_index(name).is_some() {
            return Err(PlayerError::DuplicatePlayer);
        }

        debug!(player = %name, "player added");
        self.players.push(Player::new(name));

        Ok(())
    }

    /// Renames a player, keeping their boards.
    ///
    /// Renaming a player to their current name is a no-op. Surrounding
    /// whitespace is stripped from the new name.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, or the new name is empty
    /// or used by another player.
    #[instrument(skip_all, fields(game = %self.name, player = existing))]
    pub fn update_player(
        &mut self,
        existing: &str,
        new_name: impl AsRef<str>,
    ) -> Result<(), PlayerError> {
        let new_name = new_name.as_ref().trim();
        if new_name.is_empty() {
            return Err(PlayerError::InvalidName);
        }

        let index = self
            .player_index(existing)
            .ok_or(PlayerError::PlayerNotFound)?;

        if self
            .player_index(new_name)
            .is_some_and(|other| other != index)
        {
            return Err(PlayerError::DuplicatePlayer);
        }

        debug!(new_name = %new_name, "player renamed");
        self.players[index].rename(new_name.into());

        Ok(())
    }

    /// Removes a player together with their boards.
    ///
    /// Returns the removed player.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found or fewer than two
    /// players would remain.
    #[instrument(skip(self), fields(game = %self.name))]
    pub fn remove_player(&mut self, name: &str) -> Result<Player, PlayerError> {
        let index = self.player_index(name).ok_or(PlayerError::PlayerNotFound)?;

        if self.players.len() <= MIN_PLAYERS {
            return Err(PlayerError::TooFewPlayers);
        }

        debug!("player removed");
        Ok(self.players.remove(index))
    }

    /// Deals a new random board to a player.
    ///
    /// The board is regenerated while it matches any board already dealt in
    /// this game, up to the configured number of attempts. Returns a copy of
    /// the new board.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, the pool cannot fill a
    /// board, or no unique board was found within the attempts.
    #[instrument(skip(self, rng), fields(game = %self.name))]
    pub fn add_board<R: Rng + ?Sized>(
        &mut self,
        player: &str,
        rng: &mut R,
    ) -> Result<Board, BoardError> {
        let index = self.player_index(player).ok_or(BoardError::PlayerNotFound)?;

        let players = &self.players;
        let board = BoardFactory::new(&self.pool, self.options.max_per_column, self.targets)
            .generate_unique(rng, self.options.generation_attempts, |board| {
                players.iter().any(|owner| owner.owns(board))
            })?;

        debug!(balls = board.len(), "board dealt");
        self.players[index].add_board(board.clone());

        Ok(board)
    }

    /// Takes a board away from a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, does not own the board,
    /// or would be left without boards.
    #[instrument(skip(self, board), fields(game = %self.name))]
    pub fn remove_board(&mut self, player: &str, board: &Board) -> Result<(), BoardError> {
        let index = self.player_index(player).ok_or(BoardError::PlayerNotFound)?;
        let owner = &mut self.players[index];

        if !owner.owns(board) {
            return Err(BoardError::BoardNotFound);
        }

        if owner.board_count() == 1 {
            return Err(BoardError::LastBoardRemovalRejected);
        }

        owner.remove_board(board);
        debug!("board removed");

        Ok(())
    }

    /// Starts the game.
    ///
    /// The draft is left untouched; the returned game carries a copy of its
    /// pool, players, and options with nothing called yet.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are registered or any
    /// player has no boards.
    #[instrument(skip(self), fields(game = %self.name))]
    pub fn start(&self) -> Result<ActiveGame, StartError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(StartError::NotEnoughPlayers);
        }

        if self.players.iter().any(|player| player.board_count() == 0) {
            return Err(StartError::PlayerWithoutBoards);
        }

        info!(players = self.players.len(), "game started");

        Ok(ActiveGame::new(
            self.name.clone(),
            self.options,
            self.pool.clone(),
            self.players.clone(),
        ))
    }
}
