//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while configuring a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Game name is empty.
    #[error("game name must not be empty")]
    InvalidName,
    /// Total ball count is zero or not a multiple of the column count.
    #[error("total ball count must be a positive multiple of 5")]
    InvalidBallCount,
    /// Balls per board column is too small, or leaves no spare balls in the pool.
    #[error("balls per board column must be at least 2 and below the balls per pool column")]
    InvalidMaxPerColumn,
    /// Generation retry budget is zero.
    #[error("board generation needs at least one attempt")]
    InvalidGenerationAttempts,
    /// The shape cannot be scaled to the balls per board column.
    #[error("board shape cannot be satisfied with the given balls per column")]
    InfeasibleShape,
}

/// Errors that can occur while managing players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Invalid game state for player changes.
    #[error("players can only be changed before the game starts")]
    InvalidState,
    /// Player name is empty.
    #[error("player name must not be empty")]
    InvalidName,
    /// Another player already uses this name.
    #[error("game already contains a player with the same name")]
    DuplicatePlayer,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Removal would leave fewer than two players.
    #[error("at least two players must remain in the game")]
    TooFewPlayers,
}

/// Errors that can occur while adding or removing boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Invalid game state for board changes.
    #[error("boards can only be changed before the game starts")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Board not found.
    #[error("board not found")]
    BoardNotFound,
    /// The board is the player's only board.
    #[error("cannot remove the player's last board")]
    LastBoardRemovalRejected,
    /// A pool column holds fewer balls than a board column needs.
    #[error("not enough balls in every column to build a board")]
    InsufficientBalls,
    /// Every attempt produced a board that already exists in the game.
    #[error("could not generate a unique board within the retry budget")]
    GenerationExhausted,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Invalid game state for starting.
    #[error("game has already started")]
    InvalidState,
    /// Fewer than two players are registered.
    #[error("at least two players are needed to start the game")]
    NotEnoughPlayers,
    /// A player owns no boards.
    #[error("every player needs at least one board to start the game")]
    PlayerWithoutBoards,
}

/// Errors that can occur when calling a ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for calling balls.
    #[error("balls can only be called while the game is active")]
    InvalidState,
    /// Ball is not part of the game's pool.
    #[error("ball is not in the game's pool")]
    BallNotInPool,
    /// Ball was called before.
    #[error("ball has already been called")]
    BallAlreadyCalled,
    /// Every ball in the pool has been called.
    #[error("no balls remaining to call")]
    NoBallsRemaining,
}

/// Errors that can occur when declaring the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WinnerError {
    /// Invalid game state for declaring a winner.
    #[error("a winner can only be declared while the game is active")]
    InvalidState,
    /// Candidate is not registered or owns no winning board.
    #[error("player is not part of the game or has no winning board")]
    InvalidWinnerCandidate,
}
