//! Game state types.

/// Lifecycle stage of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Registering players and dealing boards.
    Draft,
    /// Calling balls.
    Active,
    /// A winner has been declared.
    Finished,
}
