//! Players and the boards they own.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ball::Ball;
use crate::board::Board;

/// A registered player.
///
/// Players are identified by name: two players with the same name are the
/// same player.
#[derive(Debug, Clone)]
pub struct Player {
    /// Player name, unique within a game.
    name: String,
    /// Boards owned by the player.
    boards: Vec<Board>,
}

impl Player {
    /// Creates a new player without boards.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            boards: Vec::new(),
        }
    }

    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's boards.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the number of boards.
    #[must_use]
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    /// Returns whether the player owns the board.
    #[must_use]
    pub fn owns(&self, board: &Board) -> bool {
        self.boards.iter().any(|owned| owned.same_balls(board))
    }

    /// Returns whether any board has been won.
    #[must_use]
    pub fn has_winning_board(&self) -> bool {
        self.boards.iter().any(Board::is_winner)
    }

    /// Returns the boards that have been won.
    #[must_use]
    pub fn winning_boards(&self) -> Vec<&Board> {
        self.boards.iter().filter(|board| board.is_winner()).collect()
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn add_board(&mut self, board: Board) {
        self.boards.push(board);
    }

    /// Removes the board with the same balls, returning whether one was found.
    pub(crate) fn remove_board(&mut self, board: &Board) -> bool {
        let before = self.boards.len();
        self.boards.retain(|owned| !owned.same_balls(board));
        self.boards.len() != before
    }

    /// Marks the ball on every board, returning how many boards it completed.
    pub(crate) fn mark(&mut self, ball: Ball) -> usize {
        self.boards
            .iter_mut()
            .map(|board| board.mark(ball))
            .filter(|&completed| completed)
            .count()
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}
