//! A bingo game engine with optional `no_std` support.
//!
//! The crate provides a game that moves through three stages. A
//! [`DraftGame`] registers players and deals them randomly generated boards,
//! an [`ActiveGame`] calls balls and tracks which boards have been filled,
//! and a [`FinishedGame`] records the declared winner. The [`Game`] enum wraps
//! all three for callers that hold a game across stages.
//!
//! # Example
//!
//! ```
//! use bingors::{DraftGame, GameOptions};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut draft = DraftGame::new("friday", GameOptions::default()).unwrap();
//! draft.add_player("alice").unwrap();
//! draft.add_player("bob").unwrap();
//! draft.add_board("alice", &mut rng).unwrap();
//! draft.add_board("bob", &mut rng).unwrap();
//!
//! let mut active = draft.start().unwrap();
//! let ball = active.play_random_ball(&mut rng).unwrap();
//! assert!(active.is_called(ball));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ball;
pub mod board;
pub mod error;
pub mod factory;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
mod sync;

// Re-export main types
pub use ball::{Ball, COLUMN_COUNT, Column, create_pool};
pub use board::{Board, BoardState};
pub use error::{BoardError, ConfigError, PlayError, PlayerError, StartError, WinnerError};
pub use factory::BoardFactory;
pub use game::{ActiveGame, DraftGame, FinishedGame, Game, GameStatus, create_game};
pub use options::{GameOptions, RoundingMode, Shape};
pub use player::Player;
pub use result::PotentialWinner;
pub use sync::SharedRng;
