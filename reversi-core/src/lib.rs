//! `reversi-core` implements the rules of Othello (Reversi) on a plain 8x8 grid.
//!
//! This package is organised in three layers:
//!
//!  - [`Board`] holds the grid and implements the rules directly: line scanning,
//!    move generation, move application and scoring. Board operations are unchecked;
//!    [`Board::apply_move`] expects a move the generator has certified.
//!  - [`GameState`] wraps a board with the two player names and the side to move,
//!    and offers checked, turn-aware operations.
//!  - [`persist`] reads and writes the flat text save format.

pub mod persist;
pub mod test_utils;

mod board;
mod game;
mod location;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
