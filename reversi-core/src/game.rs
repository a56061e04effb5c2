//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred, but engines
//! may use [`Board`] directly.

use crate::board::Board;
use crate::location::{Location, MoveList};
use derive_more::{Deref, Display, Error};
use std::fmt;

/// Single-letter names reserved for computer players: `C` (greedy) and `A` (weighted).
pub const COMPUTER_TAGS: [&str; 2] = ["C", "A"];

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first; `X` on the board, `1` in save files.
    #[default]
    One,
    /// `O` on the board, `2` in save files.
    Two,
}

impl Player {
    /// Gets the other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("1"),
            Player::Two => f.write_str("2"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "player must be \"1\" or \"2\"")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Player::One),
            "2" => Ok(Player::Two),
            _ => Err(ParsePlayerError),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum InvalidNameError {
    #[display(fmt = "player name must not be empty")]
    Empty,
    #[display(fmt = "player name must not be a number")]
    Numeric,
    #[display(fmt = "single-letter names are reserved for computer players (C or A)")]
    SingleCharacter,
    #[display(fmt = "player name must not contain control characters")]
    ControlCharacter,
}

/// An optionally signed run of decimal digits, such as `42` or `-5`.
fn is_integer(name: &str) -> bool {
    let digits = name.strip_prefix(['+', '-']).unwrap_or(name);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// A validated player name.
///
/// Names are non-empty and not numeric. A single character is only allowed when it is
/// one of the [`COMPUTER_TAGS`], which keeps names distinguishable from the mover line
/// of a save file. Each name takes one line of a save file, so control characters are refused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deref, Display)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidNameError::Empty);
        }
        if name.chars().any(char::is_control) {
            return Err(InvalidNameError::ControlCharacter);
        }
        if is_integer(&name) {
            return Err(InvalidNameError::Numeric);
        }
        if name.chars().count() == 1 && !COMPUTER_TAGS.contains(&name.as_str()) {
            return Err(InvalidNameError::SingleCharacter);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "{} is not a legal move for player {}", location, player)]
pub struct IllegalMoveError {
    pub location: Location,
    pub player: Player,
}

/// The complete state of an Othello game: who is playing, whose turn it is, and the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub player1: PlayerName,
    pub player2: PlayerName,
    pub mover: Player,
    pub board: Board,
}

impl GameState {
    /// Start a new game from the opening position, player 1 to move.
    pub fn new(player1: PlayerName, player2: PlayerName) -> Self {
        Self::from_parts(player1, player2, Player::default(), Board::new())
    }

    /// Rebuild a game in progress.
    pub fn from_parts(player1: PlayerName, player2: PlayerName, mover: Player, board: Board) -> Self {
        Self {
            player1,
            player2,
            mover,
            board,
        }
    }

    /// The name of `player`.
    pub fn name(&self, player: Player) -> &PlayerName {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    /// Get the legal moves for the player to move.
    #[inline]
    pub fn get_moves(&self) -> MoveList {
        self.board.get_moves(self.mover)
    }

    /// Play `loc` for the player to move, then hand the turn over.
    /// The board is untouched if the move is illegal.
    pub fn apply_move(&mut self, loc: Location) -> Result<(), IllegalMoveError> {
        if !self.board.is_legal_move(self.mover, loc) {
            return Err(IllegalMoveError {
                location: loc,
                player: self.mover,
            });
        }

        self.board.apply_move(self.mover, loc);
        self.pass();
        Ok(())
    }

    /// Hand the turn to the other player without moving.
    #[inline]
    pub fn pass(&mut self) {
        self.mover = !self.mover;
    }

    /// Whether neither player can move.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    /// The current score differential (player 1 - player 2).
    #[inline]
    pub fn score(&self) -> i8 {
        self.board.score()
    }

    /// If the game is over, get the winner, or None for a draw.
    /// Returns None while the game is still running.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_finished() {
            return None;
        }
        self.board.leader()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "{} (X) vs {} (O), player {} to move",
            self.player1, self.player2, self.mover
        )
    }
}
