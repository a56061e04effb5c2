//! Reading and writing games in the flat text save format.
//!
//! ```text
//! Alice            player 1 name
//! C                player 2 name
//! 2                player to move
//! 0,0,0,0,0,0,0,0  eight rows of eight cells: 0 empty, 1 player 1, 2 player 2
//! ...
//! ```
//!
//! Commas and spaces inside board rows are optional when reading.

use crate::board::{Board, Cell};
use crate::game::{GameState, InvalidNameError, ParsePlayerError, Player, PlayerName};
use crate::location::Location;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use itertools::Itertools;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Where a game is saved when no other path is configured.
pub const DEFAULT_SAVE_PATH: &str = "game.txt";

/// Number of header lines before the board rows.
const HEADER_LINES: usize = 3;

#[derive(Debug, Display, Error)]
pub enum LoadGameError {
    #[display(fmt = "cannot read save file: {}", source)]
    CannotReadFile { source: io::Error },
    #[display(fmt = "save file ends before line {}", line)]
    MissingLine { line: usize },
    #[display(fmt = "invalid name for player {}: {}", player, source)]
    InvalidName {
        player: Player,
        source: InvalidNameError,
    },
    #[display(fmt = "invalid player to move: {}", source)]
    InvalidMover { source: ParsePlayerError },
    #[display(fmt = "line {} must hold 8 cells, each 0, 1 or 2", line)]
    InvalidRow { line: usize },
    #[display(fmt = "expected 8 board rows, found {}", found)]
    WrongRowCount { found: usize },
}

/// Formats a [`GameState`] in the save format.
struct SaveFormat<'a>(&'a GameState);

impl fmt::Display for SaveFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        writeln!(f, "{}", game.player1)?;
        writeln!(f, "{}", game.player2)?;
        writeln!(f, "{}", game.mover)?;

        for row in &Location::all().chunks(EDGE_LENGTH) {
            writeln!(f, "{}", row.map(|loc| game.board.get(loc).to_digit()).join(","))?;
        }
        Ok(())
    }
}

impl GameState {
    /// Render this game in the save format.
    pub fn to_save_string(&self) -> String {
        SaveFormat(self).to_string()
    }
}

fn parse_name(line: Option<&str>, player: Player) -> Result<PlayerName, LoadGameError> {
    let line_number = match player {
        Player::One => 1,
        Player::Two => 2,
    };
    let line = line.ok_or(LoadGameError::MissingLine { line: line_number })?;
    PlayerName::new(line).map_err(|source| LoadGameError::InvalidName { player, source })
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<Cell>, LoadGameError> {
    let invalid = || LoadGameError::InvalidRow { line: line_number };

    let cells = line
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .map(Cell::from_digit)
        .collect::<Option<Vec<Cell>>>()
        .ok_or_else(invalid)?;

    if cells.len() != EDGE_LENGTH {
        return Err(invalid());
    }
    Ok(cells)
}

impl std::str::FromStr for GameState {
    type Err = LoadGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();

        let player1 = parse_name(lines.next(), Player::One)?;
        let player2 = parse_name(lines.next(), Player::Two)?;
        let mover: Player = lines
            .next()
            .ok_or(LoadGameError::MissingLine { line: HEADER_LINES })?
            .parse()
            .map_err(|source| LoadGameError::InvalidMover { source })?;

        let mut rows: Vec<&str> = lines.collect();
        while rows.last().map_or(false, |row| row.trim().is_empty()) {
            rows.pop();
        }
        if rows.len() != EDGE_LENGTH {
            return Err(LoadGameError::WrongRowCount { found: rows.len() });
        }

        let mut cells = Vec::with_capacity(NUM_SPACES);
        for (index, row) in rows.iter().enumerate() {
            cells.extend(parse_row(row, HEADER_LINES + index + 1)?);
        }

        let mut board = Board::empty();
        for (loc, cell) in Location::all().zip(cells) {
            board.set(loc, cell);
        }

        Ok(GameState::from_parts(player1, player2, mover, board))
    }
}

/// Write `game` to `path`, replacing any existing file.
pub fn save_game(path: impl AsRef<Path>, game: &GameState) -> io::Result<()> {
    fs::write(path, game.to_save_string())
}

/// Load a game previously written by [`save_game`].
pub fn load_game(path: impl AsRef<Path>) -> Result<GameState, LoadGameError> {
    let text =
        fs::read_to_string(path).map_err(|source| LoadGameError::CannotReadFile { source })?;
    text.parse()
}
