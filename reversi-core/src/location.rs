//! Code for working with [`Location`]s and [`Direction`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::{Deref, Display, Error};
use itertools::{iproduct, Itertools};
use std::fmt::{self, Formatter, Write};

/// The last valid row or column index.
const MAX_COORD: u8 = (EDGE_LENGTH - 1) as u8;

/// A location on the Othello board. Always on the board.
/// Orders row-major: (0, 0) < (0, 1) < ... < (7, 7).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    row: u8,
    col: u8,
}

/// One of the eight compass directions a capture line can run in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    East,
    West,
    South,
    North,
    SouthEast,
    NorthWest,
    NorthEast,
    SouthWest,
}

impl Direction {
    /// Every direction, in the order lines are scanned.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    /// The (row, column) unit step for this direction. Row 0 is the top of the board.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::SouthEast => (1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
        }
    }
}

impl Location {
    /// Construct a Location from row and column coordinates.
    /// Returns None if the coordinates are off the board.
    #[inline]
    pub fn from_coords(row: u8, col: u8) -> Option<Self> {
        if row > MAX_COORD || col > MAX_COORD {
            None
        } else {
            Some(Self { row, col })
        }
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// The neighbouring location one step in `dir`, or None if that step leaves the board.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (d_row, d_col) = dir.delta();
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as u8, col as u8)
    }

    /// Whether this is one of the four corner squares.
    #[inline]
    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == MAX_COORD) && (self.col == 0 || self.col == MAX_COORD)
    }

    /// Whether this square lies on the outer ring. Corners are sides too.
    #[inline]
    pub fn is_side(self) -> bool {
        self.row == 0 || self.row == MAX_COORD || self.col == 0 || self.col == MAX_COORD
    }

    /// Every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        iproduct!(0..=MAX_COORD, 0..=MAX_COORD).map(|(row, col)| Location { row, col })
    }
}

/// Convert this [`Location`] into coordinate notation ("d3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "abcdefgh".chars().nth(self.col as usize).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum ParseLocationError {
    #[display(fmt = "coordinate must be exactly 2 characters")]
    WrongLength,
    #[display(fmt = "coordinate row must be a number in 1-8")]
    RowOutOfRange,
    #[display(fmt = "coordinate column must be a letter in a-h")]
    InvalidColumn,
    #[display(fmt = "coordinate must be a letter and a number, like \"d3\" or \"3d\"")]
    Mixed,
}

/// One half of a coordinate string, already range-checked.
enum CoordPart {
    Row(u8),
    Col(u8),
}

impl CoordPart {
    fn parse(c: char) -> Result<Self, ParseLocationError> {
        if let Some(digit) = c.to_digit(10) {
            return match digit {
                1..=8 => Ok(CoordPart::Row(digit as u8 - 1)),
                _ => Err(ParseLocationError::RowOutOfRange),
            };
        }

        "abcdefgh"
            .find(c.to_ascii_lowercase())
            .map(|col| CoordPart::Col(col as u8))
            .ok_or(ParseLocationError::InvalidColumn)
    }
}

/// Build a [`Location`] from coordinate notation.
/// Accepts a letter and a digit in either order ("d3" or "3d"), ignoring spaces.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: Vec<char> = s.chars().filter(|c| *c != ' ').collect();
        let [first, second] = compact[..] else {
            return Err(ParseLocationError::WrongLength);
        };

        match (CoordPart::parse(first)?, CoordPart::parse(second)?) {
            (CoordPart::Col(col), CoordPart::Row(row)) | (CoordPart::Row(row), CoordPart::Col(col)) => {
                Ok(Self { row, col })
            }
            _ => Err(ParseLocationError::Mixed),
        }
    }
}

/// The legal moves out of a position, in row-major order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deref)]
pub struct MoveList(ArrayVec<Location, NUM_SPACES>);

impl FromIterator<Location> for MoveList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = arrayvec::IntoIter<Location, NUM_SPACES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}
