//! The Othello board and the rules that act on it.
//!
//! The board is a plain row-major grid of [`Cell`]s. Everything here is built on one
//! primitive, [`Board::scan_line`]: a run of opponent pieces is captured when it is
//! closed off by one of the mover's own pieces.
//! Board operations are unchecked; [`GameState`](crate::GameState) offers the checked interface.

use crate::game::Player;
use crate::location::{Direction, Location, MoveList};
use crate::EDGE_LENGTH;
use arrayvec::ArrayVec;
use std::fmt;

/// The longest possible capture run: a full edge minus the placed piece and the closing piece.
pub const MAX_RUN: usize = EDGE_LENGTH - 2;

/// The opponent pieces captured along a single direction.
pub type Run = ArrayVec<Location, MAX_RUN>;

/// The contents of a single square.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player whose piece is on this square, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }

    /// The save-file digit for this cell.
    pub fn to_digit(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Player1 => '1',
            Cell::Player2 => '2',
        }
    }

    /// Parse a save-file digit.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::Player1),
            '2' => Some(Cell::Player2),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }
}

/// An 8x8 Othello board. `Copy`, so simulating a move on a copy never touches the original.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// The standard starting position: two pieces each on the centre diagonals.
    pub const fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::Player2;
        board.cells[3][4] = Cell::Player1;
        board.cells[4][3] = Cell::Player1;
        board.cells[4][4] = Cell::Player2;
        board
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        let (row, col) = loc.to_coords();
        self.cells[row as usize][col as usize]
    }

    #[inline]
    pub fn set(&mut self, loc: Location, cell: Cell) {
        let (row, col) = loc.to_coords();
        self.cells[row as usize][col as usize] = cell;
    }

    /// Walk from `origin` in `dir` and return the opponent pieces `mover` would capture.
    ///
    /// The run is only returned if it is closed off by one of `mover`'s pieces. Reaching an
    /// empty square or the edge of the board first captures nothing, as does finding
    /// `mover`'s own piece immediately next to `origin`.
    pub fn scan_line(&self, mover: Player, origin: Location, dir: Direction) -> Run {
        let mut run = Run::new();
        let mut cursor = origin;

        loop {
            cursor = match cursor.step(dir) {
                Some(next) => next,
                None => return Run::new(),
            };

            match self.get(cursor).owner() {
                Some(owner) if owner == mover => return run,
                Some(_) => {
                    // A full run has no square left for a closing piece.
                    if run.try_push(cursor).is_err() {
                        return Run::new();
                    }
                }
                None => return Run::new(),
            }
        }
    }

    /// Whether `mover` may place a piece at `loc`.
    pub fn is_legal_move(&self, mover: Player, loc: Location) -> bool {
        self.get(loc) == Cell::Empty
            && Direction::ALL
                .iter()
                .any(|&dir| !self.scan_line(mover, loc, dir).is_empty())
    }

    /// Get the legal moves for `mover`, in row-major order.
    /// An empty list means `mover` has to pass.
    pub fn get_moves(&self, mover: Player) -> MoveList {
        Location::all()
            .filter(|&loc| self.is_legal_move(mover, loc))
            .collect()
    }

    /// Place a piece for `mover` at `loc` and flip every captured run, in place.
    ///
    /// `loc` must be a legal move for `mover` (see [`Board::get_moves`]); this is checked
    /// only in debug builds. Copy the board first if the prior position is still needed.
    pub fn apply_move(&mut self, mover: Player, loc: Location) {
        debug_assert!(
            self.is_legal_move(mover, loc),
            "{} is not a legal move for player {}",
            loc,
            mover
        );

        self.set(loc, mover.into());
        for dir in Direction::ALL {
            for captured in self.scan_line(mover, loc, dir) {
                self.set(captured, mover.into());
            }
        }
    }

    /// Return the board after `mover` plays at `loc`. Same contract as [`Board::apply_move`].
    #[inline]
    pub fn make_move(mut self, mover: Player, loc: Location) -> Self {
        self.apply_move(mover, loc);
        self
    }

    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Count the pieces belonging to `player`.
    pub fn count(&self, player: Player) -> u8 {
        let target = Cell::from(player);
        self.cells().filter(|&cell| cell == target).count() as u8
    }

    /// Count the occupied squares.
    pub fn count_occupied(&self) -> u8 {
        self.cells().filter(|&cell| cell != Cell::Empty).count() as u8
    }

    /// Score a board as: # player 1 pieces - # player 2 pieces.
    /// Positive favours player 1, negative favours player 2.
    #[inline]
    pub fn score(&self) -> i8 {
        self.count(Player::One) as i8 - self.count(Player::Two) as i8
    }

    /// Whether neither player has a legal move, regardless of whose turn it is.
    pub fn is_finished(&self) -> bool {
        self.get_moves(Player::One).is_empty() && self.get_moves(Player::Two).is_empty()
    }

    /// The player with more pieces, or None for a draw.
    pub fn leader(&self) -> Option<Player> {
        match self.score() {
            s if s > 0 => Some(Player::One),
            s if s < 0 => Some(Player::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   a b c d e f g h")?;

        for (index, row) in self.cells.iter().enumerate() {
            write!(f, "\n {} ", index + 1)?;
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Player1 => 'X',
                    Cell::Player2 => 'O',
                };
                write!(f, "{} ", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: u8, col: u8) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    fn board_with(player1: &[(u8, u8)], player2: &[(u8, u8)]) -> Board {
        let mut board = Board::empty();
        for &(row, col) in player1 {
            board.set(loc(row, col), Cell::Player1);
        }
        for &(row, col) in player2 {
            board.set(loc(row, col), Cell::Player2);
        }
        board
    }

    #[test]
    fn starting_board() {
        let board = Board::new();
        assert_eq!(board.count_occupied(), 4);
        assert_eq!(board.get(loc(3, 3)), Cell::Player2);
        assert_eq!(board.get(loc(3, 4)), Cell::Player1);
        assert_eq!(board.get(loc(4, 3)), Cell::Player1);
        assert_eq!(board.get(loc(4, 4)), Cell::Player2);
        assert_eq!(board.score(), 0);
        assert_eq!(board.leader(), None);
        assert_eq!(Board::default(), board);
    }

    #[test]
    fn opening_moves() {
        let board = Board::new();
        let moves: Vec<Location> = board.get_moves(Player::One).into_iter().collect();
        assert_eq!(moves, vec![loc(2, 3), loc(3, 2), loc(4, 5), loc(5, 4)]);

        let moves: Vec<Location> = board.get_moves(Player::Two).into_iter().collect();
        assert_eq!(moves, vec![loc(2, 4), loc(3, 5), loc(4, 2), loc(5, 3)]);
    }

    #[test]
    fn get_moves_is_deterministic() {
        let board = Board::new().make_move(Player::One, loc(2, 3));
        assert_eq!(board.get_moves(Player::Two), board.get_moves(Player::Two));
    }

    #[test]
    fn scan_line_captures_closed_run() {
        let board = board_with(&[(3, 6)], &[(3, 4), (3, 5)]);
        let run = board.scan_line(Player::One, loc(3, 3), Direction::East);
        assert_eq!(run.as_slice(), &[loc(3, 4), loc(3, 5)]);
    }

    #[test]
    fn scan_line_adjacent_own_piece_is_empty() {
        let board = Board::new();
        assert!(board
            .scan_line(Player::One, loc(4, 2), Direction::East)
            .is_empty());
    }

    #[test]
    fn scan_line_open_run_is_empty() {
        // Opponent pieces running into an empty square.
        let board = board_with(&[], &[(3, 4), (3, 5)]);
        assert!(board
            .scan_line(Player::One, loc(3, 3), Direction::East)
            .is_empty());
    }

    #[test]
    fn scan_line_off_board_is_empty() {
        // Opponent pieces running off the edge.
        let board = board_with(&[], &[(0, 6), (0, 7)]);
        assert!(board
            .scan_line(Player::One, loc(0, 5), Direction::East)
            .is_empty());
        assert!(board
            .scan_line(Player::One, loc(0, 0), Direction::North)
            .is_empty());
        assert!(board
            .scan_line(Player::One, loc(7, 7), Direction::SouthEast)
            .is_empty());
    }

    #[test]
    fn scan_line_longest_run() {
        let board = board_with(&[(7, 7)], &[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6)]);
        let run = board.scan_line(Player::One, loc(0, 0), Direction::SouthEast);
        assert_eq!(run.len(), MAX_RUN);
        assert!(board.is_legal_move(Player::One, loc(0, 0)));
    }

    #[test]
    fn scan_line_full_edge_of_opponents_is_empty() {
        let row: Vec<(u8, u8)> = (1..8).map(|col| (0, col)).collect();
        let board = board_with(&[], &row);
        assert!(board
            .scan_line(Player::One, loc(0, 0), Direction::East)
            .is_empty());
        assert!(!board.is_legal_move(Player::One, loc(0, 0)));
    }

    #[test]
    fn get_moves_with_full_opponent_row() {
        let mut board = Board::new();
        for col in 1..8 {
            board.set(loc(0, col), Cell::Player2);
        }
        let moves: Vec<Location> = board.get_moves(Player::One).into_iter().collect();
        assert_eq!(moves, vec![loc(2, 3), loc(3, 2), loc(4, 5), loc(5, 4)]);
    }

    #[test]
    fn occupied_square_is_not_legal() {
        let board = Board::new();
        assert!(!board.is_legal_move(Player::One, loc(3, 3)));
        assert!(!board.is_legal_move(Player::One, loc(0, 0)));
    }

    #[test]
    fn apply_move_flips_single_run() {
        let mut board = Board::new();
        board.apply_move(Player::One, loc(2, 3));
        assert_eq!(board.get(loc(2, 3)), Cell::Player1);
        assert_eq!(board.get(loc(3, 3)), Cell::Player1);
        assert_eq!(board.get(loc(4, 4)), Cell::Player2);
        assert_eq!(board.count(Player::One), 4);
        assert_eq!(board.count(Player::Two), 1);
        assert_eq!(board.score(), 3);
    }

    #[test]
    fn apply_move_flips_every_direction() {
        // A plus-shaped trap around (3, 3): captures W, E, N and S but not the open diagonal.
        let board = board_with(
            &[(3, 1), (3, 5), (1, 3), (5, 3)],
            &[(3, 2), (3, 4), (2, 3), (4, 3), (2, 2)],
        );
        let after = board.make_move(Player::One, loc(3, 3));
        for (row, col) in [(3, 2), (3, 4), (2, 3), (4, 3)] {
            assert_eq!(after.get(loc(row, col)), Cell::Player1);
        }
        assert_eq!(after.get(loc(2, 2)), Cell::Player2);
        assert_eq!(after.count_occupied(), board.count_occupied() + 1);
    }

    #[test]
    fn make_move_leaves_original_untouched() {
        let board = Board::new();
        let after = board.make_move(Player::Two, loc(2, 4));
        assert_eq!(board, Board::new());
        assert_ne!(after, board);
    }

    #[test]
    fn apply_move_adds_exactly_one_piece() {
        let mut board = Board::new();
        let mut mover = Player::One;

        for _ in 0..20 {
            let moves = board.get_moves(mover);
            if let Some(&mv) = moves.first() {
                let before = board.count_occupied();
                board.apply_move(mover, mv);
                assert_eq!(board.count_occupied(), before + 1);
            }
            mover = !mover;
        }
    }

    #[test]
    fn finished_board_detected_for_both_players() {
        let board = board_with(&[(0, 0), (3, 3), (7, 7)], &[]);
        assert!(board.get_moves(Player::One).is_empty());
        assert!(board.get_moves(Player::Two).is_empty());
        assert!(board.is_finished());
        assert_eq!(board.leader(), Some(Player::One));

        assert!(!Board::new().is_finished());
    }

    #[test]
    fn one_sided_pass_is_not_finished() {
        // Player 2 can capture at (0, 2); player 1 has nothing.
        let board = board_with(&[(0, 1)], &[(0, 0)]);
        assert!(board.get_moves(Player::One).is_empty());
        assert!(!board.get_moves(Player::Two).is_empty());
        assert!(!board.is_finished());
    }

    #[test]
    fn cell_digits() {
        for cell in [Cell::Empty, Cell::Player1, Cell::Player2] {
            assert_eq!(Cell::from_digit(cell.to_digit()), Some(cell));
        }
        assert_eq!(Cell::from_digit('3'), None);
        assert_eq!(Cell::from(Player::Two).owner(), Some(Player::Two));
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn board_display() {
        let rendered = Board::new().to_string();
        let lines: Vec<&str> = rendered.lines().map(str::trim_end).collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   a b c d e f g h");
        assert_eq!(lines[4], " 4 . . . O X . . .");
        assert_eq!(lines[5], " 5 . . . X O . . .");
    }
}
