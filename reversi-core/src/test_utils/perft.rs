//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises move generation and move application together.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;
use crate::game::Player;

pub fn run_perft(depth: u64) -> u64 {
    count_leaves(Board::new(), Player::One, depth)
}

/// Count the leaves `depth` plies below `board` with `mover` to play.
/// A pass uses up a ply; a finished game is a single leaf.
pub fn count_leaves(board: Board, mover: Player, depth: u64) -> u64 {
    leaves_below(board, mover, depth, false)
}

fn leaves_below(board: Board, mover: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.get_moves(mover);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !mover, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| leaves_below(board.make_move(mover, mv), !mover, depth - 1, false))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
fn perft_through_a_pass() {
    use crate::board::Cell;
    use crate::location::Location;

    // Player 1 has to pass; player 2's only reply at c1 ends the game.
    let mut board = Board::empty();
    board.set(Location::from_coords(0, 0).unwrap(), Cell::Player2);
    board.set(Location::from_coords(0, 1).unwrap(), Cell::Player1);

    assert_eq!(count_leaves(board, Player::One, 1), 1);
    assert_eq!(count_leaves(board, Player::One, 2), 1);
    assert_eq!(count_leaves(board, Player::One, 5), 1);
    assert_eq!(count_leaves(board, Player::Two, 1), 1);
    assert_eq!(count_leaves(Board::empty(), Player::One, 4), 1);
}
