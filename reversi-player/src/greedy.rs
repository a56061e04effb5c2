//! The greedy computer player: maximise the score one move ahead.

use crate::strategy::Strategy;
use reversi_core::{Board, Location, Player};
use tracing::trace;

/// Suggest the move that leaves `mover` with the best immediate score.
///
/// Player 1 wants the score as high as possible, player 2 as low as possible. The
/// baseline starts at the current score and a move is only taken if it strictly beats
/// the best so far, so the first of several equally good moves wins.
/// Returns None if `mover` has no legal move.
pub fn suggest_greedy(board: &Board, mover: Player) -> Option<Location> {
    let mut best_score = board.score();
    let mut best_move = None;

    for mv in board.get_moves(mover) {
        let score = board.make_move(mover, mv).score();
        let improves = match mover {
            Player::One => score > best_score,
            Player::Two => score < best_score,
        };

        if improves {
            trace!(%mv, score, previous = best_score, "greedy candidate adopted");
            best_score = score;
            best_move = Some(mv);
        }
    }

    best_move
}

/// [`Strategy`] wrapper around [`suggest_greedy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Strategy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn suggest(&self, board: &Board, mover: Player) -> Option<Location> {
        suggest_greedy(board, mover)
    }
}
