//! The weighted computer player: rank moves by where they are and what they give away.

use crate::greedy::suggest_greedy;
use crate::strategy::Strategy;
use itertools::Itertools;
use reversi_core::{Board, Location, Player};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weights for the features of a candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Added when the move takes a corner.
    pub corner: i32,
    /// Added when the move is on a side but not a corner.
    pub side: i32,
    /// Added when the move is also the greedy player's choice.
    pub greedy_match: i32,
    /// Added for every opponent reply that takes a corner.
    pub opponent_corner: i32,
    /// Added for every opponent reply on a side, corners included.
    pub opponent_side: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            corner: 10,
            side: 2,
            greedy_match: 1,
            opponent_corner: -10,
            opponent_side: -5,
        }
    }
}

/// Picks the legal move with the highest total weight; the first one wins ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct Weighted {
    weights: Weights,
}

impl Weighted {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    /// Every legal move for `mover` with its weight, in row-major order.
    pub fn weigh(&self, board: &Board, mover: Player) -> Vec<(Location, i32)> {
        let greedy_pick = suggest_greedy(board, mover);

        board
            .get_moves(mover)
            .into_iter()
            .map(|mv| (mv, self.weigh_move(board, mover, mv, greedy_pick)))
            .collect()
    }

    fn weigh_move(
        &self,
        board: &Board,
        mover: Player,
        mv: Location,
        greedy_pick: Option<Location>,
    ) -> i32 {
        let w = &self.weights;
        let mut weight = 0;

        // Own position: a corner is not also paid as a side.
        if mv.is_corner() {
            weight += w.corner;
        } else if mv.is_side() {
            weight += w.side;
        }

        if greedy_pick == Some(mv) {
            weight += w.greedy_match;
        }

        // Opponent replies: corners also count as sides here.
        let after = board.make_move(mover, mv);
        for reply in after.get_moves(!mover) {
            if reply.is_corner() {
                weight += w.opponent_corner;
            }
            if reply.is_side() {
                weight += w.opponent_side;
            }
        }

        weight
    }
}

impl Strategy for Weighted {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn suggest(&self, board: &Board, mover: Player) -> Option<Location> {
        let weighted = self.weigh(board, mover);
        debug!(
            player = %mover,
            weights = %weighted.iter().map(|(mv, w)| format!("{}={}", mv, w)).join(", "),
            "weighed candidate moves"
        );

        let mut best: Option<(Location, i32)> = None;
        for (mv, weight) in weighted {
            if best.map_or(true, |(_, best_weight)| weight > best_weight) {
                best = Some((mv, weight));
            }
        }

        best.map(|(mv, _)| mv)
    }
}

/// Suggest a move for `mover` using the default [`Weights`].
/// Returns None if `mover` has no legal move.
pub fn suggest_weighted(board: &Board, mover: Player) -> Option<Location> {
    Weighted::default().suggest(board, mover)
}
