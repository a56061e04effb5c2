//! The interface shared by computer players, and how players are assigned to seats.

use crate::greedy::Greedy;
use crate::weighted::{Weighted, Weights};
use reversi_core::{Board, Location, Player, PlayerName};

/// Name tag that selects the [`Greedy`] computer player.
pub const GREEDY_TAG: &str = "C";

/// Name tag that selects the [`Weighted`] computer player.
pub const WEIGHTED_TAG: &str = "A";

/// A way of choosing moves without human input.
pub trait Strategy {
    /// A short label for logs.
    fn name(&self) -> &'static str;

    /// Suggest a move for `mover`, or None if `mover` has to pass.
    /// Must not return a move that is illegal on `board`.
    fn suggest(&self, board: &Board, mover: Player) -> Option<Location>;
}

/// Who decides the moves for one side of the board.
pub enum Controller {
    Human,
    Computer(Box<dyn Strategy>),
}

impl Controller {
    /// Computer players are picked by name: `C` plays greedily, `A` plays by weights.
    /// Everyone else is human.
    pub fn for_name(name: &PlayerName, weights: Weights) -> Self {
        match name.as_str() {
            GREEDY_TAG => Controller::Computer(Box::new(Greedy)),
            WEIGHTED_TAG => Controller::Computer(Box::new(Weighted::new(weights))),
            _ => Controller::Human,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Controller::Human)
    }
}
