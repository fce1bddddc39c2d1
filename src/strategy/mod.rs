pub mod baseline;
pub mod rollout;
pub mod tabular;
pub mod weighted;

use crate::game::board::Board;
use crate::game::hand::Hand;
use crate::game::player::Seat;
use crate::game::tile::Tile;
use crate::Result;

/// Everything a strategy may look at when choosing a move. Hands are fully
/// visible (the rollout evaluator clones them verbatim rather than sampling
/// hidden information); the pass counters and known-absent table summarize
/// what a purely observational strategy could have deduced.
pub struct TurnView<'a> {
    /// The seat being asked to move.
    pub seat: Seat,
    pub board: &'a Board,
    pub hands: &'a [Hand; 4],
    /// How many times each seat has passed this round.
    pub pass_counts: &'a [u8; 4],
    /// `known_absent[seat][v]` is true when that seat passed while `v` was an
    /// open end, proving the seat holds no tile with pip `v`.
    pub known_absent: &'a [[bool; 7]; 4],
    /// Team scores, indexed by [`crate::game::player::Team::index`].
    pub scores: [u8; 2],
    pub target: u8,
}

impl TurnView<'_> {
    /// The acting player's own hand.
    pub fn hand(&self) -> &Hand {
        &self.hands[self.seat.index()]
    }

    pub fn legal_moves(&self) -> Vec<Tile> {
        self.hand().legal_moves(self.board.open_ends())
    }
}

/// Move selection contract, called synchronously once per turn by the round
/// driver. `legal` is never empty and the returned tile must come from it;
/// anything else aborts the match as `InvalidStrategyOutput`.
pub trait Strategy {
    fn choose_tile(&mut self, view: &TurnView<'_>, legal: &[Tile]) -> Result<Tile>;

    /// Terminal reward delivery, invoked once per strategy when a round ends
    /// (`winner` is `None` for a scoreless locked tie). Default: ignore.
    fn notify_result(&mut self, _seat: Seat, _winner: Option<Seat>) {}
}

pub use baseline::BaselineStrategy;
pub use rollout::RolloutSearchStrategy;
pub use tabular::TabularLearningStrategy;
pub use weighted::{HeuristicWeights, WeightedHeuristicStrategy};
