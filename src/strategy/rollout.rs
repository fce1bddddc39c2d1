use crate::game::board::Board;
use crate::game::hand::Hand;
use crate::game::player::Seat;
use crate::game::tile::Tile;
use crate::scoring::batida::lock_winner;
use crate::strategy::{Strategy, TurnView};
use crate::{DominoError, Result};
use rand::RngExt;
use rayon::prelude::*;

pub const DEFAULT_SIMULATIONS: usize = 30;

/// Flat single-ply Monte-Carlo evaluator. For each legal candidate it clones
/// the full visible state, plays the candidate, finishes the round with
/// uniformly random moves for everyone, and keeps the candidate with the
/// highest measured win rate. No tree, no node statistics, no exploration
/// bonus — every (candidate, rollout) pair is an independent sample, which is
/// why candidates can be scored in parallel.
#[derive(Debug, Clone, Copy)]
pub struct RolloutSearchStrategy {
    pub simulations: usize,
}

impl Default for RolloutSearchStrategy {
    fn default() -> Self {
        RolloutSearchStrategy {
            simulations: DEFAULT_SIMULATIONS,
        }
    }
}

impl RolloutSearchStrategy {
    pub fn new(simulations: usize) -> Self {
        RolloutSearchStrategy { simulations }
    }

    /// Estimated probability that playing `tile` now ends with the acting
    /// player winning the round. Exactly 1.0 when the tile itself is the
    /// batida, for any number of simulations.
    pub fn win_rate(&self, view: &TurnView<'_>, tile: Tile) -> Result<f64> {
        let mut wins = 0usize;
        for _ in 0..self.simulations.max(1) {
            if rollout_once(view, tile)? {
                wins += 1;
            }
        }
        Ok(wins as f64 / self.simulations.max(1) as f64)
    }
}

impl Strategy for RolloutSearchStrategy {
    fn choose_tile(&mut self, view: &TurnView<'_>, legal: &[Tile]) -> Result<Tile> {
        if legal.is_empty() {
            return Err(DominoError::NoLegalMove(view.seat));
        }

        let rates = legal
            .par_iter()
            .map(|&tile| self.win_rate(view, tile))
            .collect::<Result<Vec<f64>>>()?;

        // Stable argmax: ties keep the earliest candidate.
        let mut best = 0;
        for (index, rate) in rates.iter().enumerate().skip(1) {
            if *rate > rates[best] {
                best = index;
            }
        }
        log::debug!(
            "rollout: {} picks {} at {:.2} over {} candidates",
            view.seat,
            legal[best],
            rates[best],
            legal.len()
        );
        Ok(legal[best])
    }
}

/// One randomized continuation. The hands and board are deep copies; the live
/// round state is never touched.
fn rollout_once(view: &TurnView<'_>, tile: Tile) -> Result<bool> {
    let me = view.seat;
    let mut hands = view.hands.clone();
    let mut board = view.board.clone();

    hands[me.index()].remove(tile);
    board.play(tile)?;
    if hands[me.index()].is_empty() {
        return Ok(true);
    }

    let winner = random_playout(&mut hands, &mut board, me.next())?;
    Ok(winner == Some(me))
}

/// Plays the round to its terminal state with uniformly random legal moves,
/// returning the winner (`None` on a tied lock).
pub fn random_playout(
    hands: &mut [Hand; 4],
    board: &mut Board,
    first: Seat,
) -> Result<Option<Seat>> {
    let mut rng = rand::rng();
    let mut seat = first;
    let mut consecutive_passes = 0u8;

    loop {
        let legal = hands[seat.index()].legal_moves(board.open_ends());
        if legal.is_empty() {
            consecutive_passes += 1;
            if consecutive_passes == 4 {
                return Ok(lock_winner(hands).map(|(winner, _)| winner));
            }
        } else {
            let tile = legal[rng.random_range(0..legal.len())];
            hands[seat.index()].remove(tile);
            board.play(tile)?;
            consecutive_passes = 0;
            if hands[seat.index()].is_empty() {
                return Ok(Some(seat));
            }
        }
        seat = seat.next();
    }
}
