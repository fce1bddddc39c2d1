use crate::game::deal::deal_hands;
use crate::game::history::{MatchSummary, RoundSummary};
use crate::game::player::{Team, SEATS};
use crate::game::round::{Opening, Round};
use crate::strategy::Strategy;
use crate::{DominoError, Result};
use log::info;

pub const DEFAULT_TARGET: u8 = 6;

/// A match: rounds are replayed with fresh deals until one team's score
/// reaches the target. Round 1 opens with the highest double; afterwards the
/// previous round's winner opens, and a scoreless locked tie falls back to
/// the highest-double rule again.
#[derive(Debug)]
pub struct DominoMatch {
    target: u8,
    scores: [u8; 2],
    rounds: Vec<RoundSummary>,
    next_opening: Opening,
}

impl Default for DominoMatch {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

impl DominoMatch {
    pub fn new(target: u8) -> Self {
        DominoMatch {
            target: target.max(1),
            scores: [0, 0],
            rounds: Vec::new(),
            next_opening: Opening::HighestDouble,
        }
    }

    pub fn scores(&self) -> [u8; 2] {
        self.scores
    }

    pub fn is_over(&self) -> bool {
        self.scores.iter().any(|score| *score >= self.target)
    }

    /// Plays one round within the match, updating scores and the opening
    /// rule carry-over. Re-deals on `NoDoubleDealt`.
    pub fn play_round(&mut self, strategies: &mut [&mut dyn Strategy; 4]) -> Result<&RoundSummary> {
        let mut round = loop {
            let deal = deal_hands();
            match Round::new(deal.hands, self.next_opening) {
                Ok(round) => break round,
                Err(DominoError::NoDoubleDealt) => continue,
                Err(other) => return Err(other),
            }
        };

        let outcome = round.run(strategies, self.scores, self.target)?;
        if let Some(winner) = outcome.winner {
            self.scores[winner.team().index()] += outcome.points;
            self.next_opening = Opening::Winner(winner);
            info!(
                "round won by {winner} ({:?}) for {} point(s); score {:?}",
                outcome.ending, outcome.points, self.scores
            );
        } else {
            self.next_opening = Opening::HighestDouble;
            info!("round locked with a tie; no points awarded");
        }
        for seat in SEATS {
            strategies[seat.index()].notify_result(seat, outcome.winner);
        }

        self.rounds.push(round.into_summary(&outcome));
        Ok(self.rounds.last().unwrap_or_else(|| unreachable!()))
    }

    /// Runs rounds until a team reaches the target.
    pub fn play(mut self, strategies: &mut [&mut dyn Strategy; 4]) -> Result<MatchSummary> {
        while !self.is_over() {
            self.play_round(strategies)?;
        }
        let winner = if self.scores[Team::Dupla1.index()] >= self.target {
            Team::Dupla1
        } else {
            Team::Dupla2
        };
        info!("match over: {winner} wins at {:?}", self.scores);
        Ok(MatchSummary {
            winner,
            scores: self.scores,
            rounds: self.rounds,
        })
    }
}

/// One standalone round with a fresh deal, for fitness evaluation by the
/// external GA loop. Strategies receive their terminal notification.
pub fn simulate_round(strategies: &mut [&mut dyn Strategy; 4]) -> Result<RoundSummary> {
    let mut round = loop {
        let deal = deal_hands();
        match Round::new(deal.hands, Opening::HighestDouble) {
            Ok(round) => break round,
            Err(DominoError::NoDoubleDealt) => continue,
            Err(other) => return Err(other),
        }
    };
    let outcome = round.run(strategies, [0, 0], DEFAULT_TARGET)?;
    for seat in SEATS {
        strategies[seat.index()].notify_result(seat, outcome.winner);
    }
    Ok(round.into_summary(&outcome))
}

/// One full match to `target` points; the GA's fitness is the returned
/// winning team aggregated over many calls.
pub fn simulate_match(
    strategies: &mut [&mut dyn Strategy; 4],
    target: u8,
) -> Result<MatchSummary> {
    DominoMatch::new(target).play(strategies)
}
