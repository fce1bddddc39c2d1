use crate::game::board::Board;
use crate::game::hand::Hand;
use crate::game::history::{RoundEnding, RoundSummary, TurnEvent};
use crate::game::player::{Seat, SEATS};
use crate::game::tile::Tile;
use crate::scoring::batida::{classify_batida, lock_winner};
use crate::strategy::{Strategy, TurnView};
use crate::{DominoError, Result};
use log::debug;

/// Who opens the round. `HighestDouble` derives the opener from the hands and
/// forces that double as the first move; `Winner` seats the previous round's
/// winner, who chooses freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opening {
    HighestDouble,
    Winner(Seat),
}

/// Terminal result of one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    pub winner: Option<Seat>,
    pub points: u8,
    pub ending: RoundEnding,
}

/// One round from deal to batida or lock: a board, the four hands, the turn
/// pointer and the pass bookkeeping. Created fresh per round and summarized
/// into the match when it ends.
#[derive(Debug)]
pub struct Round {
    hands: [Hand; 4],
    board: Board,
    current: Seat,
    forced_opening: Option<Tile>,
    consecutive_passes: u8,
    pass_counts: [u8; 4],
    known_absent: [[bool; 7]; 4],
    history: Vec<TurnEvent>,
    next_order: u32,
}

impl Round {
    pub fn new(hands: [Hand; 4], opening: Opening) -> Result<Round> {
        let (current, forced_opening) = match opening {
            Opening::HighestDouble => {
                let (seat, double) = highest_double_holder(&hands)?;
                (seat, Some(double))
            }
            Opening::Winner(seat) => (seat, None),
        };
        Ok(Round {
            hands,
            board: Board::new(),
            current,
            forced_opening,
            consecutive_passes: 0,
            pass_counts: [0; 4],
            known_absent: [[false; 7]; 4],
            history: Vec::new(),
            next_order: 1,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hands(&self) -> &[Hand; 4] {
        &self.hands
    }

    pub fn history(&self) -> &[TurnEvent] {
        &self.history
    }

    pub fn pass_counts(&self) -> &[u8; 4] {
        &self.pass_counts
    }

    /// Drives the round to completion, querying each seat's strategy in turn.
    /// `scores` and `target` are the surrounding match context exposed to the
    /// strategies; a fresh standalone round passes `[0, 0]` and the default
    /// target.
    pub fn run(
        &mut self,
        strategies: &mut [&mut dyn Strategy; 4],
        scores: [u8; 2],
        target: u8,
    ) -> Result<RoundOutcome> {
        loop {
            let seat = self.current;
            let ends = self.board.open_ends();
            let legal = self.hands[seat.index()].legal_moves(ends);

            if legal.is_empty() {
                if let Some(outcome) = self.pass_turn(seat, ends)? {
                    return Ok(outcome);
                }
            } else {
                let tile = match self.forced_opening.take() {
                    Some(double) => double,
                    None => {
                        let view = TurnView {
                            seat,
                            board: &self.board,
                            hands: &self.hands,
                            pass_counts: &self.pass_counts,
                            known_absent: &self.known_absent,
                            scores,
                            target,
                        };
                        let chosen = strategies[seat.index()].choose_tile(&view, &legal)?;
                        if !legal.contains(&chosen) && !legal.contains(&chosen.inverted()) {
                            return Err(DominoError::InvalidStrategyOutput { seat, tile: chosen });
                        }
                        chosen
                    }
                };
                if let Some(outcome) = self.play_turn(seat, tile)? {
                    return Ok(outcome);
                }
            }

            self.current = seat.next();
        }
    }

    fn play_turn(&mut self, seat: Seat, tile: Tile) -> Result<Option<RoundOutcome>> {
        self.hands[seat.index()].remove(tile);
        let side = self.board.play(tile)?;
        self.consecutive_passes = 0;

        let finishes = self.hands[seat.index()].is_empty();
        self.history
            .push(TurnEvent::play(self.next_order, seat, tile, side, finishes));
        self.next_order += 1;
        debug!("{seat} plays {tile} on {side:?}");

        if !finishes {
            return Ok(None);
        }
        // Classification looks at the ends as they stand after the play.
        let ends = self.board.open_ends().unwrap_or((tile.0, tile.1));
        let kind = classify_batida(tile, ends);
        debug!("{seat} wins by {kind:?} for {} points", kind.points());
        Ok(Some(RoundOutcome {
            winner: Some(seat),
            points: kind.points(),
            ending: RoundEnding::Batida(kind),
        }))
    }

    fn pass_turn(&mut self, seat: Seat, ends: Option<(u8, u8)>) -> Result<Option<RoundOutcome>> {
        // A pass proves the player holds neither open end value.
        if let Some((left, right)) = ends {
            self.known_absent[seat.index()][left as usize] = true;
            self.known_absent[seat.index()][right as usize] = true;
        }
        self.history.push(TurnEvent::pass(self.next_order, seat));
        self.next_order += 1;
        self.pass_counts[seat.index()] += 1;
        self.consecutive_passes += 1;
        debug!("{seat} passes ({} consecutive)", self.consecutive_passes);

        if self.consecutive_passes < 4 {
            return Ok(None);
        }
        let (winner, points) = match lock_winner(&self.hands) {
            Some((seat, points)) => (Some(seat), points),
            None => (None, 0),
        };
        debug!("round locked; winner {winner:?} for {points} point(s)");
        Ok(Some(RoundOutcome {
            winner,
            points,
            ending: RoundEnding::Travamento,
        }))
    }

    /// Folds the terminal outcome and the move history into the serializable
    /// summary that crosses the engine boundary.
    pub fn into_summary(self, outcome: &RoundOutcome) -> RoundSummary {
        RoundSummary {
            winner: outcome.winner,
            points: outcome.points,
            ending: outcome.ending,
            history: self.history,
        }
    }
}

/// The seat holding the highest double, with that double. `NoDoubleDealt`
/// when no hand has any double; callers recover by re-dealing.
pub fn highest_double_holder(hands: &[Hand; 4]) -> Result<(Seat, Tile)> {
    SEATS
        .iter()
        .filter_map(|seat| {
            hands[seat.index()]
                .highest_double()
                .map(|double| (*seat, double))
        })
        .max_by_key(|(_, double)| double.0)
        .ok_or(DominoError::NoDoubleDealt)
}
