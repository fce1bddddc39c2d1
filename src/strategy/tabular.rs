use crate::game::player::Seat;
use crate::game::tile::Tile;
use crate::strategy::{Strategy, TurnView};
use crate::{DominoError, Result};
use rand::RngExt;
use std::collections::HashMap;

/// State as the learner sees it: the open ends plus the sorted own hand.
type StateKey = (Option<(u8, u8)>, Vec<Tile>);

/// Epsilon-greedy tabular Q-learner. Each (state, tile) pair carries a value
/// updated towards the terminal reward of the round in which the pair was
/// last chosen: `q += alpha * (reward - q)` with reward +1 for winning the
/// round, -1 when someone else won, 0 on a scoreless lock.
///
/// The table is plain in-memory data; persistence belongs to the embedding
/// application, which can drain and restore it through [`q_table`] and
/// [`with_q_table`].
///
/// [`q_table`]: TabularLearningStrategy::q_table
/// [`with_q_table`]: TabularLearningStrategy::with_q_table
#[derive(Debug, Clone)]
pub struct TabularLearningStrategy {
    alpha: f64,
    epsilon: f64,
    q: HashMap<(StateKey, Tile), f64>,
    last: Option<(StateKey, Tile)>,
}

impl Default for TabularLearningStrategy {
    fn default() -> Self {
        Self::new(0.1, 0.1)
    }
}

impl TabularLearningStrategy {
    pub fn new(alpha: f64, epsilon: f64) -> Self {
        TabularLearningStrategy {
            alpha,
            epsilon,
            q: HashMap::new(),
            last: None,
        }
    }

    /// Restores a previously exported table.
    pub fn with_q_table(alpha: f64, epsilon: f64, q: HashMap<(StateKey, Tile), f64>) -> Self {
        TabularLearningStrategy {
            alpha,
            epsilon,
            q,
            last: None,
        }
    }

    pub fn q_table(&self) -> &HashMap<(StateKey, Tile), f64> {
        &self.q
    }

    fn state_key(view: &TurnView<'_>) -> StateKey {
        let mut tiles = view.hand().tiles().to_vec();
        tiles.sort_by_key(|tile| (tile.0.min(tile.1), tile.0.max(tile.1)));
        (view.board.open_ends(), tiles)
    }

    fn value(&self, state: &StateKey, tile: Tile) -> f64 {
        self.q
            .get(&(state.clone(), tile))
            .copied()
            .unwrap_or_default()
    }
}

impl Strategy for TabularLearningStrategy {
    fn choose_tile(&mut self, view: &TurnView<'_>, legal: &[Tile]) -> Result<Tile> {
        if legal.is_empty() {
            return Err(DominoError::NoLegalMove(view.seat));
        }
        let state = Self::state_key(view);
        let mut rng = rand::rng();

        let chosen = if rng.random_range(0.0..1.0) < self.epsilon {
            legal[rng.random_range(0..legal.len())]
        } else {
            let values: Vec<f64> = legal.iter().map(|&tile| self.value(&state, tile)).collect();
            let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let candidates: Vec<Tile> = legal
                .iter()
                .zip(values.iter())
                .filter(|(_, value)| **value == best)
                .map(|(tile, _)| *tile)
                .collect();
            candidates[rng.random_range(0..candidates.len())]
        };

        self.last = Some((state, chosen));
        Ok(chosen)
    }

    fn notify_result(&mut self, seat: Seat, winner: Option<Seat>) {
        let Some(key) = self.last.take() else {
            return;
        };
        let reward = match winner {
            Some(w) if w == seat => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        };
        let entry = self.q.entry(key).or_insert(0.0);
        *entry += self.alpha * (reward - *entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Board;
    use crate::game::hand::Hand;

    struct Fixture {
        board: Board,
        hands: [Hand; 4],
        passes: [u8; 4],
        absent: [[bool; 7]; 4],
    }

    impl Fixture {
        fn new() -> Self {
            let mut board = Board::new();
            board.play(Tile(3, 3)).unwrap();
            Fixture {
                board,
                hands: [
                    Hand::new(vec![Tile(1, 3), Tile(3, 6)]),
                    Hand::new(vec![Tile(0, 0)]),
                    Hand::new(vec![Tile(2, 2)]),
                    Hand::new(vec![Tile(4, 5)]),
                ],
                passes: [0; 4],
                absent: [[false; 7]; 4],
            }
        }

        fn view(&self) -> TurnView<'_> {
            TurnView {
                seat: Seat::J1,
                board: &self.board,
                hands: &self.hands,
                pass_counts: &self.passes,
                known_absent: &self.absent,
                scores: [0, 0],
                target: 6,
            }
        }
    }

    #[test]
    fn test_greedy_choice_prefers_learned_value() {
        let fixture = Fixture::new();
        let view = fixture.view();
        let state = TabularLearningStrategy::state_key(&view);
        let mut q = HashMap::new();
        q.insert((state, Tile(3, 6)), 0.9);
        let mut strategy = TabularLearningStrategy::with_q_table(0.1, 0.0, q);
        let legal = view.legal_moves();
        for _ in 0..10 {
            let chosen = strategy.choose_tile(&view, &legal).unwrap();
            assert_eq!(chosen, Tile(3, 6), "With epsilon 0 the best Q value must win.");
        }
    }

    #[test]
    fn test_reward_update_moves_q_towards_result() {
        let fixture = Fixture::new();
        let view = fixture.view();
        let legal = view.legal_moves();
        let mut strategy = TabularLearningStrategy::new(0.5, 0.0);
        let chosen = strategy.choose_tile(&view, &legal).unwrap();

        strategy.notify_result(Seat::J1, Some(Seat::J1));
        let state = TabularLearningStrategy::state_key(&view);
        let value = strategy.q_table()[&(state, chosen)];
        assert_eq!(value, 0.5, "q should move alpha of the way towards +1.");
    }

    #[test]
    fn test_notify_without_pending_move_is_a_no_op() {
        let mut strategy = TabularLearningStrategy::default();
        strategy.notify_result(Seat::J1, Some(Seat::J2));
        assert!(strategy.q_table().is_empty());
    }

    #[test]
    fn test_losing_reward_is_negative_and_tie_is_zero() {
        let fixture = Fixture::new();
        let view = fixture.view();
        let legal = view.legal_moves();

        let mut loser = TabularLearningStrategy::new(1.0, 0.0);
        let chosen = loser.choose_tile(&view, &legal).unwrap();
        loser.notify_result(Seat::J1, Some(Seat::J2));
        let state = TabularLearningStrategy::state_key(&view);
        assert_eq!(loser.q_table()[&(state.clone(), chosen)], -1.0);

        let mut tied = TabularLearningStrategy::new(1.0, 0.0);
        let chosen = tied.choose_tile(&view, &legal).unwrap();
        tied.notify_result(Seat::J1, None);
        assert_eq!(tied.q_table()[&(state, chosen)], 0.0);
    }
}
