use crate::game::tile::{full_set, Tile};
use crate::scoring::batida::classify_batida;
use crate::strategy::{Strategy, TurnView};
use crate::{DominoError, Result};

pub const N_WEIGHTS: usize = 8;

/// The 8 weights evolved by the external genetic-algorithm collaborator, one
/// per feature of [`WeightedHeuristicStrategy`]:
///
/// - `w0` opponents able to play right after this move (0..=2)
/// - `w1` partner able to play right after this move (0/1)
/// - `w2` unseen tiles that would fit the projected ends
/// - `w3` partner tiles that would fit the projected ends
/// - `w4` own remaining tiles that would fit the projected ends
/// - `w5` pip sum of the candidate (shedding heavy tiles)
/// - `w6` immediate batida value of the candidate (4/3/2/1, 0 if not final)
/// - `w7` opposing team is one point from the target (0/1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeights(pub [f64; N_WEIGHTS]);

impl Default for HeuristicWeights {
    fn default() -> Self {
        // Neutral hand-tuned baseline: shed pips, grab a finishing move.
        HeuristicWeights([-1.0, 1.0, -0.5, 0.5, 1.0, 0.5, 10.0, -2.0])
    }
}

/// Scores every legal move with a linear combination of 8 features and plays
/// the argmax. Ties keep the earliest candidate in hand order, so a given
/// deal and weight vector always produce the same move.
#[derive(Debug, Clone, Default)]
pub struct WeightedHeuristicStrategy {
    pub weights: HeuristicWeights,
}

impl WeightedHeuristicStrategy {
    pub fn new(weights: HeuristicWeights) -> Self {
        WeightedHeuristicStrategy { weights }
    }

    /// The raw feature vector for one candidate, all derived from a one-ply
    /// `project_ends` lookahead instead of cloning the board.
    pub fn features(view: &TurnView<'_>, tile: Tile) -> [f64; N_WEIGHTS] {
        let side = match view.board.placement_side(tile) {
            Some(side) => side,
            // Not reachable for a tile out of legal_moves; score it inert.
            None => return [0.0; N_WEIGHTS],
        };
        let ends = view.board.project_ends(tile, side);
        let me = view.seat;
        let partner = me.partner();

        let opp_can = [me.next(), partner.next()]
            .into_iter()
            .filter(|opp| view.hands[opp.index()].has_move(Some(ends)))
            .count() as f64;
        let partner_can = view.hands[partner.index()].has_move(Some(ends)) as u8 as f64;
        let unseen = unseen_fitting(view, tile, ends) as f64;
        let partner_fits = view.hands[partner.index()].count_fitting(ends, None) as f64;
        let own_future = view.hand().count_fitting(ends, Some(tile)) as f64;
        let pip_sum = tile.pip_sum() as f64;
        let finish_value = if view.hand().len() == 1 {
            classify_batida(tile, ends).points() as f64
        } else {
            0.0
        };
        let enemy_close =
            (view.scores[me.team().opponent().index()] + 1 >= view.target) as u8 as f64;

        [
            opp_can,
            partner_can,
            unseen,
            partner_fits,
            own_future,
            pip_sum,
            finish_value,
            enemy_close,
        ]
    }

    fn score(&self, view: &TurnView<'_>, tile: Tile) -> f64 {
        Self::features(view, tile)
            .iter()
            .zip(self.weights.0.iter())
            .map(|(feature, weight)| feature * weight)
            .sum()
    }
}

/// Tiles the acting player cannot see (not on the board, not in their own
/// hand, not the candidate itself) that would fit the projected ends.
fn unseen_fitting(view: &TurnView<'_>, candidate: Tile, ends: (u8, u8)) -> usize {
    full_set()
        .into_iter()
        .filter(|tile| tile.fits(ends.0) || tile.fits(ends.1))
        .filter(|tile| *tile != candidate && *tile != candidate.inverted())
        .filter(|tile| !view.board.tiles().any(|b| b == *tile || b == tile.inverted()))
        .filter(|tile| !view.hand().contains(*tile) && !view.hand().contains(tile.inverted()))
        .count()
}

impl Strategy for WeightedHeuristicStrategy {
    fn choose_tile(&mut self, view: &TurnView<'_>, legal: &[Tile]) -> Result<Tile> {
        let first = *legal.first().ok_or(DominoError::NoLegalMove(view.seat))?;
        let mut best = first;
        let mut best_score = self.score(view, first);
        for &tile in &legal[1..] {
            let score = self.score(view, tile);
            if score > best_score {
                best = tile;
                best_score = score;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Board;
    use crate::game::hand::Hand;
    use crate::game::player::Seat;

    struct Fixture {
        board: Board,
        hands: [Hand; 4],
        passes: [u8; 4],
        absent: [[bool; 7]; 4],
    }

    impl Fixture {
        fn new() -> Self {
            let mut board = Board::new();
            board.play(Tile(6, 6)).unwrap();
            board.play(Tile(6, 2)).unwrap();
            Fixture {
                board,
                hands: [
                    Hand::new(vec![Tile(2, 3), Tile(5, 6)]),
                    Hand::new(vec![Tile(0, 2), Tile(1, 1)]),
                    Hand::new(vec![Tile(3, 6), Tile(4, 4)]),
                    Hand::new(vec![Tile(0, 0), Tile(5, 5)]),
                ],
                passes: [0; 4],
                absent: [[false; 7]; 4],
            }
        }

        fn view(&self, scores: [u8; 2], target: u8) -> TurnView<'_> {
            TurnView {
                seat: Seat::J1,
                board: &self.board,
                hands: &self.hands,
                pass_counts: &self.passes,
                known_absent: &self.absent,
                scores,
                target,
            }
        }
    }

    #[test]
    fn test_features_are_finite_and_bounded() {
        let fixture = Fixture::new();
        let view = fixture.view([0, 0], 6);
        for tile in view.legal_moves() {
            let features = WeightedHeuristicStrategy::features(&view, tile);
            for value in features {
                assert!(value.is_finite());
            }
            assert!(features[0] <= 2.0, "At most two opponents can be unblocked.");
            assert!(features[1] <= 1.0);
            assert!(features[5] <= 12.0);
        }
    }

    #[test]
    fn test_enemy_close_feature_tracks_scores() {
        let fixture = Fixture::new();
        let tile = Tile(2, 3);
        let far = fixture.view([0, 0], 6);
        assert_eq!(WeightedHeuristicStrategy::features(&far, tile)[7], 0.0);
        let close = fixture.view([0, 5], 6);
        assert_eq!(
            WeightedHeuristicStrategy::features(&close, tile)[7],
            1.0,
            "Dupla_2 at 5 of 6 points should trip the enemy-close feature."
        );
    }

    #[test]
    fn test_finish_feature_scores_the_batida_value() {
        let mut fixture = Fixture::new();
        // Down to the last tile: playing it is a batida.
        fixture.hands[0] = Hand::new(vec![Tile(2, 3)]);
        let view = fixture.view([0, 0], 6);
        let features = WeightedHeuristicStrategy::features(&view, Tile(2, 3));
        // Ends become (3, 6): a simples finish.
        assert_eq!(features[6], 1.0);
    }

    #[test]
    fn test_argmax_is_stable_under_ties() {
        let fixture = Fixture::new();
        let view = fixture.view([0, 0], 6);
        let legal = view.legal_moves();
        let mut strategy = WeightedHeuristicStrategy::new(HeuristicWeights([0.0; N_WEIGHTS]));
        let chosen = strategy.choose_tile(&view, &legal).unwrap();
        assert_eq!(
            chosen, legal[0],
            "With all-zero weights every move ties; the first must win."
        );
    }

    #[test]
    fn test_heavy_finish_weight_prefers_the_winning_tile() {
        let fixture = Fixture::new();
        let mut single = fixture;
        single.hands[0] = Hand::new(vec![Tile(2, 3)]);
        let view = single.view([0, 0], 6);
        let legal = view.legal_moves();
        let mut strategy = WeightedHeuristicStrategy::default();
        let chosen = strategy.choose_tile(&view, &legal).unwrap();
        assert_eq!(chosen, Tile(2, 3));
    }
}
