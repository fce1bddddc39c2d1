use crate::game::tile::Tile;
use crate::strategy::{Strategy, TurnView};
use crate::{DominoError, Result};

/// The naive reference player: always the first legal move, in hand order.
/// Deterministic for a given deal, which makes it the benchmark opponent for
/// tuning the other strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineStrategy;

impl Strategy for BaselineStrategy {
    fn choose_tile(&mut self, view: &TurnView<'_>, legal: &[Tile]) -> Result<Tile> {
        legal
            .first()
            .copied()
            .ok_or(DominoError::NoLegalMove(view.seat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Board;
    use crate::game::hand::Hand;
    use crate::game::player::Seat;

    fn view_fixture<'a>(
        board: &'a Board,
        hands: &'a [Hand; 4],
        pass_counts: &'a [u8; 4],
        known_absent: &'a [[bool; 7]; 4],
    ) -> TurnView<'a> {
        TurnView {
            seat: Seat::J1,
            board,
            hands,
            pass_counts,
            known_absent,
            scores: [0, 0],
            target: 6,
        }
    }

    #[test]
    fn test_picks_first_legal_move() {
        let mut board = Board::new();
        board.play(Tile(3, 3)).unwrap();
        let hands = [
            Hand::new(vec![Tile(0, 1), Tile(1, 3), Tile(3, 6)]),
            Hand::new(vec![]),
            Hand::new(vec![]),
            Hand::new(vec![]),
        ];
        let passes = [0; 4];
        let absent = [[false; 7]; 4];
        let view = view_fixture(&board, &hands, &passes, &absent);
        let legal = view.legal_moves();
        let chosen = BaselineStrategy.choose_tile(&view, &legal).unwrap();
        assert_eq!(chosen, Tile(1, 3), "Baseline must keep the hand order.");
    }

    #[test]
    fn test_empty_legal_set_is_a_contract_violation() {
        let board = Board::new();
        let hands = [
            Hand::new(vec![]),
            Hand::new(vec![]),
            Hand::new(vec![]),
            Hand::new(vec![]),
        ];
        let passes = [0; 4];
        let absent = [[false; 7]; 4];
        let view = view_fixture(&board, &hands, &passes, &absent);
        let err = BaselineStrategy.choose_tile(&view, &[]).unwrap_err();
        assert!(matches!(err, DominoError::NoLegalMove(Seat::J1)));
    }
}
