use crate::game::hand::Hand;
use crate::game::player::{Seat, SEATS};
use crate::game::tile::Tile;
use serde::{Deserialize, Serialize};

/// The four mutually exclusive ways to win a round by emptying the hand,
/// worth 1/2/3/4 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatidaKind {
    Simples,
    Carroca,
    LaELo,
    Cruzada,
}

impl BatidaKind {
    pub fn points(self) -> u8 {
        match self {
            BatidaKind::Simples => 1,
            BatidaKind::Carroca => 2,
            BatidaKind::LaELo => 3,
            BatidaKind::Cruzada => 4,
        }
    }
}

/// Classifies the winning tile against the open ends as they stand *after*
/// the tile was placed. The priority order makes the categories exclusive:
/// cruzada, then lá-e-lô, then carroça, then simples.
pub fn classify_batida(winning_tile: Tile, ends: (u8, u8)) -> BatidaKind {
    let (left, right) = ends;
    let fits_both = winning_tile.fits(left) && winning_tile.fits(right);

    if winning_tile.is_double() && fits_both {
        BatidaKind::Cruzada
    } else if !winning_tile.is_double() && fits_both && left != right {
        BatidaKind::LaELo
    } else if winning_tile.is_double() {
        BatidaKind::Carroca
    } else {
        BatidaKind::Simples
    }
}

/// Resolves a locked round: the strictly lowest pip sum wins 1 point for its
/// team; any tie for the lowest leaves the round scoreless.
pub fn lock_winner(hands: &[Hand; 4]) -> Option<(Seat, u8)> {
    let sums: Vec<u32> = hands.iter().map(Hand::pip_total).collect();
    let lowest = *sums.iter().min()?;
    let mut holders = sums.iter().enumerate().filter(|(_, sum)| **sum == lowest);
    let (index, _) = holders.next()?;
    if holders.next().is_some() {
        None
    } else {
        Some((SEATS[index], 1))
    }
}
