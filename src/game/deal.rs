use crate::game::hand::Hand;
use crate::game::tile::{full_set, Tile};
use rand::seq::SliceRandom;

pub const HAND_SIZE: usize = 6;

/// A fresh shuffle of the double-six set: four hands of six tiles and the
/// four pieces permanently set aside for the round (no boneyard — they never
/// enter play).
#[derive(Debug, Clone)]
pub struct Deal {
    pub hands: [Hand; 4],
    pub set_aside: Vec<Tile>,
}

/// Shuffles the 28 tiles and deals 6 to each seat. Hands are sorted
/// ascending so that "first legal move" and tie-breaks are reproducible for
/// a given deal.
pub fn deal_hands() -> Deal {
    let mut tiles = full_set();
    let mut rng = rand::rng();
    tiles.shuffle(&mut rng);

    let mut hands = Vec::with_capacity(4);
    for chunk in tiles.chunks(HAND_SIZE).take(4) {
        let mut hand_tiles = chunk.to_vec();
        hand_tiles.sort_by_key(|tile| (tile.0, tile.1));
        hands.push(Hand::new(hand_tiles));
    }
    let set_aside = tiles[4 * HAND_SIZE..].to_vec();

    let hands: [Hand; 4] = hands.try_into().unwrap_or_else(|_| unreachable!());
    Deal { hands, set_aside }
}
