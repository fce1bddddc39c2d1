use crate::game::tile::Tile;
use serde::{Deserialize, Serialize};

/// The tiles a player still holds. A hand only ever shrinks after dealing
/// (there is no boneyard in this variant); an empty hand means the player
/// just won the round by batida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Hand { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// The tiles playable against the given open ends, in hand order.
    /// While the board is still empty every tile is playable.
    pub fn legal_moves(&self, ends: Option<(u8, u8)>) -> Vec<Tile> {
        match ends {
            None => self.tiles.clone(),
            Some((left, right)) => self
                .tiles
                .iter()
                .copied()
                .filter(|tile| tile.fits(left) || tile.fits(right))
                .collect(),
        }
    }

    pub fn has_move(&self, ends: Option<(u8, u8)>) -> bool {
        match ends {
            None => !self.tiles.is_empty(),
            Some((left, right)) => self
                .tiles
                .iter()
                .any(|tile| tile.fits(left) || tile.fits(right)),
        }
    }

    /// Removes one tile, accepting either pip order. Returns false if the
    /// hand does not hold the piece.
    pub fn remove(&mut self, tile: Tile) -> bool {
        if let Some(pos) = self
            .tiles
            .iter()
            .position(|t| *t == tile || *t == tile.inverted())
        {
            self.tiles.remove(pos);
            true
        } else {
            false
        }
    }

    /// Sum of all pips still held, used to resolve locked rounds.
    pub fn pip_total(&self) -> u32 {
        self.tiles.iter().map(|tile| tile.pip_sum() as u32).sum()
    }

    pub fn highest_double(&self) -> Option<Tile> {
        self.tiles
            .iter()
            .copied()
            .filter(Tile::is_double)
            .max_by_key(|tile| tile.0)
    }

    /// Number of held tiles (other than `except`) that fit either end.
    pub fn count_fitting(&self, ends: (u8, u8), except: Option<Tile>) -> usize {
        self.tiles
            .iter()
            .filter(|tile| Some(**tile) != except && (tile.fits(ends.0) || tile.fits(ends.1)))
            .count()
    }
}
