use serde::{Deserialize, Serialize};
use std::fmt;

/// One domino piece. The two pips are unordered as an identity (`Tile(2, 5)`
/// and `Tile(5, 2)` are the same piece) but the tuple order becomes meaningful
/// once the tile sits on the board, where `.0` faces outward.
#[derive(Debug, Clone, PartialEq, Copy, Hash, Eq, Serialize, Deserialize)]
pub struct Tile(pub u8, pub u8);

impl Tile {
    /// True if one of the pips equals `value`.
    pub fn fits(&self, value: u8) -> bool {
        self.0 == value || self.1 == value
    }

    pub fn is_double(&self) -> bool {
        self.0 == self.1
    }

    pub fn pip_sum(&self) -> u8 {
        self.0 + self.1
    }

    /// The same piece with the pips swapped.
    pub fn inverted(&self) -> Tile {
        Tile(self.1, self.0)
    }

    /// Reorients the tile so that `.0` is the pip matching `end_value`,
    /// or `None` if the tile does not fit that end.
    pub fn oriented_to(&self, end_value: u8) -> Option<Tile> {
        if self.0 == end_value {
            Some(*self)
        } else if self.1 == end_value {
            Some(self.inverted())
        } else {
            None
        }
    }

    /// The pip opposite to `value`, for a tile known to fit it.
    pub fn other_pip(&self, value: u8) -> Option<u8> {
        if self.0 == value {
            Some(self.1)
        } else if self.1 == value {
            Some(self.0)
        } else {
            None
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.0, self.1)
    }
}

/// The 28 tiles of a double-six set, in ascending `(a, b)` order with `a <= b`.
pub fn full_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(28);
    for a in 0u8..=6 {
        for b in a..=6 {
            tiles.push(Tile(a, b));
        }
    }
    tiles
}
