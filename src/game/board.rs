use crate::game::tile::Tile;
use crate::{DominoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Where a tile ended up when it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Initial,
    Left,
    Right,
}

/// The line of placed tiles plus its two open ends. Tiles are stored in line
/// order, each oriented so that neighbouring pips match; the ends stay
/// undefined until the opening tile is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: VecDeque<Tile>,
    ends: Option<(u8, u8)>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            tiles: VecDeque::new(),
            ends: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// The two open ends, `None` while the board is empty.
    pub fn open_ends(&self) -> Option<(u8, u8)> {
        self.ends
    }

    /// Places a tile without a declared side. The attachment precedence is
    /// fixed: left end first, first pip first. Returns which side the tile
    /// attached to, or `IllegalMove` if it fits neither end.
    pub fn play(&mut self, tile: Tile) -> Result<Side> {
        let (left, right) = match self.ends {
            None => {
                self.tiles.push_back(tile);
                self.ends = Some((tile.0, tile.1));
                return Ok(Side::Initial);
            }
            Some(ends) => ends,
        };

        if tile.0 == left {
            self.tiles.push_front(tile.inverted());
            self.ends = Some((tile.1, right));
            Ok(Side::Left)
        } else if tile.1 == left {
            self.tiles.push_front(tile);
            self.ends = Some((tile.0, right));
            Ok(Side::Left)
        } else if tile.0 == right {
            self.tiles.push_back(tile);
            self.ends = Some((left, tile.1));
            Ok(Side::Right)
        } else if tile.1 == right {
            self.tiles.push_back(tile.inverted());
            self.ends = Some((left, tile.0));
            Ok(Side::Right)
        } else {
            Err(DominoError::IllegalMove { tile, left, right })
        }
    }

    /// Places a tile on a declared side, overriding the precedence of
    /// [`Board::play`]. Declaring `Initial` on a non-empty board, or a side
    /// the tile does not fit, is an `IllegalMove`.
    pub fn play_on(&mut self, tile: Tile, side: Side) -> Result<Side> {
        let (left, right) = match self.ends {
            None => return self.play(tile),
            Some(ends) => ends,
        };
        let rejected = || DominoError::IllegalMove { tile, left, right };

        match side {
            Side::Initial => Err(rejected()),
            Side::Left => {
                let oriented = tile.oriented_to(left).ok_or_else(rejected)?;
                // oriented.0 touches the line; the free pip becomes the end.
                self.tiles.push_front(oriented.inverted());
                self.ends = Some((oriented.1, right));
                Ok(Side::Left)
            }
            Side::Right => {
                let oriented = tile.oriented_to(right).ok_or_else(rejected)?;
                self.tiles.push_back(oriented);
                self.ends = Some((left, oriented.1));
                Ok(Side::Right)
            }
        }
    }

    /// The side `play` would attach this tile to, without mutating anything.
    pub fn placement_side(&self, tile: Tile) -> Option<Side> {
        match self.ends {
            None => Some(Side::Initial),
            Some((left, right)) => {
                if tile.fits(left) {
                    Some(Side::Left)
                } else if tile.fits(right) {
                    Some(Side::Right)
                } else {
                    None
                }
            }
        }
    }

    /// The hypothetical open ends after playing `tile` on `side`. One-ply
    /// lookahead for heuristics; the board itself is untouched.
    pub fn project_ends(&self, tile: Tile, side: Side) -> (u8, u8) {
        match (side, self.ends) {
            (Side::Initial, _) | (_, None) => (tile.0, tile.1),
            (Side::Left, Some((left, right))) => {
                let new_left = if tile.1 == left { tile.0 } else { tile.1 };
                (new_left, right)
            }
            (Side::Right, Some((left, right))) => {
                let new_right = if tile.0 == right { tile.1 } else { tile.0 };
                (left, new_right)
            }
        }
    }

    /// For each pip value 0..=6, how many of its 7 carrying tiles are not on
    /// the board yet. Part of the strategy state snapshot.
    pub fn remaining_by_value(&self) -> [u8; 7] {
        let mut remaining = [7u8; 7];
        for tile in &self.tiles {
            remaining[tile.0 as usize] -= 1;
            if tile.1 != tile.0 {
                remaining[tile.1 as usize] -= 1;
            }
        }
        remaining
    }

    /// For each pip value 0..=6, how many carrying tiles were already played.
    pub fn played_by_value(&self) -> [u8; 7] {
        let mut played = [0u8; 7];
        for tile in &self.tiles {
            played[tile.0 as usize] += 1;
            if tile.1 != tile.0 {
                played[tile.1 as usize] += 1;
            }
        }
        played
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_play_sets_both_ends() {
        let mut board = Board::new();
        assert!(board.is_empty());
        let side = board.play(Tile(6, 6)).unwrap();
        assert_eq!(side, Side::Initial);
        assert_eq!(
            board.open_ends(),
            Some((6, 6)),
            "The opening double should expose its pip on both ends."
        );
    }

    #[test]
    fn test_play_precedence_prefers_left_end_first_pip_first() {
        let mut board = Board::new();
        board.play(Tile(6, 6)).unwrap();
        // Both ends are 6, so (6,2) lands on the left by precedence.
        let side = board.play(Tile(6, 2)).unwrap();
        assert_eq!(side, Side::Left);
        assert_eq!(board.open_ends(), Some((2, 6)));
        let side = board.play(Tile(5, 6)).unwrap();
        assert_eq!(side, Side::Right);
        assert_eq!(board.open_ends(), Some((2, 5)));
        let side = board.play(Tile(2, 4)).unwrap();
        assert_eq!(side, Side::Left);
        assert_eq!(board.open_ends(), Some((4, 5)));
    }

    #[test]
    fn test_play_on_declared_side() {
        let mut board = Board::new();
        assert_eq!(board.play_on(Tile(6, 6), Side::Right).unwrap(), Side::Initial);
        // Declared side overrides the left-first precedence.
        let side = board.play_on(Tile(6, 2), Side::Right).unwrap();
        assert_eq!(side, Side::Right);
        assert_eq!(board.open_ends(), Some((6, 2)));
        assert!(
            board.play_on(Tile(3, 4), Side::Left).is_err(),
            "Declaring a side the tile does not fit must be rejected."
        );
        assert!(board.play_on(Tile(0, 0), Side::Initial).is_err());
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut board = Board::new();
        board.play(Tile(6, 6)).unwrap();
        let err = board.play(Tile(0, 1)).unwrap_err();
        assert!(
            matches!(err, crate::DominoError::IllegalMove { .. }),
            "A tile fitting neither end must be rejected, got {err:?}."
        );
        assert_eq!(board.open_ends(), Some((6, 6)), "A rejected play must not mutate the board.");
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_project_ends_matches_real_play() {
        let mut board = Board::new();
        board.play(Tile(6, 6)).unwrap();
        board.play(Tile(6, 2)).unwrap();

        for tile in [Tile(2, 0), Tile(6, 3), Tile(2, 6)] {
            let side = board.placement_side(tile).expect("tile should fit");
            let projected = board.project_ends(tile, side);
            let mut replay = board.clone();
            replay.play(tile).unwrap();
            assert_eq!(
                Some(projected),
                replay.open_ends(),
                "project_ends must predict exactly what play produces for {tile}."
            );
        }
    }

    #[test]
    fn test_remaining_by_value_counts() {
        let mut board = Board::new();
        board.play(Tile(6, 6)).unwrap();
        board.play(Tile(6, 2)).unwrap();
        let remaining = board.remaining_by_value();
        assert_eq!(remaining[6], 5, "6-6 and 6-2 both carry a 6.");
        assert_eq!(remaining[2], 6);
        assert_eq!(remaining[0], 7);
        let played = board.played_by_value();
        assert_eq!(played[6], 2);
        assert_eq!(played[2], 1);
    }
}
