use crate::game::board::Side;
use crate::game::player::{Seat, Team};
use crate::game::tile::Tile;
use crate::scoring::batida::BatidaKind;
use serde::{Deserialize, Serialize};

/// What a turn produced: a placed tile, the round-winning tile, or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnKind {
    Play,
    Batida,
    Pass,
}

/// One serializable history entry. This is the only per-turn state that
/// crosses the engine boundary towards a front end or log consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub order: u32,
    pub player: Seat,
    pub kind: TurnKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile: Option<Tile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

impl TurnEvent {
    pub fn play(order: u32, player: Seat, tile: Tile, side: Side, finishes: bool) -> Self {
        TurnEvent {
            order,
            player,
            kind: if finishes { TurnKind::Batida } else { TurnKind::Play },
            tile: Some(tile),
            side: Some(side),
        }
    }

    pub fn pass(order: u32, player: Seat) -> Self {
        TurnEvent {
            order,
            player,
            kind: TurnKind::Pass,
            tile: None,
            side: None,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundEnding {
    Batida(BatidaKind),
    Travamento,
}

/// Terminal description of one round: winner (none on a tied lock), the
/// points their team earned and the full move history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub winner: Option<Seat>,
    pub points: u8,
    pub ending: RoundEnding,
    pub history: Vec<TurnEvent>,
}

/// Terminal description of one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: Team,
    pub scores: [u8; 2],
    pub rounds: Vec<RoundSummary>,
}
