use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::card::Card;

/// Seat index as it travels on the wire. The server uses `-1` for "nobody".
pub type WireSeat = i64;

#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum MoveKind {
    Draw,
    AiDraw,
    Play,
    AiDefuse,
    AiExplode,
    Win,
    GameBroken,
    #[strum(default)]
    Other(String),
}

impl<'de> Deserialize<'de> for MoveKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(MoveKind::from_str(&raw).unwrap_or(MoveKind::Other(raw)))
    }
}

/// One event of a server batch. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Move {
    #[serde(default)]
    pub player: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<MoveKind>,
    #[serde(default)]
    pub card: Option<Card>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub new_current_player: Option<WireSeat>,
    #[serde(default)]
    pub dead_player_index: Option<WireSeat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub is_human: bool,
    #[serde(default = "alive_by_default")]
    pub is_alive: bool,
    #[serde(default)]
    pub hand: Vec<Card>,
    #[serde(default)]
    pub hand_length: usize,
}

fn alive_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StartGameReply {
    Started {
        players: Vec<PlayerSnapshot>,
        current_player: WireSeat,
        #[serde(default)]
        moves: Option<Vec<Move>>,
    },
    Rejected { error: String },
}

/// Reply to a draw or play request. A missing or null `moves` means the
/// action did not happen.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoveBatchReply {
    #[serde(default)]
    pub current_player: Option<WireSeat>,
    #[serde(default)]
    pub moves: Option<Vec<Move>>,
}

impl MoveBatchReply {
    pub fn applied(current_player: WireSeat, moves: Vec<Move>) -> Self {
        MoveBatchReply {
            current_player: Some(current_player),
            moves: Some(moves),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartGameRequest<'a> {
    pub players: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayCardRequest {
    pub card_index: usize,
}
