use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

/// A card as the server describes it. The image is an opaque asset reference,
/// absent when the server only reveals a card's name (AI draws).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Card {
    pub fn new(name: &str, image: &str) -> Self {
        Card {
            name: name.to_string(),
            image: Some(image.to_string()),
        }
    }

    pub fn unrevealed(name: &str) -> Self {
        Card {
            name: name.to_string(),
            image: None,
        }
    }

    pub fn kind(&self) -> Option<CardKind> {
        CardKind::from_str(&self.name).ok()
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Display, EnumIter, EnumString, EnumMessage)]
pub enum CardKind {
    #[strum(
        to_string = "Defuse",
        message = "Keep it safe. When you draw an Exploding Kitten the Defuse is spent and the kitten goes back into the deck."
    )]
    Defuse,
    #[strum(
        to_string = "Exploding Kitten",
        message = "Drawing this without a Defuse in hand means you explode and drop out of the game."
    )]
    ExplodingKitten,
    #[strum(
        to_string = "Attack",
        message = "End your turn without drawing and make the next player take the pressure."
    )]
    Attack,
    #[strum(
        to_string = "Skip",
        message = "End your turn immediately without drawing a card."
    )]
    Skip,
    #[strum(
        to_string = "Favor",
        message = "Ask another player for a card of their choice."
    )]
    Favor,
}

impl CardKind {
    pub fn rules() -> String {
        CardKind::iter().map(|c| c.rule()).join("\n")
    }

    pub fn rule(&self) -> String {
        format!("{}: {}", self, self.get_message().unwrap_or("No rule"))
    }

    pub fn is_playable(&self) -> bool {
        !matches!(self, CardKind::Defuse | CardKind::ExplodingKitten)
    }
}
