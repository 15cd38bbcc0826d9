use crate::{card::Card, events::PlayerSnapshot};

pub type SeatIndex = usize;

/// What the client knows about a seat's hand. Humans see their cards, for
/// automated seats only the count is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hand {
    Visible(Vec<Card>),
    Hidden { hand_length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    alive: bool,
    hand: Hand,
}

impl Player {
    pub fn human(name: &str, cards: Vec<Card>) -> Self {
        Player {
            name: name.to_string(),
            alive: true,
            hand: Hand::Visible(cards),
        }
    }

    pub fn automated(name: &str, hand_length: usize) -> Self {
        Player {
            name: name.to_string(),
            alive: true,
            hand: Hand::Hidden { hand_length },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_human(&self) -> bool {
        matches!(self.hand, Hand::Visible(_))
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn cards(&self) -> &[Card] {
        match &self.hand {
            Hand::Visible(cards) => cards,
            Hand::Hidden { .. } => &[],
        }
    }

    pub fn card_count(&self) -> usize {
        match &self.hand {
            Hand::Visible(cards) => cards.len(),
            Hand::Hidden { hand_length } => *hand_length,
        }
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn mark_dead(&mut self) {
        self.alive = false;
    }
}

impl From<PlayerSnapshot> for Player {
    fn from(snapshot: PlayerSnapshot) -> Self {
        let hand = if snapshot.is_human {
            Hand::Visible(snapshot.hand)
        } else {
            Hand::Hidden {
                hand_length: snapshot.hand_length,
            }
        };
        Player {
            name: snapshot.name,
            alive: snapshot.is_alive,
            hand,
        }
    }
}
