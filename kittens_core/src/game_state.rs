use std::collections::HashMap;

use itertools::Itertools;
use log::warn;

use crate::{
    card::Card,
    error::ClientError,
    events::{PlayerSnapshot, WireSeat},
    player::{Hand, Player, SeatIndex},
};

/// The client's mirror of the server's game. Seat order is fixed when the
/// state is built and the name lookup is built with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalGameState {
    players: Vec<Player>,
    current_player: Option<SeatIndex>,
    discard_top: Option<Card>,
    seats: HashMap<String, SeatIndex>,
}

impl LocalGameState {
    pub fn new(players: Vec<Player>, current_player: WireSeat) -> Result<Self, ClientError> {
        if players.is_empty() {
            return Err(ClientError::NoPlayers);
        }
        let mut seats = HashMap::with_capacity(players.len());
        for (index, player) in players.iter().enumerate() {
            if seats.insert(player.name().to_string(), index).is_some() {
                return Err(ClientError::DuplicateSeatName(player.name().to_string()));
            }
        }
        let mut state = LocalGameState {
            players,
            current_player: None,
            discard_top: None,
            seats,
        };
        state.set_current_player(current_player);
        Ok(state)
    }

    pub fn from_snapshot(
        snapshot: Vec<PlayerSnapshot>,
        current_player: WireSeat,
    ) -> Result<Self, ClientError> {
        LocalGameState::new(
            snapshot.into_iter().map(Player::from).collect(),
            current_player,
        )
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn current_player(&self) -> Option<SeatIndex> {
        self.current_player
    }

    pub fn current(&self) -> Option<&Player> {
        self.current_player.and_then(|seat| self.players.get(seat))
    }

    pub fn discard_top(&self) -> Option<&Card> {
        self.discard_top.as_ref()
    }

    pub fn resolve_seat(&self, name: &str) -> Option<SeatIndex> {
        self.seats.get(name).copied()
    }

    pub fn seat_from_wire(&self, seat: WireSeat) -> Option<SeatIndex> {
        usize::try_from(seat)
            .ok()
            .filter(|&index| index < self.players.len())
    }

    /// True iff the turn pointer names a living human seat.
    pub fn current_seat_may_act(&self) -> bool {
        self.current()
            .map(|p| p.is_human() && p.is_alive())
            .unwrap_or(false)
    }

    pub fn alive_players(&self) -> Vec<SeatIndex> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_alive())
            .map(|(i, _)| i)
            .collect_vec()
    }

    pub fn is_over(&self) -> bool {
        !self.players.is_empty() && self.current_player.is_none()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.alive_players().as_slice() {
            [only] if self.players.len() > 1 => self.players.get(*only),
            _ => None,
        }
    }

    pub fn apply_card_arrival(&mut self, seat: SeatIndex, card: Option<Card>) {
        let Some(player) = self.players.get_mut(seat) else {
            return;
        };
        match (player.hand_mut(), card) {
            (Hand::Visible(cards), Some(card)) => cards.push(card),
            (Hand::Visible(_), None) => {}
            (Hand::Hidden { hand_length }, _) => *hand_length += 1,
        }
    }

    /// Human hands are kept by the dispatcher, so only hidden counts change.
    pub fn apply_card_departure(&mut self, seat: SeatIndex) {
        if let Some(Hand::Hidden { hand_length }) = self.players.get_mut(seat).map(Player::hand_mut)
        {
            *hand_length = hand_length.saturating_sub(1);
        }
    }

    pub fn set_current_player(&mut self, seat: WireSeat) {
        let resolved = self.seat_from_wire(seat);
        if resolved.is_none() && seat >= 0 {
            warn!(
                "turn handed to unknown seat {}, treating as no current player",
                seat
            );
        }
        self.current_player = resolved;
    }

    pub fn mark_dead(&mut self, seat: WireSeat) -> bool {
        match self.seat_from_wire(seat) {
            Some(index) => {
                self.players[index].mark_dead();
                true
            }
            None => {
                warn!("ignoring elimination of unknown seat {}", seat);
                false
            }
        }
    }

    pub fn set_discard_top(&mut self, card: Card) {
        self.discard_top = Some(card);
    }

    pub fn take_from_hand(&mut self, seat: SeatIndex, index: usize) -> Option<Card> {
        match self.players.get_mut(seat).map(Player::hand_mut) {
            Some(Hand::Visible(cards)) if index < cards.len() => Some(cards.remove(index)),
            _ => None,
        }
    }

    pub fn return_to_hand(&mut self, seat: SeatIndex, index: usize, card: Card) {
        if let Some(Hand::Visible(cards)) = self.players.get_mut(seat).map(Player::hand_mut) {
            let index = index.min(cards.len());
            cards.insert(index, card);
        }
    }
}
