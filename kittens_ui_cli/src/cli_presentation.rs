use itertools::Itertools;
use kittens_core::{
    game_state::LocalGameState,
    player::{Hand, SeatIndex},
    presentation::Presentation,
};
use parking_lot::Mutex;

/// Prints the table to stdout.
#[derive(Default)]
pub struct CliPresentation {
    names: Mutex<Vec<String>>,
}

impl CliPresentation {
    pub fn new() -> Self {
        CliPresentation::default()
    }

    fn seat_name(&self, seat: SeatIndex) -> String {
        self.names
            .lock()
            .get(seat)
            .cloned()
            .unwrap_or_else(|| format!("seat {}", seat))
    }

    fn play_line(&self, seat: SeatIndex) -> String {
        format!("~ Play: {} lays down a card", self.seat_name(seat))
    }
}

pub fn format_table(state: &LocalGameState) -> Vec<String> {
    let mut lines = vec![];
    for (seat, player) in state.players().iter().enumerate() {
        let marker = if state.current_player() == Some(seat) && player.is_alive() {
            "*"
        } else {
            " "
        };
        let status = if player.is_alive() { "" } else { " (Dead)" };
        let hand = match player.hand() {
            Hand::Visible(cards) => cards
                .iter()
                .enumerate()
                .map(|(i, c)| format!("[{}] {}", i, c.name))
                .join(", "),
            Hand::Hidden { hand_length } => format!("{} cards", hand_length),
        };
        lines.push(format!("{} {}{}: {}", marker, player.name(), status, hand));
    }
    if let Some(card) = state.discard_top() {
        lines.push(format!("  Discard pile: {}", card.name));
    }
    lines
}

impl Presentation for CliPresentation {
    fn render(&self, state: &LocalGameState) {
        *self.names.lock() = state
            .players()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        println!("================================================");
        for line in format_table(state) {
            println!("{}", line);
        }
    }

    fn show_arrival_effect(&self, seat: SeatIndex) {
        println!("~ Draw: a card flies to {}", self.seat_name(seat));
    }

    fn show_play_effect(&self, seat: SeatIndex, _card_image: &str) {
        println!("{}", self.play_line(seat));
    }

    // the table lists the discard pile by card name
    fn set_discard_top(&self, _card_image: &str) {}

    fn set_message(&self, text: &str) {
        println!("~ {}", text);
    }

    fn set_action_affordance(&self, enabled: bool) {
        if enabled {
            println!("~ Your turn.");
        }
    }
}

#[cfg(test)]
mod tests {
    use kittens_core::{card::Card, game_state::LocalGameState, player::Player};

    use super::{format_table, CliPresentation};
    use kittens_core::presentation::Presentation;

    fn table() -> LocalGameState {
        let mut state = LocalGameState::new(
            vec![
                Player::human(
                    "Alice",
                    vec![Card::new("Skip", "s.png"), Card::new("Favor", "f.png")],
                ),
                Player::automated("AI", 3),
            ],
            0,
        )
        .unwrap();
        state.set_discard_top(Card::new("Attack", "a.png"));
        state
    }

    #[test]
    fn format_table_should_mark_current_and_list_cards() {
        assert_eq!(
            format_table(&table()),
            vec![
                "* Alice: [0] Skip, [1] Favor",
                "  AI: 3 cards",
                "  Discard pile: Attack",
            ]
        );
    }

    #[test]
    fn format_table_should_tag_dead_players() {
        let mut state = table();
        state.mark_dead(1);

        assert_eq!(format_table(&state)[1], "  AI (Dead): 3 cards");
    }

    #[test]
    fn seat_name_should_come_from_last_render() {
        let presentation = CliPresentation::new();
        assert_eq!(presentation.seat_name(1), "seat 1");

        presentation.render(&table());

        assert_eq!(presentation.seat_name(1), "AI");
    }

    #[test]
    fn play_line_should_name_the_seat_without_asset_path() {
        let presentation = CliPresentation::new();
        presentation.render(&table());

        assert_eq!(presentation.play_line(1), "~ Play: AI lays down a card");
    }
}
