use crate::{game_state::LocalGameState, player::SeatIndex};

/// Fire-and-forget notifications towards whatever draws the table.
pub trait Presentation: Send + Sync {
    fn render(&self, state: &LocalGameState);
    fn show_arrival_effect(&self, seat: SeatIndex);
    fn show_play_effect(&self, seat: SeatIndex, card_image: &str);
    fn set_discard_top(&self, card_image: &str);
    fn set_message(&self, text: &str);
    fn set_action_affordance(&self, enabled: bool);
}
