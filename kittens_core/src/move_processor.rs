use log::{debug, warn};
use parking_lot::Mutex;

use crate::{
    config::PacingConfig,
    events::{Move, MoveKind},
    game_state::LocalGameState,
    pacing::Pacer,
    player::SeatIndex,
    presentation::Presentation,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub unresolved: usize,
}

/// Applies one move and returns the seat it was resolved to.
///
/// A move whose player cannot be resolved skips its type-specific transition,
/// but its narration and the authoritative `new_current_player` and
/// `dead_player_index` fields still take effect.
pub fn apply_move<P>(state: &mut LocalGameState, mv: &Move, presentation: &P) -> Option<SeatIndex>
where
    P: Presentation + ?Sized,
{
    if let Some(message) = &mv.message {
        presentation.set_message(message);
    }

    let seat = mv
        .player
        .as_deref()
        .and_then(|name| state.resolve_seat(name));
    if seat.is_none() && mv.player.is_some() {
        warn!("move for unknown seat {:?} skipped", mv.player);
    }

    if let (Some(seat), Some(kind)) = (seat, &mv.kind) {
        match kind {
            MoveKind::Draw | MoveKind::AiDraw => {
                state.apply_card_arrival(seat, mv.card.clone());
                presentation.show_arrival_effect(seat);
            }
            MoveKind::Play => apply_play(state, seat, mv, presentation),
            _ => {}
        }
    }

    if let Some(next) = mv.new_current_player {
        state.set_current_player(next);
    }
    if let Some(dead) = mv.dead_player_index {
        state.mark_dead(dead);
    }

    seat
}

fn apply_play<P>(state: &mut LocalGameState, seat: SeatIndex, mv: &Move, presentation: &P)
where
    P: Presentation + ?Sized,
{
    let Some(card) = &mv.card else {
        return;
    };
    let Some(image) = &card.image else {
        return;
    };
    let Some(player) = state.player(seat) else {
        return;
    };
    let narration = format!("{} played {}", player.name(), card.name);

    // the human's own play was already removed from the hand locally
    if !player.is_human() {
        presentation.show_play_effect(seat, image);
    }
    state.set_discard_top(card.clone());
    presentation.set_discard_top(image);
    presentation.set_message(&narration);
    state.apply_card_departure(seat);
}

/// Replays a batch strictly in order, one move per pacing tick.
pub struct MoveProcessor<'a, P: ?Sized, T: ?Sized> {
    presentation: &'a P,
    pacer: &'a T,
    pacing: PacingConfig,
}

impl<'a, P, T> MoveProcessor<'a, P, T>
where
    P: Presentation + ?Sized,
    T: Pacer + ?Sized,
{
    pub fn new(presentation: &'a P, pacer: &'a T, pacing: PacingConfig) -> Self {
        MoveProcessor {
            presentation,
            pacer,
            pacing,
        }
    }

    pub async fn replay(&self, state: &Mutex<LocalGameState>, batch: &[Move]) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for mv in batch {
            let automated = {
                let mut state = state.lock();
                let seat = apply_move(&mut state, mv, self.presentation);
                debug!(
                    "applied {:?} for {:?}, turn now {:?}",
                    mv.kind,
                    mv.player,
                    state.current_player()
                );
                match seat {
                    Some(seat) => {
                        summary.applied += 1;
                        state.player(seat).map(|p| !p.is_human()).unwrap_or(false)
                    }
                    None => {
                        summary.unresolved += 1;
                        false
                    }
                }
            };

            self.pacer.pause(self.pacing.delay_for(automated)).await;

            self.presentation.render(&state.lock());
        }

        summary
    }
}
