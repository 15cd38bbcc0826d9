use std::sync::atomic::{AtomicBool, Ordering};

use crate::game_state::LocalGameState;

/// Allows at most one outstanding player action.
#[derive(Debug, Default)]
pub struct ActionGate {
    in_flight: AtomicBool,
}

impl ActionGate {
    pub fn new() -> Self {
        ActionGate::default()
    }

    pub fn may_act(&self, state: &LocalGameState) -> bool {
        !self.is_closed() && state.current_seat_may_act()
    }

    pub fn is_closed(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Closes the gate for the current human seat. The gate reopens when the
    /// returned pass is dropped.
    pub fn try_acquire(&self, state: &LocalGameState) -> Option<GatePass<'_>> {
        if !state.current_seat_may_act() {
            return None;
        }
        self.acquire_unchecked()
    }

    /// Closes the gate regardless of whose turn it is.
    pub(crate) fn acquire_unchecked(&self) -> Option<GatePass<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GatePass { gate: self })
    }
}

#[derive(Debug)]
pub struct GatePass<'a> {
    gate: &'a ActionGate,
}

impl Drop for GatePass<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}
