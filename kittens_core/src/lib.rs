pub mod card;
pub mod config;
pub mod error;
pub mod events;
pub mod game_state;
pub mod gate;
pub mod move_processor;
pub mod pacing;
pub mod player;
pub mod presentation;
pub mod server;
pub mod session;

#[cfg(test)]
mod test_infra;

pub use error::ClientError;
pub use game_state::LocalGameState;
pub use session::{DispatchOutcome, GameSession};
