use async_trait::async_trait;

use crate::{
    error::ClientError,
    events::{MoveBatchReply, StartGameReply},
};

/// The authoritative game engine, one request/response round trip per call.
#[async_trait]
pub trait GameServer: Send + Sync {
    async fn start_game(&self, players: &str) -> Result<StartGameReply, ClientError>;
    async fn draw_card(&self) -> Result<MoveBatchReply, ClientError>;
    async fn play_card(&self, card_index: usize) -> Result<MoveBatchReply, ClientError>;
}
