use async_trait::async_trait;
use kittens_core::{
    events::{MoveBatchReply, PlayCardRequest, StartGameReply, StartGameRequest},
    server::GameServer,
    ClientError,
};
use log::debug;
use serde::de::DeserializeOwned;

/// Talks to the game server over plain HTTP with JSON bodies.
pub struct HttpGameServer {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGameServer {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))?;
        Ok(HttpGameServer {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send<R: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<R, ClientError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        debug!("server answered {}: {}", status, body);
        decode(&body)
    }
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

/// Decodes a response body regardless of its status code. The server reports
/// game errors inside the body.
pub fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ClientError> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl GameServer for HttpGameServer {
    async fn start_game(&self, players: &str) -> Result<StartGameReply, ClientError> {
        let request = self
            .client
            .post(self.endpoint("start_game"))
            .json(&StartGameRequest { players });
        self.send(request).await
    }

    async fn draw_card(&self) -> Result<MoveBatchReply, ClientError> {
        self.send(self.client.post(self.endpoint("draw_card"))).await
    }

    async fn play_card(&self, card_index: usize) -> Result<MoveBatchReply, ClientError> {
        let request = self
            .client
            .post(self.endpoint("play_card"))
            .json(&PlayCardRequest { card_index });
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use kittens_core::{
        events::{MoveBatchReply, MoveKind, StartGameReply},
        ClientError,
    };

    use super::{decode, HttpGameServer};

    #[test]
    fn endpoint_should_join_without_double_slash() {
        let server = HttpGameServer::new("http://localhost:5000/").unwrap();

        assert_eq!(
            server.endpoint("draw_card"),
            "http://localhost:5000/draw_card"
        );
    }

    #[test]
    fn decode_should_read_a_started_game() {
        let body = r#"{
            "players": [
                {"name": "Alice", "is_human": true, "hand": [{"name": "Defuse", "image": "defuse.png"}]},
                {"name": "AI 1", "is_human": false, "hand_length": 5}
            ],
            "current_player": 0
        }"#;

        let reply: StartGameReply = decode(body).unwrap();

        match reply {
            StartGameReply::Started {
                players,
                current_player,
                ..
            } => {
                assert_eq!(players.len(), 2);
                assert_eq!(current_player, 0);
            }
            StartGameReply::Rejected { .. } => panic!("expected a started game"),
        }
    }

    #[test]
    fn decode_should_read_a_game_error() {
        let reply: StartGameReply = decode(r#"{"error": "Enter your name!"}"#).unwrap();

        assert_eq!(
            reply,
            StartGameReply::Rejected {
                error: "Enter your name!".to_string()
            }
        );
    }

    #[test]
    fn decode_should_read_a_move_batch() {
        let body = r#"{
            "current_player": 1,
            "moves": [
                {"player": "Alice", "type": "draw", "card": {"name": "Skip", "image": "skip.png"}},
                {"new_current_player": 1}
            ]
        }"#;

        let reply: MoveBatchReply = decode(body).unwrap();
        let moves = reply.moves.unwrap();

        assert_eq!(reply.current_player, Some(1));
        assert_eq!(moves[0].kind, Some(MoveKind::Draw));
        assert_eq!(moves[1].new_current_player, Some(1));
    }

    #[test]
    fn decode_should_flag_html_error_pages() {
        let reply = decode::<MoveBatchReply>("<html>Internal Server Error</html>");

        assert!(matches!(reply, Err(ClientError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn unreachable_server_should_be_a_transport_failure() {
        use kittens_core::server::GameServer;

        let server = HttpGameServer::new("http://127.0.0.1:1").unwrap();

        let reply = server.draw_card().await;

        assert!(matches!(reply, Err(ClientError::Transport(_))));
    }
}
