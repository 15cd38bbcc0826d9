use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("Enter your name!")]
    EmptyPlayerName,
    #[error("{0}")]
    Server(String),
    #[error("the server sent no players")]
    NoPlayers,
    #[error("seat name `{0}` is used by more than one player")]
    DuplicateSeatName(String),
    #[error("an action is still being processed")]
    GameInProgress,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::MalformedResponse(err.to_string())
    }
}
