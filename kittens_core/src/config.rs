use std::time::Duration;

pub const AI_MOVE_DELAY: Duration = Duration::from_millis(1200);
pub const HUMAN_MOVE_DELAY: Duration = Duration::from_millis(100);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    pub ai_move_delay: Duration,
    pub human_move_delay: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            ai_move_delay: AI_MOVE_DELAY,
            human_move_delay: HUMAN_MOVE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    pub pacing: PacingConfig,
    /// `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            pacing: PacingConfig::default(),
            request_timeout: Some(REQUEST_TIMEOUT),
        }
    }
}
