use std::time::Duration;

use clap::Parser;
use kittens_core::config::{ClientConfig, PacingConfig};

#[derive(Debug, Parser)]
#[command(name = "kittens", about = "Play exploding kittens against the AI")]
pub struct CliArgs {
    /// Base url of the game server
    #[arg(
        long,
        env = "KITTENS_SERVER_URL",
        default_value = "http://127.0.0.1:5000"
    )]
    pub server_url: String,

    /// Your name at the table, asked for when missing
    #[arg(long, env = "KITTENS_PLAYER_NAME")]
    pub name: Option<String>,

    #[arg(long, default_value_t = 1200)]
    pub ai_delay_ms: u64,

    #[arg(long, default_value_t = 100)]
    pub human_delay_ms: u64,

    /// 0 waits forever
    #[arg(long, default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Replay moves without pauses
    #[arg(long)]
    pub no_delay: bool,
}

impl CliArgs {
    pub fn client_config(&self) -> ClientConfig {
        let pacing = if self.no_delay {
            PacingConfig {
                ai_move_delay: Duration::ZERO,
                human_move_delay: Duration::ZERO,
            }
        } else {
            PacingConfig {
                ai_move_delay: Duration::from_millis(self.ai_delay_ms),
                human_move_delay: Duration::from_millis(self.human_delay_ms),
            }
        };
        let request_timeout = match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        ClientConfig {
            pacing,
            request_timeout,
        }
    }
}
