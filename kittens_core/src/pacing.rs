use std::time::Duration;

use async_trait::async_trait;

use crate::config::PacingConfig;

/// Suspension between consecutive move applications.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

impl PacingConfig {
    pub fn delay_for(&self, automated: bool) -> Duration {
        if automated {
            self.ai_move_delay
        } else {
            self.human_move_delay
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Pacer, TokioPacer};
    use crate::config::PacingConfig;

    #[test]
    fn delay_for_should_pick_longer_delay_for_automated_seats() {
        let pacing = PacingConfig::default();

        assert_eq!(pacing.delay_for(true), Duration::from_millis(1200));
        assert_eq!(pacing.delay_for(false), Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_pacer_should_wait_for_the_full_delay() {
        let start = tokio::time::Instant::now();

        TokioPacer.pause(Duration::from_millis(1200)).await;

        assert!(start.elapsed() >= Duration::from_millis(1200));
    }
}
