use async_trait::async_trait;
use tracing::info;

use crate::events::ChallengeRespondedEvent;

/// Receives the terminal decision of each response cycle.
#[async_trait]
pub trait ResponseListener: Send + Sync {
    async fn on_respond(&self, event: ChallengeRespondedEvent);
}

/// Listener that records decisions to the tracing log.
#[derive(Debug, Default)]
pub struct LoggingListener;

#[async_trait]
impl ResponseListener for LoggingListener {
    async fn on_respond(&self, event: ChallengeRespondedEvent) {
        let payload = serde_json::to_string(&event).unwrap_or_default();
        info!("Recorded response for challenge {}: {}", event.challenge_id, payload);
    }
}
