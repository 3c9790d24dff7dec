use crate::decision::{MatchProposal, ResponseStatus};

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct ChallengeRespondedEvent {
    pub challenge_id: String,
    pub status: ResponseStatus,
    pub proposal: Option<MatchProposal>,
    pub timestamp: i64,
}
