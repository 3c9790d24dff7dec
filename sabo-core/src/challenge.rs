use serde::{Deserialize, Serialize};

/// An incoming challenge awaiting the receiver's response.
///
/// Owned by the caller; the response flow only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub bet_points: i32,
    pub message: Option<String>,
    pub challenger: ChallengerProfile,
}

/// Public profile of the challenging player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengerProfile {
    pub user_id: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub current_rank: String,
}
