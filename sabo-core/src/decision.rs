use serde::{Deserialize, Serialize};

/// Response status as reported to the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Accepted,
    Declined,
}

/// Venue and time proposed alongside an accepted challenge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchProposal {
    pub club_id: String,
    pub datetime: String,
}

/// Terminal output of a response cycle.
///
/// A declined challenge carries no payload; an accepted one always carries
/// the full proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted(MatchProposal),
    Declined,
}

impl Decision {
    pub fn status(&self) -> ResponseStatus {
        match self {
            Decision::Accepted(_) => ResponseStatus::Accepted,
            Decision::Declined => ResponseStatus::Declined,
        }
    }

    pub fn proposal(&self) -> Option<&MatchProposal> {
        match self {
            Decision::Accepted(proposal) => Some(proposal),
            Decision::Declined => None,
        }
    }
}
