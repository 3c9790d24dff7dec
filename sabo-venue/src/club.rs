use serde::{Deserialize, Serialize};

/// Badges shown next to a club in suggestion lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClubBadge {
    SaboOwned,
    Premium,
}

/// A billiards club that can host a challenge match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub available_tables: i32,
    pub is_sabo_owned: bool,
    /// Paid-tier amount; 0 means the club is not on a paid tier.
    pub monthly_payment: i32,
    /// Server-assigned tie-break, lower precedence than the tier fields.
    pub priority_score: i32,
}

impl Club {
    /// Badges derived from the club's tier fields, owned tier first.
    pub fn badges(&self) -> Vec<ClubBadge> {
        let mut badges = Vec::new();

        if self.is_sabo_owned {
            badges.push(ClubBadge::SaboOwned);
        }
        if self.monthly_payment > 0 {
            badges.push(ClubBadge::Premium);
        }

        badges
    }
}
