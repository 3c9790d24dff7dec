use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::club::Club;
use crate::ranking::{ClubRanker, DEFAULT_SUGGESTION_LIMIT};

/// Read-only source of suggested clubs.
///
/// Injected into the response flow as an explicit dependency so tests can
/// substitute a deterministic implementation.
#[async_trait]
pub trait ClubDirectory: Send + Sync {
    /// Fetch up to `limit` clubs, ordered by suggestion priority.
    async fn suggested_clubs(&self, limit: usize) -> Result<Vec<Club>, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Club directory unavailable: {0}")]
    Unavailable(String),
}

/// Directory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Maximum number of clubs suggested per open cycle.
    pub suggestion_limit: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

/// In-memory club directory.
///
/// Serves the same ordering contract as the remote directory: clubs come
/// back ranked and truncated to the requested limit.
pub struct StaticClubDirectory {
    clubs: Vec<Club>,
}

impl StaticClubDirectory {
    pub fn new(clubs: Vec<Club>) -> Self {
        Self { clubs }
    }
}

#[async_trait]
impl ClubDirectory for StaticClubDirectory {
    async fn suggested_clubs(&self, limit: usize) -> Result<Vec<Club>, DirectoryError> {
        Ok(ClubRanker::new(limit).rank(self.clubs.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(id: &str, is_sabo_owned: bool, monthly_payment: i32, priority_score: i32) -> Club {
        Club {
            id: id.to_string(),
            name: format!("Club {}", id),
            address: "9 Cue Ln".to_string(),
            phone: Some("0901000000".to_string()),
            available_tables: 6,
            is_sabo_owned,
            monthly_payment,
            priority_score,
        }
    }

    #[tokio::test]
    async fn test_static_directory_ranks_and_limits() {
        let directory = StaticClubDirectory::new(vec![
            club("a", false, 0, 1),
            club("b", true, 0, 0),
            club("c", false, 700, 2),
        ]);

        let suggested = directory.suggested_clubs(2).await.unwrap();

        let ids: Vec<&str> = suggested.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_empty_directory_yields_empty_list() {
        let directory = StaticClubDirectory::new(Vec::new());

        let suggested = directory.suggested_clubs(5).await.unwrap();

        assert!(suggested.is_empty());
    }
}
