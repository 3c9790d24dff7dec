use crate::club::Club;

/// Default number of suggestions surfaced to the responder.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Orders clubs by suggestion priority.
pub struct ClubRanker {
    limit: usize,
}

impl ClubRanker {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Rank clubs by (owned tier, paid-tier amount, priority score), all
    /// descending, and keep the top entries.
    ///
    /// The sort is stable, so clubs tied on all three keys keep their input
    /// order.
    pub fn rank(&self, mut clubs: Vec<Club>) -> Vec<Club> {
        clubs.sort_by(|a, b| priority_key(b).cmp(&priority_key(a)));
        clubs.truncate(self.limit);
        clubs
    }
}

impl Default for ClubRanker {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_LIMIT)
    }
}

fn priority_key(club: &Club) -> (bool, i32, i32) {
    (club.is_sabo_owned, club.monthly_payment, club.priority_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(id: &str, is_sabo_owned: bool, monthly_payment: i32, priority_score: i32) -> Club {
        Club {
            id: id.to_string(),
            name: format!("Club {}", id),
            address: "1 Rack Ave".to_string(),
            phone: None,
            available_tables: 10,
            is_sabo_owned,
            monthly_payment,
            priority_score,
        }
    }

    fn ids(clubs: &[Club]) -> Vec<&str> {
        clubs.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_owned_tier_dominates_paid_tier() {
        let ranker = ClubRanker::default();

        let ranked = ranker.rank(vec![
            club("c2", false, 500, 1),
            club("c3", true, 0, 0),
        ]);

        assert_eq!(ids(&ranked), vec!["c3", "c2"]);
    }

    #[test]
    fn test_paid_tier_then_priority_score() {
        let ranker = ClubRanker::default();

        let ranked = ranker.rank(vec![
            club("a", false, 100, 9),
            club("b", false, 300, 0),
            club("c", false, 300, 4),
        ]);

        assert_eq!(ids(&ranked), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let ranker = ClubRanker::default();

        let once = ranker.rank(vec![
            club("a", true, 200, 1),
            club("b", true, 0, 7),
            club("c", false, 900, 2),
        ]);
        let twice = ranker.rank(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_first_result_has_maximal_key() {
        let ranker = ClubRanker::default();

        let clubs = vec![
            club("a", false, 50, 3),
            club("b", true, 10, 0),
            club("c", false, 800, 9),
            club("d", true, 10, 5),
        ];
        let ranked = ranker.rank(clubs.clone());

        let top = priority_key(&ranked[0]);
        for candidate in &clubs {
            assert!(top >= priority_key(candidate));
        }
    }

    #[test]
    fn test_truncates_to_limit() {
        let ranker = ClubRanker::new(2);

        let ranked = ranker.rank(vec![
            club("a", false, 0, 1),
            club("b", false, 0, 2),
            club("c", false, 0, 3),
        ]);

        assert_eq!(ids(&ranked), vec!["c", "b"]);
    }

    #[test]
    fn test_full_key_ties_keep_input_order() {
        let ranker = ClubRanker::default();

        let ranked = ranker.rank(vec![
            club("first", false, 100, 1),
            club("second", false, 100, 1),
            club("third", false, 100, 1),
        ]);

        assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
    }
}
