use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::warn;
use uuid::Uuid;

use sabo_core::{Challenge, ChallengeRespondedEvent, Decision, ResponseListener};
use sabo_schedule::{parse_proposed_datetime, ScheduleError, SlotProposer, TimeSlot, DATETIME_MINUTE_FORMAT};
use sabo_venue::{Club, ClubDirectory};

use crate::app_config::Config;
use crate::coordinator::{Phase, ResponseCoordinator, ResponseError, Selection};

/// Token for an in-flight suggestion fetch, tied to one open cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFetch {
    cycle: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid proposed datetime: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("{0}")]
    Response(#[from] ResponseError),
}

/// One challenge-response dialog session.
///
/// Owns the selection state machine for the current open cycle plus the
/// collaborators around it: the club directory suggestions come from, the
/// slot proposer, and an optional listener notified of decisions. At most
/// one fetch is in flight per open cycle; results carrying a stale cycle
/// token are discarded rather than applied to a session that has moved on.
pub struct ChallengeSession {
    directory: Arc<dyn ClubDirectory>,
    listener: Option<Arc<dyn ResponseListener>>,
    coordinator: ResponseCoordinator,
    proposer: SlotProposer,
    suggestion_limit: usize,
    cycle: Option<Uuid>,
}

impl ChallengeSession {
    pub fn new(directory: Arc<dyn ClubDirectory>, config: Config) -> Self {
        Self {
            directory,
            listener: None,
            coordinator: ResponseCoordinator::new(),
            proposer: SlotProposer::new(config.proposal),
            suggestion_limit: config.directory.suggestion_limit,
            cycle: None,
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn ResponseListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn phase(&self) -> Phase {
        self.coordinator.phase()
    }

    pub fn clubs(&self) -> &[Club] {
        self.coordinator.clubs()
    }

    pub fn selection(&self) -> &Selection {
        self.coordinator.selection()
    }

    /// Open a response cycle.
    ///
    /// A caller-supplied club list is adopted as-is and skips the fetch
    /// entirely; otherwise the returned token must be resolved with
    /// `load_suggestions` and `apply_suggestions`.
    pub fn open(
        &mut self,
        challenge: Challenge,
        suggested_clubs: Option<Vec<Club>>,
    ) -> Option<PendingFetch> {
        self.coordinator.open(challenge);
        let cycle = Uuid::new_v4();
        self.cycle = Some(cycle);

        match suggested_clubs {
            Some(clubs) => {
                self.coordinator.adopt_clubs(clubs);
                None
            }
            None => Some(PendingFetch { cycle }),
        }
    }

    /// Fetch suggestions once, absorbing directory failures into an empty
    /// list. The failure never reaches the decision path.
    pub async fn load_suggestions(&self) -> Vec<Club> {
        match self.directory.suggested_clubs(self.suggestion_limit).await {
            Ok(clubs) => clubs,
            Err(err) => {
                warn!("Failed to load suggested clubs: {}", err);
                Vec::new()
            }
        }
    }

    /// Apply a resolved fetch.
    ///
    /// Results for a cycle that has since closed or reopened are discarded.
    pub fn apply_suggestions(&mut self, pending: PendingFetch, clubs: Vec<Club>) {
        if self.cycle != Some(pending.cycle) || self.coordinator.phase() == Phase::Idle {
            return;
        }
        self.coordinator.adopt_clubs(clubs);
    }

    /// Open and populate in one step when no pre-ranked list is supplied.
    pub async fn open_and_load(&mut self, challenge: Challenge) {
        if let Some(pending) = self.open(challenge, None) {
            let clubs = self.load_suggestions().await;
            self.apply_suggestions(pending, clubs);
        }
    }

    /// Candidate meeting times relative to `now`.
    pub fn proposed_slots(&self, now: NaiveDateTime) -> Vec<TimeSlot> {
        self.proposer.propose(now)
    }

    pub fn choose_club(&mut self, club_id: &str) -> Result<(), ResponseError> {
        self.coordinator.choose_club(club_id)
    }

    pub fn choose_datetime(&mut self, datetime: &str) -> Result<(), ResponseError> {
        self.coordinator.choose_datetime(datetime)
    }

    /// Select a player-entered datetime after validating it against `now`.
    pub fn choose_custom_datetime(
        &mut self,
        input: &str,
        now: NaiveDateTime,
    ) -> Result<(), SessionError> {
        let parsed = parse_proposed_datetime(input, now)?;
        let normalized = parsed.format(DATETIME_MINUTE_FORMAT).to_string();
        self.coordinator.choose_datetime(&normalized)?;
        Ok(())
    }

    /// Accept the open challenge, notifying the listener exactly once.
    pub async fn accept(&mut self) -> Result<Decision, ResponseError> {
        let challenge_id = self.challenge_id()?;
        let decision = self.coordinator.accept()?;
        self.cycle = None;
        self.notify(&challenge_id, &decision).await;
        Ok(decision)
    }

    /// Decline the open challenge, notifying the listener exactly once.
    pub async fn decline(&mut self) -> Result<Decision, ResponseError> {
        let challenge_id = self.challenge_id()?;
        let decision = self.coordinator.decline()?;
        self.cycle = None;
        self.notify(&challenge_id, &decision).await;
        Ok(decision)
    }

    /// Close without deciding. Nothing is emitted; an unresolved fetch for
    /// this cycle will be discarded when it arrives.
    pub fn close(&mut self) {
        self.cycle = None;
        self.coordinator.close();
    }

    fn challenge_id(&self) -> Result<String, ResponseError> {
        self.coordinator
            .challenge()
            .map(|challenge| challenge.id.clone())
            .ok_or(ResponseError::NotOpen)
    }

    async fn notify(&self, challenge_id: &str, decision: &Decision) {
        if let Some(listener) = &self.listener {
            let event = ChallengeRespondedEvent {
                challenge_id: challenge_id.to_string(),
                status: decision.status(),
                proposal: decision.proposal().cloned(),
                timestamp: chrono::Utc::now().timestamp(),
            };
            listener.on_respond(event).await;
        }
    }
}
