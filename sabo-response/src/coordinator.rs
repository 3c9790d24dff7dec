use serde::{Deserialize, Serialize};

use sabo_core::{Challenge, Decision, MatchProposal};
use sabo_venue::Club;

/// Where a response cycle currently stands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Idle,
    Selecting,
    Ready,
}

/// The responder's current picks for an open cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    pub club_id: Option<String>,
    pub datetime: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("No challenge is open")]
    NotOpen,

    #[error("Cannot accept: club and datetime must both be selected")]
    NotReady,

    #[error("Unknown club: {0}")]
    UnknownClub(String),
}

/// Selection state machine for a single challenge response cycle.
///
/// Pure state: no clock, no I/O. A decision is only ever produced by
/// `accept` and `decline`, and producing one returns the machine to idle.
#[derive(Debug)]
pub struct ResponseCoordinator {
    phase: Phase,
    challenge: Option<Challenge>,
    clubs: Vec<Club>,
    selection: Selection,
}

impl ResponseCoordinator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            challenge: None,
            clubs: Vec::new(),
            selection: Selection::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Begin a response cycle for an incoming challenge.
    ///
    /// Any previous selection or club list is discarded.
    pub fn open(&mut self, challenge: Challenge) {
        self.challenge = Some(challenge);
        self.clubs.clear();
        self.selection = Selection::default();
        self.phase = Phase::Selecting;
    }

    /// Install the club list for the open cycle.
    ///
    /// The first club becomes the initial pick; an empty list leaves the
    /// club side unselected.
    pub fn adopt_clubs(&mut self, clubs: Vec<Club>) {
        self.clubs = clubs;
        self.selection.club_id = self.clubs.first().map(|club| club.id.clone());
        self.refresh_phase();
    }

    /// Pick a club from the adopted list.
    pub fn choose_club(&mut self, club_id: &str) -> Result<(), ResponseError> {
        self.ensure_open()?;

        if !self.clubs.iter().any(|club| club.id == club_id) {
            return Err(ResponseError::UnknownClub(club_id.to_string()));
        }

        self.selection.club_id = Some(club_id.to_string());
        self.refresh_phase();
        Ok(())
    }

    /// Pick a meeting datetime, as a minute-precision wire string.
    pub fn choose_datetime(&mut self, datetime: &str) -> Result<(), ResponseError> {
        self.ensure_open()?;

        self.selection.datetime = Some(datetime.to_string());
        self.refresh_phase();
        Ok(())
    }

    /// Decline the open challenge. Valid from any open phase.
    pub fn decline(&mut self) -> Result<Decision, ResponseError> {
        self.ensure_open()?;

        self.reset();
        Ok(Decision::Declined)
    }

    /// Accept the open challenge.
    ///
    /// Only valid once both picks are made; otherwise nothing is emitted and
    /// the selection is left untouched.
    pub fn accept(&mut self) -> Result<Decision, ResponseError> {
        self.ensure_open()?;

        let proposal = match (&self.selection.club_id, &self.selection.datetime) {
            (Some(club_id), Some(datetime)) => MatchProposal {
                club_id: club_id.clone(),
                datetime: datetime.clone(),
            },
            _ => return Err(ResponseError::NotReady),
        };

        self.reset();
        Ok(Decision::Accepted(proposal))
    }

    /// Close without deciding; the selection is discarded.
    pub fn close(&mut self) {
        self.reset();
    }

    fn ensure_open(&self) -> Result<(), ResponseError> {
        if self.phase == Phase::Idle {
            return Err(ResponseError::NotOpen);
        }
        Ok(())
    }

    fn refresh_phase(&mut self) {
        if self.phase == Phase::Idle {
            return;
        }

        self.phase = if self.selection.club_id.is_some() && self.selection.datetime.is_some() {
            Phase::Ready
        } else {
            Phase::Selecting
        };
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.challenge = None;
        self.clubs.clear();
        self.selection = Selection::default();
    }
}

impl Default for ResponseCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
