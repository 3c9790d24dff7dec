use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::ProposalConfig;
use crate::labels;
use crate::validate::DATETIME_MINUTE_FORMAT;

/// A candidate meeting time offered to the responder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    /// Slot start, minute precision, local wall-clock.
    pub starts_at: NaiveDateTime,

    /// Wire value, ISO-8601 truncated to minutes.
    pub value: String,

    /// Localized weekday/day/month label for the slot date.
    pub day_label: String,

    /// Literal time-of-day string the slot was built from.
    pub time_label: String,
}

/// Generates candidate meeting datetimes for the days after a reference
/// instant.
pub struct SlotProposer {
    config: ProposalConfig,
}

impl SlotProposer {
    pub fn new(config: ProposalConfig) -> Self {
        Self { config }
    }

    /// Propose slots relative to a single reference instant.
    ///
    /// Candidates are emitted day by day starting tomorrow, each day carrying
    /// the configured times in order, then the sequence is truncated to
    /// `max_slots`. Two calls with the same `now` produce identical output.
    pub fn propose(&self, now: NaiveDateTime) -> Vec<TimeSlot> {
        let today = now.date();
        let mut slots = Vec::new();

        for offset in 1..=self.config.days_ahead {
            let date = today + Duration::days(i64::from(offset));
            for &time in &self.config.slot_times {
                let starts_at = date.and_time(time);
                slots.push(TimeSlot {
                    starts_at,
                    value: starts_at.format(DATETIME_MINUTE_FORMAT).to_string(),
                    day_label: labels::day_label(date, &self.config.locale),
                    time_label: time.format("%H:%M").to_string(),
                });
            }
        }

        slots.truncate(self.config.max_slots);
        slots
    }
}

impl Default for SlotProposer {
    fn default() -> Self {
        Self::new(ProposalConfig::default())
    }
}
