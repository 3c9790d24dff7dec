use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Tunables for slot proposal generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalConfig {
    /// How many days after the reference day to cover, starting tomorrow.
    pub days_ahead: u32,

    /// Fixed times of day offered on each covered day, in display order.
    pub slot_times: Vec<NaiveTime>,

    /// Upper bound on proposed slots. Widening coverage only means raising
    /// this bound; generation order never changes.
    pub max_slots: usize,

    /// Locale tag for day labels, e.g. "vi" or "en".
    pub locale: String,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            days_ahead: 7,
            slot_times: vec![hm(14, 0), hm(16, 0), hm(18, 0), hm(20, 0)],
            max_slots: 8,
            locale: "vi".to_string(),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}
