pub mod config;
pub mod labels;
pub mod slots;
pub mod validate;

pub use config::ProposalConfig;
pub use slots::{SlotProposer, TimeSlot};
pub use validate::{parse_proposed_datetime, ScheduleError, DATETIME_MINUTE_FORMAT};
