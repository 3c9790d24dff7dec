pub mod app_config;
pub mod coordinator;
pub mod session;

pub use app_config::Config;
pub use coordinator::{Phase, ResponseCoordinator, ResponseError, Selection};
pub use session::{ChallengeSession, PendingFetch, SessionError};
