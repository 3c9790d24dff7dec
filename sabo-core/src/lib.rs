pub mod challenge;
pub mod decision;
pub mod events;
pub mod listener;

pub use challenge::{Challenge, ChallengerProfile};
pub use decision::{Decision, MatchProposal, ResponseStatus};
pub use events::ChallengeRespondedEvent;
pub use listener::{LoggingListener, ResponseListener};
