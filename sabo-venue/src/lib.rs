pub mod club;
pub mod directory;
pub mod ranking;

pub use club::{Club, ClubBadge};
pub use directory::{ClubDirectory, DirectoryConfig, DirectoryError, StaticClubDirectory};
pub use ranking::ClubRanker;
