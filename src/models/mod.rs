pub mod record;
pub mod user;

pub use record::{MaterialSubtotal, RankingEntry, RecyclingRecord};
pub use user::{User, UserSummary};
