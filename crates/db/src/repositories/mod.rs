pub mod check_repo;
pub mod post_repo;
pub mod session_repo;
pub mod stats_repo;
pub mod user_repo;
pub mod vote_repo;

pub use check_repo::CheckRepo;
pub use post_repo::PostRepo;
pub use session_repo::SessionRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
pub use vote_repo::{VoteOutcome, VoteRepo};
