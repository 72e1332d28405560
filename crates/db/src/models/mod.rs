pub mod check;
pub mod post;
pub mod session;
pub mod stats;
pub mod user;
pub mod vote;
