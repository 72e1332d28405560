pub mod auth;
pub mod community;
pub mod images;
pub mod news;
pub mod users;
