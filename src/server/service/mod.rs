//! Business logic between the controllers and the data layer / Discord API.

pub mod addon;
pub mod auth;
pub mod dashboard;
pub mod discord;
