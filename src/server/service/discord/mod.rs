pub mod api;
pub mod token;

pub use api::DiscordApiClient;
pub use token::{with_token_refresh, SessionTokenRefresher};
