//! Thin DTOs mirroring Discord REST API objects.
//!
//! Only the fields the dashboard renders are modelled; anything else Discord sends is
//! ignored during deserialization. Snowflake IDs stay as strings, matching the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Guild (server) as returned by `guilds/{id}` and `users/@me/guilds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Guild {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Only present on `users/@me/guilds` entries.
    #[serde(default)]
    pub owner: Option<bool>,
    /// Permission bitset of the requesting user, only present on `users/@me/guilds`.
    #[serde(default)]
    pub permissions: Option<String>,
    /// Present when requested with `with_counts=true`.
    #[serde(default)]
    pub approximate_member_count: Option<u64>,
    #[serde(default)]
    pub approximate_presence_count: Option<u64>,
}

/// Discord user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: Option<bool>,
}

/// Membership of a user within a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuildMember {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub joined_at: Option<String>,
}

/// Channel belonging to a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuildChannel {
    pub id: String,
    /// Discord channel type (0 = text, 2 = voice, 4 = category, ...).
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}
