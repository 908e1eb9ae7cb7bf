use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::discord::{Guild, GuildChannel, GuildMember, User};

/// Guild selector shown on `/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSelectorDto {
    /// Guilds the bot is a member of.
    pub bot_guilds: Vec<Guild>,
    /// Guilds the logged-in user is a member of.
    pub user_guilds: Vec<Guild>,
    /// User guilds the bot is also a member of.
    pub mutual_guilds: Vec<Guild>,
    pub user_profile: User,
}

/// Detail view of a single guild shown on `/dashboard/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuildDashboardDto {
    pub guild: Guild,
    pub guild_members: Vec<GuildMember>,
    pub guild_channels: Vec<GuildChannel>,
    /// Addon selections currently stored for the guild.
    pub addons: Vec<AddonDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddonDto {
    pub addon_type: String,
    pub value: String,
}

/// Landing document served on `/`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeDto {
    pub authenticated: bool,
    pub login_url: String,
    pub dashboard_url: String,
}
