use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use serde_json::json;
use tower_sessions::Session;

use crate::{
    model::{
        dashboard::{DashboardSelectorDto, GuildDashboardDto},
        discord::{Guild, GuildChannel, GuildMember, User},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        service::{
            addon::AddonService,
            discord::{
                api::{decode, ensure_success},
                with_token_refresh, DiscordApiClient, SessionTokenRefresher,
            },
        },
        state::AppState,
        util::parse::parse_u64_from_string,
    },
};

/// Number of members and channels requested for the guild detail view.
const GUILD_LIST_LIMIT: &str = "1000";

/// Service backing the dashboard pages.
///
/// Guild data is read live from Discord on every request; only addon selections are
/// stored locally. Calls are made one after another, never concurrently.
pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
    api: DiscordApiClient<'a>,
    tokens: SessionTokenRefresher<'a>,
}

impl<'a> DashboardService<'a> {
    /// Creates a new DashboardService for one request.
    ///
    /// # Arguments
    /// - `state` - Shared application state
    /// - `session` - Session of the requesting user, read for their OAuth tokens
    ///
    /// # Returns
    /// - `DashboardService` - New service instance
    pub fn new(state: &'a AppState, session: &'a Session) -> Self {
        Self {
            db: &state.db,
            api: DiscordApiClient::new(&state.http_client, &state.discord),
            tokens: SessionTokenRefresher::new(
                AuthSession::new(session),
                &state.http_client,
                &state.oauth_client,
            ),
        }
    }

    /// Gathers the data for the guild selector.
    ///
    /// Fetches, in order, the bot's guilds, the user's guilds and the user's profile.
    ///
    /// # Returns
    /// - `Ok(DashboardSelectorDto)` - Both guild lists, their intersection and the profile
    /// - `Err(AppError::AuthErr)` - No access token in session
    /// - `Err(AppError::DiscordApiErr)` - Discord rejected one of the calls
    pub async fn index(&self) -> Result<DashboardSelectorDto, AppError> {
        let bot_guilds: Vec<Guild> = self.bot_get("users/@me/guilds", &[]).await?;
        let user_guilds: Vec<Guild> = self.user_get("users/@me/guilds").await?;
        let user_profile: User = self.user_get("users/@me").await?;

        let mutual_guilds = mutual_guilds(&bot_guilds, &user_guilds);

        Ok(DashboardSelectorDto {
            bot_guilds,
            user_guilds,
            mutual_guilds,
            user_profile,
        })
    }

    /// Gathers the detail view of one guild as seen by the bot.
    ///
    /// # Arguments
    /// - `guild_id` - Guild ID as received from the route
    ///
    /// # Returns
    /// - `Ok(GuildDashboardDto)` - Guild with counts, up to 1000 members and channels, and
    ///   the stored addon selections
    /// - `Err(AppError::BadRequest)` - `guild_id` is not a valid ID
    /// - `Err(AppError::DiscordApiErr)` - Discord rejected one of the calls
    pub async fn guild(&self, guild_id: &str) -> Result<GuildDashboardDto, AppError> {
        let guild_id = parse_u64_from_string(guild_id)?;

        let guild: Guild = self
            .bot_get(&format!("guilds/{}", guild_id), &[("with_counts", "true")])
            .await?;
        let guild_members: Vec<GuildMember> = self
            .bot_get(
                &format!("guilds/{}/members", guild_id),
                &[("limit", GUILD_LIST_LIMIT)],
            )
            .await?;
        let guild_channels: Vec<GuildChannel> = self
            .bot_get(
                &format!("guilds/{}/channels", guild_id),
                &[("limit", GUILD_LIST_LIMIT)],
            )
            .await?;

        let addons = AddonService::new(self.db).get_for_guild(guild_id).await?;

        Ok(GuildDashboardDto {
            guild,
            guild_members,
            guild_channels,
            addons,
        })
    }

    /// Posts a chat message to a channel of a guild as the bot.
    ///
    /// Both IDs are validated before anything is sent to Discord.
    ///
    /// # Arguments
    /// - `guild_id` - Guild ID as received from the route
    /// - `channel_id` - Channel ID as submitted by the form
    /// - `message` - Raw message text, sent as the message content
    ///
    /// # Returns
    /// - `Ok(())` - Discord accepted the message
    /// - `Err(AppError::BadRequest)` - `guild_id` or `channel_id` is not a valid ID
    /// - `Err(AppError::DiscordApiErr)` - Discord rejected the message
    pub async fn relay_message(
        &self,
        guild_id: &str,
        channel_id: &str,
        message: &str,
    ) -> Result<(), AppError> {
        let guild_id = parse_u64_from_string(guild_id)?;
        let channel_id = parse_u64_from_string(channel_id)?;
        let endpoint = format!("channels/{}/messages", channel_id);

        let response = self
            .api
            .bot_post(&endpoint, &message_body(message), &[])
            .await?;
        ensure_success(response, &endpoint).await?;

        tracing::info!(
            "Relayed message to channel {} of guild {}",
            channel_id,
            guild_id
        );

        Ok(())
    }

    async fn bot_get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let response = self.api.bot_get(endpoint, query).await?;
        decode(response, endpoint).await
    }

    /// GET as the signed-in user, refreshing their access token once if Discord rejects it.
    async fn user_get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        let api = &self.api;
        let session = self.tokens.session();

        let response = with_token_refresh(&self.tokens, move || async move {
            let access_token = session
                .access_token()
                .await?
                .ok_or(AuthError::UserNotInSession)?;

            api.user_get(&access_token, endpoint, &[]).await
        })
        .await?;

        decode(response, endpoint).await
    }
}

/// Guilds from `user_guilds` the bot is also a member of, in the user's order.
pub fn mutual_guilds(bot_guilds: &[Guild], user_guilds: &[Guild]) -> Vec<Guild> {
    let bot_guild_ids: HashSet<&str> = bot_guilds.iter().map(|g| g.id.as_str()).collect();

    user_guilds
        .iter()
        .filter(|g| bot_guild_ids.contains(g.id.as_str()))
        .cloned()
        .collect()
}

/// JSON body of a create-message request.
fn message_body(message: &str) -> serde_json::Value {
    json!({ "content": message })
}
