//! Discord REST API calls made on behalf of the bot or the signed-in user.

use reqwest::{header::AUTHORIZATION, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::server::{
    error::{config::ConfigError, discord::DiscordApiError, AppError},
    state::DiscordSettings,
};

/// Client for Discord's REST API.
///
/// Bot calls authenticate with the static bot token from configuration. User calls take
/// the caller's OAuth access token; they are the only calls that should be wrapped with
/// `with_token_refresh`, since bot tokens never expire.
pub struct DiscordApiClient<'a> {
    http_client: &'a reqwest::Client,
    settings: &'a DiscordSettings,
}

impl<'a> DiscordApiClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, settings: &'a DiscordSettings) -> Self {
        Self {
            http_client,
            settings,
        }
    }

    /// Builds the full URL of an endpoint.
    ///
    /// Query parameters are appended in order as `key=value` pairs joined by `&`, with
    /// keys and values form-urlencoded.
    ///
    /// # Arguments
    /// - `endpoint` - Path relative to the API base, e.g. `guilds/123/members`
    /// - `query` - Query parameters, may be empty
    ///
    /// # Returns
    /// - `Ok(Url)` - Absolute endpoint URL
    /// - `Err(AppError::ConfigErr)` - The configured API base does not form a valid URL
    pub fn endpoint_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Url, AppError> {
        let raw = format!("{}/{}", self.settings.api_base, endpoint);
        let mut url = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// GET an endpoint as the bot.
    pub async fn bot_get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Response, AppError> {
        let url = self.endpoint_url(endpoint, query)?;

        tracing::debug!("Discord GET {} as bot", endpoint);

        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, self.bot_authorization())
            .send()
            .await?;

        Ok(response)
    }

    /// GET an endpoint as the user owning `access_token`.
    pub async fn user_get(
        &self,
        access_token: &str,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Response, AppError> {
        let url = self.endpoint_url(endpoint, query)?;

        tracing::debug!("Discord GET {} as user", endpoint);

        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", access_token))
            .send()
            .await?;

        Ok(response)
    }

    /// POST a JSON body to an endpoint as the bot.
    pub async fn bot_post(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
        query: &[(&str, &str)],
    ) -> Result<Response, AppError> {
        let url = self.endpoint_url(endpoint, query)?;

        tracing::debug!("Discord POST {} as bot", endpoint);

        let response = self
            .http_client
            .post(url)
            .header(AUTHORIZATION, self.bot_authorization())
            .json(body)
            .send()
            .await?;

        Ok(response)
    }

    fn bot_authorization(&self) -> String {
        format!("Bot {}", self.settings.bot_token)
    }
}

/// Ensures a Discord response succeeded.
///
/// # Returns
/// - `Ok(Response)` - 2xx response, body untouched
/// - `Err(AppError::DiscordApiErr)` - Any other status, with the body captured for logging
pub async fn ensure_success(response: Response, endpoint: &str) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(DiscordApiError {
        status,
        endpoint: endpoint.to_string(),
        body,
    }
    .into())
}

/// Decodes a successful Discord response body into `T`.
///
/// # Returns
/// - `Ok(T)` - Parsed body
/// - `Err(AppError::DiscordApiErr)` - Non-success status
/// - `Err(AppError::ReqwestErr)` - Body is not valid JSON for `T`
pub async fn decode<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T, AppError> {
    let response = ensure_success(response, endpoint).await?;
    Ok(response.json::<T>().await?)
}
