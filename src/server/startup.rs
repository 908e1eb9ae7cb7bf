use oauth2::{basic::BasicClient, AuthType, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::{DiscordSettings, OAuth2Client},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite pool.
///
/// Sessions live in the same database as the application data and expire after seven
/// days of inactivity. The cookie is marked `Secure` when the app is served over https.
///
/// # Arguments
/// - `db` - Connected database whose pool will store sessions
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the router with
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.secure_cookies())
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Builds the HTTP client used for Discord API and token endpoint requests.
///
/// Redirects are disabled; Discord never redirects API calls.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Discord OAuth2 client.
///
/// Client credentials are sent in the token request body, which is how Discord's
/// token endpoint expects them for the refresh grant.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone()).map_err(|source| {
            ConfigError::InvalidUrl {
                url: config.discord_auth_url.clone(),
                source,
            }
        })?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone()).map_err(|source| {
            ConfigError::InvalidUrl {
                url: config.discord_token_url.clone(),
                source,
            }
        })?)
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(|source| {
                ConfigError::InvalidUrl {
                    url: config.discord_redirect_url.clone(),
                    source,
                }
            })?,
        )
        .set_auth_type(AuthType::RequestBody);

    Ok(client)
}

pub fn discord_settings(config: &Config) -> DiscordSettings {
    DiscordSettings {
        api_base: config.discord_api_base.trim_end_matches('/').to_string(),
        bot_token: config.discord_bot_token.clone(),
    }
}
