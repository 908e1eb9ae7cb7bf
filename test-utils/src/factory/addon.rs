//! Addon factory for creating test addon entities.
//!
//! Creates addon selections with sensible defaults. Each default factory gets a unique
//! guild ID so records never collide on the (guild, addon type) key.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test addons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::addon::AddonFactory;
///
/// let addon = AddonFactory::new(&db)
///     .guild_id("123456789")
///     .addon_type("Leveling")
///     .value("classic")
///     .build()
///     .await?;
/// ```
pub struct AddonFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    addon_type: String,
    value: String,
}

impl<'a> AddonFactory<'a> {
    /// Creates a new AddonFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric ID
    /// - addon_type: `"Economy"`
    /// - value: `"enabled"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AddonFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            addon_type: "Economy".to_string(),
            value: "enabled".to_string(),
        }
    }

    /// Sets the guild ID the addon belongs to.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the addon type name.
    pub fn addon_type(mut self, addon_type: impl Into<String>) -> Self {
        self.addon_type = addon_type.into();
        self
    }

    /// Sets the selected value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Builds and inserts the addon entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::addon::Model)` - Created addon entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::addon::Model, DbErr> {
        let now = Utc::now();
        entity::addon::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            addon_type: ActiveValue::Set(self.addon_type),
            value: ActiveValue::Set(self.value),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an addon with default values.
///
/// Shorthand for `AddonFactory::new(db).build().await`.
pub async fn create_addon(db: &DatabaseConnection) -> Result<entity::addon::Model, DbErr> {
    AddonFactory::new(db).build().await
}

/// Creates an addon of the given type for a specific guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string or number
/// - `addon_type` - Addon type name
/// - `value` - Selected value
pub async fn create_guild_addon(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    addon_type: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::addon::Model, DbErr> {
    AddonFactory::new(db)
        .guild_id(guild_id)
        .addon_type(addon_type)
        .value(value)
        .build()
        .await
}
