//! Addon data repository for database operations.
//!
//! This module provides the `AddonRepository` for managing per-guild addon selections.
//! Records are keyed by (guild ID, addon type) and replaced wholesale on every upsert.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
};

use crate::server::{
    data::repository::Repository,
    model::addon::{Addon, AddonType, UpsertAddonParam},
};

/// Repository providing database operations for addon selections.
pub struct AddonRepository<'a, C> {
    repository: Repository<'a, C, entity::prelude::Addon>,
}

impl<'a, C> AddonRepository<'a, C>
where
    C: ConnectionTrait,
{
    /// Creates a new AddonRepository instance.
    ///
    /// # Arguments
    /// - `conn` - Database pool or open transaction
    ///
    /// # Returns
    /// - `AddonRepository` - New repository instance
    pub fn new(conn: &'a C) -> Self {
        Self {
            repository: Repository::new(conn),
        }
    }

    /// Finds the selection of one addon type for a guild.
    ///
    /// # Returns
    /// - `Ok(Some(Addon))` - Selection stored for the guild
    /// - `Ok(None)` - Nothing stored yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        guild_id: u64,
        addon_type: AddonType,
    ) -> Result<Option<Addon>, DbErr> {
        let entity = self
            .repository
            .find_where(
                Condition::all()
                    .add(entity::addon::Column::GuildId.eq(guild_id.to_string()))
                    .add(entity::addon::Column::AddonType.eq(addon_type.as_str())),
            )
            .await?
            .into_iter()
            .next();

        entity.map(Addon::from_entity).transpose()
    }

    /// Gets every addon selection stored for a guild, oldest record first.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<Addon>, DbErr> {
        let mut entities = self
            .repository
            .find_where(entity::addon::Column::GuildId.eq(guild_id.to_string()))
            .await?;
        entities.sort_by_key(|entity| entity.id);

        entities.into_iter().map(Addon::from_entity).collect()
    }

    /// Creates or replaces the selection of one addon type for a guild.
    ///
    /// Runs as a single insert that falls back to updating `value` and `updated_at` on the
    /// unique (guild, addon type) key, so `created_at` and the ID of an existing record are
    /// preserved and concurrent first submissions cannot collide.
    ///
    /// # Arguments
    /// - `param` - Guild, addon type and selected value
    ///
    /// # Returns
    /// - `Ok(Addon)` - The created or updated addon
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertAddonParam) -> Result<Addon, DbErr> {
        let now = Utc::now();

        let entity = self
            .repository
            .add_or_update(
                entity::addon::ActiveModel {
                    id: ActiveValue::NotSet,
                    guild_id: ActiveValue::Set(param.guild_id.to_string()),
                    addon_type: ActiveValue::Set(param.addon_type.to_string()),
                    value: ActiveValue::Set(param.value),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                },
                OnConflict::columns([
                    entity::addon::Column::GuildId,
                    entity::addon::Column::AddonType,
                ])
                .update_columns([
                    entity::addon::Column::Value,
                    entity::addon::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .await?;

        Addon::from_entity(entity)
    }
}
