//! Domain models for per-guild addon selections.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::model::dashboard::AddonDto;

/// Feature a guild can configure from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddonType {
    TicTacToe,
    Economy,
    Leveling,
    Ticketing,
}

impl AddonType {
    /// Every addon type, in the order the dashboard form submits them.
    pub const ALL: [AddonType; 4] = [
        AddonType::TicTacToe,
        AddonType::Economy,
        AddonType::Leveling,
        AddonType::Ticketing,
    ];

    /// Name stored in the `addon_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddonType::TicTacToe => "TicTacToe",
            AddonType::Economy => "Economy",
            AddonType::Leveling => "Leveling",
            AddonType::Ticketing => "Ticketing",
        }
    }
}

impl fmt::Display for AddonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddonType::ALL
            .into_iter()
            .find(|addon_type| addon_type.as_str() == s)
            .ok_or_else(|| format!("Unknown addon type '{}'", s))
    }
}

/// Stored addon selection for a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct Addon {
    pub id: i32,
    pub guild_id: u64,
    pub addon_type: AddonType,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Addon {
    /// Converts an entity model to an addon domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Addon)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored guild_id or addon_type is not valid
    pub fn from_entity(entity: entity::addon::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;
        let addon_type = entity.addon_type.parse::<AddonType>().map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            guild_id,
            addon_type,
            value: entity.value,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> AddonDto {
        AddonDto {
            addon_type: self.addon_type.to_string(),
            value: self.value,
        }
    }
}

/// Parameters for upserting a single addon selection.
///
/// Creates a new record if none exists for (guild, addon type), or replaces the value
/// of the existing one.
#[derive(Debug, Clone)]
pub struct UpsertAddonParam {
    pub guild_id: u64,
    pub addon_type: AddonType,
    pub value: String,
}

/// The four selections submitted together from the dashboard form.
#[derive(Debug, Clone)]
pub struct AddonSelections {
    pub tic_tac_toe: String,
    pub economy: String,
    pub leveling: String,
    pub ticketing: String,
}

impl AddonSelections {
    /// Pairs each selection with its addon type.
    pub fn into_params(self, guild_id: u64) -> [UpsertAddonParam; 4] {
        let param = |addon_type, value| UpsertAddonParam {
            guild_id,
            addon_type,
            value,
        };

        [
            param(AddonType::TicTacToe, self.tic_tac_toe),
            param(AddonType::Economy, self.economy),
            param(AddonType::Leveling, self.leveling),
            param(AddonType::Ticketing, self.ticketing),
        ]
    }
}
