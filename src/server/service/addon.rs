use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::AddonDto,
    server::{
        data::{addon::AddonRepository, unit_of_work::UnitOfWork},
        error::AppError,
        model::addon::AddonSelections,
        util::parse::parse_u64_from_string,
    },
};

/// Service persisting the dashboard's addon selections.
pub struct AddonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddonService<'a> {
    /// Creates a new AddonService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AddonService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves the four addon selections submitted for a guild.
    ///
    /// The guild ID is validated before anything touches the database. All four
    /// selections are then upserted within one unit of work and committed together,
    /// so either every selection is stored or none is.
    ///
    /// # Arguments
    /// - `guild_id` - Guild ID as received from the route
    /// - `selections` - Submitted value for each addon type
    ///
    /// # Returns
    /// - `Ok(())` - All four selections stored
    /// - `Err(AppError::BadRequest)` - `guild_id` is not a valid ID
    /// - `Err(AppError::DbErr)` - Database error; nothing was stored
    pub async fn save_selections(
        &self,
        guild_id: &str,
        selections: AddonSelections,
    ) -> Result<(), AppError> {
        let guild_id = parse_u64_from_string(guild_id)?;

        let unit_of_work = UnitOfWork::begin(self.db).await?;
        for param in selections.into_params(guild_id) {
            unit_of_work.addons().upsert(param).await?;
        }
        unit_of_work.save_changes().await?;

        tracing::info!("Saved addon selections for guild {}", guild_id);

        Ok(())
    }

    /// Gets the addon selections currently stored for a guild.
    pub async fn get_for_guild(&self, guild_id: u64) -> Result<Vec<AddonDto>, AppError> {
        let addons = AddonRepository::new(self.db).get_by_guild(guild_id).await?;

        Ok(addons.into_iter().map(|addon| addon.into_dto()).collect())
    }
}
