use crate::server::data::repository::Repository;
use chrono::Utc;
use entity::prelude::Addon;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, IntoActiveModel,
};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod find;

fn new_addon(guild_id: &str, addon_type: &str, value: &str) -> entity::addon::ActiveModel {
    let now = Utc::now();
    entity::addon::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.to_string()),
        addon_type: ActiveValue::Set(addon_type.to_string()),
        value: ActiveValue::Set(value.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

fn repository(db: &DatabaseConnection) -> Repository<'_, DatabaseConnection, Addon> {
    Repository::new(db)
}
