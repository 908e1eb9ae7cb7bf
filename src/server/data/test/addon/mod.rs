use crate::server::{
    data::addon::AddonRepository,
    error::AppError,
    model::addon::{AddonType, UpsertAddonParam},
};
use entity::prelude::Addon;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild;
mod upsert;
