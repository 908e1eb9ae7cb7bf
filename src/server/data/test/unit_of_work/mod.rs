use crate::server::{
    data::unit_of_work::UnitOfWork,
    error::AppError,
    model::addon::{AddonType, UpsertAddonParam},
};
use entity::prelude::Addon;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod save_changes;
