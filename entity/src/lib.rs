//! SeaORM entity definitions for the dashboard's persisted data.

pub mod prelude;

pub mod addon;
