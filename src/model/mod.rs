//! Data transfer objects exchanged over HTTP.
//!
//! `discord` mirrors the Discord REST API shapes the dashboard consumes, `dashboard`
//! holds the documents returned by the dashboard views and `api` the shared error body.

pub mod api;
pub mod dashboard;
pub mod discord;
