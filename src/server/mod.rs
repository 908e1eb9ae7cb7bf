//! Server-side backend of the guild dashboard.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Discord API calls, token refresh and addon persistence
//! - **Data Layer** (`data/`) - Generic repository, unit of work and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guard
//!
//! Supporting modules: `config` (environment), `state` (shared clients and pools),
//! `startup` (initialization) and `router` (routes and API documentation).

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
