//! Guild Dashboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! dashboard. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, customizable table schemas and a session backed by the same database.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Addon;
//!
//! #[tokio::test]
//! async fn test_addon_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Addon)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
