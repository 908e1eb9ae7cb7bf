//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let addon = factory::create_addon(&db).await?;
//! let leveling = factory::addon::AddonFactory::new(&db)
//!     .guild_id("123456789")
//!     .addon_type("Leveling")
//!     .build()
//!     .await?;
//! ```

pub mod addon;
pub mod helpers;

pub use addon::{create_addon, create_guild_addon};
