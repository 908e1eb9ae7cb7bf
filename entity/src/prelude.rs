pub use super::addon::Entity as Addon;
