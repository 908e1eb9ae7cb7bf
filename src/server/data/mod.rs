//! Database repository layer.
//!
//! `Repository` is a generic CRUD wrapper over any SeaORM entity and connection (pool or
//! open transaction). Typed repositories such as `AddonRepository` compose it and convert
//! entity models into domain models at this boundary. `UnitOfWork` groups typed
//! repositories over one transaction and commits them with a single call.

pub mod addon;
pub mod repository;
pub mod unit_of_work;

#[cfg(test)]
mod test;
