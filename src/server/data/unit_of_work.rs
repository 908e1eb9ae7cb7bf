//! Transaction-scoped grouping of repositories.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::data::addon::AddonRepository;

/// Groups repository writes into one atomic commit.
///
/// Every repository handed out shares the same open transaction. `save_changes` commits
/// all of their writes at once; dropping the unit of work without saving rolls them back.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    /// Opens a transaction on the pool.
    ///
    /// # Returns
    /// - `Ok(UnitOfWork)` - Ready to hand out repositories
    /// - `Err(DbErr)` - Failed to acquire a connection or begin the transaction
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let txn = db.begin().await?;
        Ok(Self { txn })
    }

    /// Addon selections within this unit of work.
    pub fn addons(&self) -> AddonRepository<'_, DatabaseTransaction> {
        AddonRepository::new(&self.txn)
    }

    /// Commits every pending change.
    ///
    /// # Returns
    /// - `Ok(())` - All changes are now visible to other connections
    /// - `Err(DbErr)` - Commit failed; none of the changes are persisted
    pub async fn save_changes(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }
}
