//! Generic data access over a single SeaORM entity.

use sea_orm::{
    sea_query::{IntoCondition, OnConflict},
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PrimaryKeyTrait, QueryFilter,
};
use std::marker::PhantomData;

/// CRUD operations for entity `E` executed on connection `C`.
///
/// `C` is either the pool (`DatabaseConnection`), where every call is its own statement,
/// or a `DatabaseTransaction` owned by a `UnitOfWork`, where nothing is visible to other
/// connections until the transaction commits.
pub struct Repository<'a, C, E> {
    conn: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> Repository<'a, C, E>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    /// Creates a new repository for entity `E` on the given connection.
    ///
    /// # Arguments
    /// - `conn` - Database pool or open transaction
    ///
    /// # Returns
    /// - `Repository` - New repository instance
    pub fn new(conn: &'a C) -> Self {
        Self {
            conn,
            entity: PhantomData,
        }
    }

    /// Finds a single record by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Record found
    /// - `Ok(None)` - No record with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id<T>(&self, id: T) -> Result<Option<E::Model>, DbErr>
    where
        T: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(self.conn).await
    }

    /// Lists every record of the entity.
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.conn).await
    }

    /// Lists the records matching a filter.
    ///
    /// # Arguments
    /// - `filter` - Column expression or `Condition`, e.g. `Column::GuildId.eq("1")`
    ///
    /// # Returns
    /// - `Ok(Vec<model>)` - Matching records, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_where<F>(&self, filter: F) -> Result<Vec<E::Model>, DbErr>
    where
        F: IntoCondition,
    {
        E::find().filter(filter).all(self.conn).await
    }

    /// Inserts a record and returns it as stored.
    pub async fn add<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(self.conn).await
    }

    /// Inserts many records with one statement.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of records submitted; `0` without touching the database
    ///   when `models` is empty
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add_range<A, I>(&self, models: I) -> Result<u64, DbErr>
    where
        A: ActiveModelTrait<Entity = E>,
        I: IntoIterator<Item = A>,
    {
        let models: Vec<A> = models.into_iter().collect();
        if models.is_empty() {
            return Ok(0);
        }

        let count = models.len() as u64;
        E::insert_many(models).exec(self.conn).await?;

        Ok(count)
    }

    /// Inserts a record, or resolves a unique-key conflict as `on_conflict` describes,
    /// in one statement. Returns the record as stored.
    ///
    /// # Arguments
    /// - `model` - Record to insert
    /// - `on_conflict` - Conflict target and the columns to overwrite on conflict
    ///
    /// # Returns
    /// - `Ok(model)` - Inserted or updated record
    /// - `Err(DbErr)` - Database error, including a conflict target without a unique index
    pub async fn add_or_update<A>(
        &self,
        model: A,
        on_conflict: OnConflict,
    ) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E>,
        E::Model: IntoActiveModel<A>,
    {
        E::insert(model)
            .on_conflict(on_conflict)
            .exec_with_returning(self.conn)
            .await
    }

    /// Writes the set fields of an existing record and returns it as stored.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(self.conn).await
    }

    /// Deletes a record by its primary key fields.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of deleted rows (`0` if it no longer existed)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove<A>(&self, model: A) -> Result<u64, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    {
        let result = model.delete(self.conn).await?;
        Ok(result.rows_affected)
    }

    /// Deletes every given record.
    ///
    /// # Returns
    /// - `Ok(rows)` - Total number of deleted rows
    /// - `Err(DbErr)` - Database error; records deleted before the failure stay deleted
    ///   unless the repository runs inside an uncommitted transaction
    pub async fn remove_range<A, I>(&self, models: I) -> Result<u64, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        I: IntoIterator<Item = A>,
    {
        let mut rows_affected = 0;
        for model in models {
            rows_affected += self.remove(model).await?;
        }

        Ok(rows_affected)
    }
}
