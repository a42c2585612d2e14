//! Generic `SQLite` implementation of [`EntityStore`].

use std::marker::PhantomData;

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};

use bank_app::ports::{EntityStore, StoreTransaction};
use bank_domain::error::BankError;
use bank_domain::record::Record;

use crate::error::StorageError;

/// A `SQLite` query with positional arguments.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// How one record kind maps onto its table.
///
/// The table must have an `INTEGER PRIMARY KEY` column named `id`.
pub trait Table: Send + Sync + 'static {
    type Record: Record;

    const NAME: &'static str;
    const SELECT_BY_ID: &'static str;

    /// `INSERT … ON CONFLICT(id) DO UPDATE` statement whose first parameter is
    /// the (nullable) id.
    const UPSERT: &'static str;

    /// Bind the record's id followed by its columns, in [`Table::UPSERT`] order.
    fn bind_upsert<'q>(query: SqliteQuery<'q>, record: &Self::Record) -> SqliteQuery<'q>;

    /// Decode one row into a record.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] when a column is missing or holds an
    /// unparseable value.
    fn decode(row: &SqliteRow) -> Result<Self::Record, sqlx::Error>;
}

async fn fetch_by_id<'e, T, E>(executor: E, id: i64) -> Result<Option<T::Record>, StorageError>
where
    T: Table,
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query(T::SELECT_BY_ID)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.as_ref().map(T::decode).transpose()?)
}

async fn fetch_all_by_id<'e, T, E>(executor: E, ids: &[i64]) -> Result<Vec<T::Record>, StorageError>
where
    T: Table,
    E: Executor<'e, Database = Sqlite>,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM ");
    builder.push(T::NAME).push(" WHERE id IN (");
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY id");

    let rows = builder.build().fetch_all(executor).await?;
    Ok(rows.iter().map(T::decode).collect::<Result<_, _>>()?)
}

async fn upsert<'e, T, E>(executor: E, record: T::Record) -> Result<T::Record, StorageError>
where
    T: Table,
    E: Executor<'e, Database = Sqlite>,
{
    let result = T::bind_upsert(sqlx::query(T::UPSERT), &record)
        .execute(executor)
        .await?;

    Ok(match record.id() {
        Some(_) => record,
        None => {
            let id = result.last_insert_rowid();
            record.with_id(id.into())
        }
    })
}

fn raw_ids<I: Into<i64> + Copy>(ids: &[I]) -> Vec<i64> {
    ids.iter().map(|id| (*id).into()).collect()
}

/// `SQLite`-backed store for the records described by `T`.
pub struct SqliteStore<T> {
    pool: SqlitePool,
    table: PhantomData<fn() -> T>,
}

impl<T> SqliteStore<T> {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            table: PhantomData,
        }
    }
}

impl<T: Table> EntityStore for SqliteStore<T> {
    type Record = T::Record;
    type Transaction = SqliteTransaction<T>;

    async fn find_by_id(
        &self,
        id: <T::Record as Record>::Id,
    ) -> Result<Option<T::Record>, BankError> {
        Ok(fetch_by_id::<T, _>(&self.pool, id.into()).await?)
    }

    async fn find_all_by_id(
        &self,
        ids: &[<T::Record as Record>::Id],
    ) -> Result<Vec<T::Record>, BankError> {
        let ids = raw_ids(ids);
        Ok(fetch_all_by_id::<T, _>(&self.pool, &ids).await?)
    }

    async fn save(&self, record: T::Record) -> Result<T::Record, BankError> {
        Ok(upsert::<T, _>(&self.pool, record).await?)
    }

    /// Opens an `IMMEDIATE` transaction: the write lock is taken up front.
    async fn begin(&self) -> Result<SqliteTransaction<T>, BankError> {
        let tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(StorageError::from)?;
        Ok(SqliteTransaction {
            tx,
            table: PhantomData,
        })
    }
}

/// An open `SQLite` transaction. Rolled back on drop unless committed.
pub struct SqliteTransaction<T> {
    tx: sqlx::Transaction<'static, Sqlite>,
    table: PhantomData<fn() -> T>,
}

impl<T: Table> StoreTransaction for SqliteTransaction<T> {
    type Record = T::Record;

    async fn find_by_id(
        &mut self,
        id: <T::Record as Record>::Id,
    ) -> Result<Option<T::Record>, BankError> {
        Ok(fetch_by_id::<T, _>(&mut *self.tx, id.into()).await?)
    }

    async fn save(&mut self, record: T::Record) -> Result<T::Record, BankError> {
        Ok(upsert::<T, _>(&mut *self.tx, record).await?)
    }

    async fn commit(self) -> Result<(), BankError> {
        self.tx.commit().await.map_err(StorageError::from)?;
        Ok(())
    }
}
