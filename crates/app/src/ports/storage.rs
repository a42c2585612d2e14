//! Storage port: the entity store every CRUD service persists through.

use std::future::Future;

use bank_domain::error::BankError;
use bank_domain::record::Record;

/// Identifier type of the records held by store `S`.
pub type IdOf<S> = <<S as EntityStore>::Record as Record>::Id;

/// Persists records of one kind, keyed by their numeric identifier.
pub trait EntityStore: Send + Sync {
    type Record: Record;

    /// Unit of work returned by [`EntityStore::begin`].
    type Transaction: StoreTransaction<Record = Self::Record>;

    /// Look up one record.
    fn find_by_id(
        &self,
        id: IdOf<Self>,
    ) -> impl Future<Output = Result<Option<Self::Record>, BankError>> + Send;

    /// Look up every record whose id is in `ids`.
    ///
    /// Ordering and the handling of duplicate ids are up to the store; callers
    /// only rely on the number of records returned.
    fn find_all_by_id(
        &self,
        ids: &[IdOf<Self>],
    ) -> impl Future<Output = Result<Vec<Self::Record>, BankError>> + Send;

    /// Insert a record without an id (assigning one) or replace the record
    /// with the same id.
    fn save(
        &self,
        record: Self::Record,
    ) -> impl Future<Output = Result<Self::Record, BankError>> + Send;

    /// Open a transaction. Reads and writes made through it are isolated from
    /// other writers until [`StoreTransaction::commit`].
    fn begin(&self) -> impl Future<Output = Result<Self::Transaction, BankError>> + Send;
}

/// A store transaction. Dropping it without committing discards its writes.
pub trait StoreTransaction: Send {
    type Record: Record;

    fn find_by_id(
        &mut self,
        id: <Self::Record as Record>::Id,
    ) -> impl Future<Output = Result<Option<Self::Record>, BankError>> + Send;

    fn save(
        &mut self,
        record: Self::Record,
    ) -> impl Future<Output = Result<Self::Record, BankError>> + Send;

    fn commit(self) -> impl Future<Output = Result<(), BankError>> + Send;
}
