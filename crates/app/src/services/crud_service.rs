//! CRUD service: the read, bulk-read, create and merge-update contract
//! shared by every bank service.

use std::collections::HashSet;

use bank_domain::error::{BankError, NotFoundError};
use bank_domain::record::Record;

use crate::mapping::RecordMapper;
use crate::ports::{EntityStore, IdOf, StoreTransaction};
use crate::validation::ensure_same_size;

/// Application service for one record kind.
///
/// Reads go straight to the store. `create` and `update` each run inside a
/// store transaction and perform exactly one write.
pub struct CrudService<S, M> {
    store: S,
    mapper: M,
}

impl<S, M> CrudService<S, M>
where
    S: EntityStore,
    M: RecordMapper<Record = S::Record>,
{
    /// Create a new service backed by the given store and mapper.
    pub fn new(store: S, mapper: M) -> Self {
        Self { store, mapper }
    }

    /// Look up one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::NotFound`] when no record with `id` exists, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self), fields(kind = <S::Record as Record>::KIND))]
    pub async fn read_by_id(&self, id: IdOf<S>) -> Result<M::Dto, BankError> {
        let record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Record {
                entity: <S::Record as Record>::KIND,
                id: id.to_string(),
            })?;
        Ok(self.mapper.to_dto(&record))
    }

    /// Look up every record in `ids`, in the order the store returns them.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::NotFound`] when the store returns a different
    /// number of records than ids were requested, or a storage error.
    #[tracing::instrument(skip(self), fields(kind = <S::Record as Record>::KIND))]
    pub async fn read_all_by_id(&self, ids: &[IdOf<S>]) -> Result<Vec<M::Dto>, BankError> {
        let records = self.store.find_all_by_id(ids).await?;
        ensure_same_size(ids, &records, || NotFoundError::Bulk {
            entity: <S::Record as Record>::KIND,
            requested: ids.len(),
            found: records.len(),
            missing: missing_ids(ids, &records),
        })?;
        Ok(self.mapper.to_list_dto(&records))
    }

    /// Persist a new record built from `dto` and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::Validation`] if a required field is missing, or a
    /// storage error (including constraint violations) from the store.
    #[tracing::instrument(skip(self, dto), fields(kind = <S::Record as Record>::KIND))]
    pub async fn create(&self, dto: M::Dto) -> Result<M::Dto, BankError> {
        let record = self.mapper.to_entity(&dto)?;

        let mut tx = self.store.begin().await?;
        let saved = tx.save(record).await?;
        tx.commit().await?;

        tracing::debug!(id = ?saved.id(), "record created");
        Ok(self.mapper.to_dto(&saved))
    }

    /// Merge the fields present in `dto` onto the record `id` and persist it.
    ///
    /// A `None` payload rewrites the record unchanged. The lookup and the
    /// write share one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::NotFound`] when no record with `id` exists
    /// (whatever the payload), or a storage error from the store.
    #[tracing::instrument(skip(self, dto), fields(kind = <S::Record as Record>::KIND))]
    pub async fn update(&self, id: IdOf<S>, dto: Option<M::Dto>) -> Result<M::Dto, BankError> {
        let mut tx = self.store.begin().await?;
        let existing = tx
            .find_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::UpdateTarget {
                entity: <S::Record as Record>::KIND,
                id: id.to_string(),
            })?;

        let merged = self.mapper.merge_to_entity(dto.as_ref(), existing);
        let saved = tx.save(merged).await?;
        tx.commit().await?;

        Ok(self.mapper.to_dto(&saved))
    }
}

/// Requested ids with no matching record, without duplicates.
fn missing_ids<R: Record>(requested: &[R::Id], found: &[R]) -> Vec<String> {
    let found: HashSet<R::Id> = found.iter().filter_map(Record::id).collect();
    let mut reported = HashSet::new();
    requested
        .iter()
        .filter(|id| !found.contains(*id) && reported.insert(**id))
        .map(ToString::to_string)
        .collect()
}
