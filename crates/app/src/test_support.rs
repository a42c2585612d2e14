//! In-memory entity store used by the app-layer tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::{Mutex, OwnedMutexGuard};

use bank_domain::error::BankError;
use bank_domain::record::Record;

use crate::ports::{EntityStore, IdOf, StoreTransaction};

struct State<R> {
    records: BTreeMap<i64, R>,
    next_id: i64,
}

impl<R: Record> State<R> {
    fn save(&mut self, record: R) -> R {
        let record = match record.id() {
            Some(_) => record,
            None => {
                self.next_id += 1;
                record.with_id(R::Id::from(self.next_id))
            }
        };
        let key: i64 = record.id().map(Into::into).unwrap_or_default();
        self.records.insert(key, record.clone());
        record
    }
}

impl<R: Clone> Clone for State<R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            next_id: self.next_id,
        }
    }
}

/// Transactional in-memory store. A transaction holds the lock until it is
/// committed or dropped.
pub struct InMemoryStore<R> {
    state: Arc<Mutex<State<R>>>,
    writes: Arc<AtomicUsize>,
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                records: BTreeMap::new(),
                next_id: 0,
            })),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl<R: Record> InMemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `records` as-is (they are expected to carry ids).
    pub async fn seed(&self, records: impl IntoIterator<Item = R>) {
        let mut state = self.state.lock().await;
        for record in records {
            let key: i64 = record.id().map(Into::into).unwrap_or_default();
            state.next_id = state.next_id.max(key);
            state.records.insert(key, record);
        }
    }

    pub async fn get(&self, id: i64) -> Option<R> {
        self.state.lock().await.records.get(&id).cloned()
    }

    /// Number of committed writes so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl<R: Record> EntityStore for InMemoryStore<R> {
    type Record = R;
    type Transaction = InMemoryTransaction<R>;

    async fn find_by_id(&self, id: R::Id) -> Result<Option<R>, BankError> {
        Ok(self.get(id.into()).await)
    }

    async fn find_all_by_id(&self, ids: &[IdOf<Self>]) -> Result<Vec<R>, BankError> {
        let keys: Vec<i64> = ids.iter().map(|id| (*id).into()).collect();
        let state = self.state.lock().await;
        Ok(state
            .records
            .iter()
            .filter(|(key, _)| keys.contains(key))
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn save(&self, record: R) -> Result<R, BankError> {
        let saved = self.state.lock().await.save(record);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(saved)
    }

    async fn begin(&self) -> Result<InMemoryTransaction<R>, BankError> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let staged = guard.clone();
        Ok(InMemoryTransaction {
            guard,
            staged,
            staged_writes: 0,
            writes: Arc::clone(&self.writes),
        })
    }
}

pub struct InMemoryTransaction<R> {
    guard: OwnedMutexGuard<State<R>>,
    staged: State<R>,
    staged_writes: usize,
    writes: Arc<AtomicUsize>,
}

impl<R: Record> StoreTransaction for InMemoryTransaction<R> {
    type Record = R;

    async fn find_by_id(&mut self, id: R::Id) -> Result<Option<R>, BankError> {
        let key: i64 = id.into();
        Ok(self.staged.records.get(&key).cloned())
    }

    async fn save(&mut self, record: R) -> Result<R, BankError> {
        self.staged_writes += 1;
        Ok(self.staged.save(record))
    }

    async fn commit(mut self) -> Result<(), BankError> {
        *self.guard = self.staged;
        self.writes.fetch_add(self.staged_writes, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_domain::atm::Atm;

    fn atm(address: &str) -> Atm {
        Atm {
            id: None,
            address: address.to_string(),
            start_of_work: None,
            end_of_work: None,
            all_hours: true,
            branch_id: None,
        }
    }

    #[tokio::test]
    async fn should_discard_staged_writes_when_transaction_dropped() {
        let store = InMemoryStore::<Atm>::new();

        let mut tx = store.begin().await.unwrap();
        let staged = tx.save(atm("Airport")).await.unwrap();
        drop(tx);

        assert!(store.get(staged.id.unwrap().get()).await.is_none());
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn should_publish_staged_writes_when_transaction_committed() {
        let store = InMemoryStore::<Atm>::new();

        let mut tx = store.begin().await.unwrap();
        let staged = tx.save(atm("Airport")).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(store.get(staged.id.unwrap().get()).await, Some(staged));
        assert_eq!(store.writes(), 1);
    }
}
