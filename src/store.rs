//! In-memory entity collections: ordered records, id assignment, filtering and validated mutation.
//!
//! `EntityStore` owns one collection and is single-threaded; `SharedStore` wraps it in a lock so
//! every operation (including validate-then-commit) runs as one atomic step across handler tasks.

use crate::error::StoreError;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Schema hook implemented by each record type kept in an `EntityStore`.
pub trait Entity: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Human-readable kind used in messages and logs, e.g. "Student".
    const KIND: &'static str;

    /// Caller-supplied fields for create and full-replace.
    type Draft;
    /// Caller-supplied fields for merge-patch; absent fields keep their stored value.
    type Patch;
    /// Equality/threshold predicates for `list`.
    type Filter;

    fn id(&self) -> u64;

    /// Build a record with the given id, filling schema defaults for absent optional fields.
    /// Fails with `Validation` when a required field has no usable value.
    fn from_draft(id: u64, draft: Self::Draft) -> Result<Self, StoreError>;

    /// Shallow merge: supplied fields overwrite, the rest (and the id) are kept.
    /// Fails with `Validation` when a supplied value cannot be represented, e.g. a null age.
    fn merge(&self, patch: Self::Patch) -> Result<Self, StoreError>;

    fn matches(&self, filter: &Self::Filter) -> bool;

    fn validate(&self) -> Result<(), StoreError>;

    /// Uniqueness rule beyond the id. `None` when `self` may coexist with `other`.
    fn conflicts_with(&self, _other: &Self) -> Option<StoreError> {
        None
    }
}

/// Insertion-ordered collection of one entity kind. Ids are unique and positive; gaps are allowed.
#[derive(Debug, Clone)]
pub struct EntityStore<E: Entity> {
    records: Vec<E>,
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<E: Entity> EntityStore<E> {
    pub fn new(seed: Vec<E>) -> Self {
        Self { records: seed }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    /// `max(existing ids) + 1`, or 1 for an empty collection. Always derived from the current contents.
    pub fn next_id(&self) -> u64 {
        self.records.iter().map(E::id).max().map_or(1, |max| max + 1)
    }

    /// Records matching every predicate of `filter`, in insertion order.
    pub fn list(&self, filter: &E::Filter) -> Vec<E> {
        let out: Vec<E> = self.records.iter().filter(|r| r.matches(filter)).cloned().collect();
        tracing::debug!(kind = E::KIND, matched = out.len(), total = self.records.len(), "list");
        out
    }

    pub fn get(&self, id: u64) -> Result<&E, StoreError> {
        self.position(id)
            .map(|i| &self.records[i])
            .ok_or_else(|| Self::not_found(id))
    }

    /// Assign the next id, validate, check uniqueness, then append. Nothing changes on error.
    pub fn create(&mut self, draft: E::Draft) -> Result<E, StoreError> {
        let candidate = E::from_draft(self.next_id(), draft)?;
        self.admit(&candidate, None)?;
        tracing::info!(kind = E::KIND, id = candidate.id(), "created");
        self.records.push(candidate.clone());
        Ok(candidate)
    }

    /// Merge-patch. The stored record is replaced only when the merged result validates.
    pub fn update(&mut self, id: u64, patch: E::Patch) -> Result<E, StoreError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        let candidate = self.records[index].merge(patch)?;
        self.commit(index, candidate)
    }

    /// Full-replace of every schema field except the id. Validated on a copy before commit.
    pub fn replace(&mut self, id: u64, draft: E::Draft) -> Result<E, StoreError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        let candidate = E::from_draft(id, draft)?;
        self.commit(index, candidate)
    }

    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        self.records.remove(index);
        tracing::info!(kind = E::KIND, id, "deleted");
        Ok(())
    }

    fn commit(&mut self, index: usize, candidate: E) -> Result<E, StoreError> {
        self.admit(&candidate, Some(index))?;
        tracing::info!(kind = E::KIND, id = candidate.id(), "updated");
        self.records[index] = candidate.clone();
        Ok(candidate)
    }

    /// Validation first, then uniqueness against every record except the one at `skip`.
    fn admit(&self, candidate: &E, skip: Option<usize>) -> Result<(), StoreError> {
        let checked = candidate.validate().and_then(|()| {
            self.records
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != skip)
                .find_map(|(_, other)| candidate.conflicts_with(other))
                .map_or(Ok(()), Err)
        });
        if let Err(ref e) = checked {
            tracing::warn!(kind = E::KIND, id = candidate.id(), error = %e, "rejected");
        }
        checked
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn not_found(id: u64) -> StoreError {
        StoreError::NotFound { kind: E::KIND, id }
    }
}

/// Cloneable handle to a lock-guarded `EntityStore`, shared by all request handlers.
#[derive(Debug)]
pub struct SharedStore<E: Entity> {
    inner: Arc<RwLock<EntityStore<E>>>,
}

impl<E: Entity> Clone for SharedStore<E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<E: Entity> SharedStore<E> {
    pub fn new(store: EntityStore<E>) -> Self {
        Self { inner: Arc::new(RwLock::new(store)) }
    }

    pub fn seeded(seed: Vec<E>) -> Self {
        Self::new(EntityStore::new(seed))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn snapshot(&self) -> Vec<E> {
        self.read().records().to_vec()
    }

    pub fn list(&self, filter: &E::Filter) -> Vec<E> {
        self.read().list(filter)
    }

    pub fn get(&self, id: u64) -> Result<E, StoreError> {
        self.read().get(id).cloned()
    }

    pub fn create(&self, draft: E::Draft) -> Result<E, StoreError> {
        self.write().create(draft)
    }

    pub fn update(&self, id: u64, patch: E::Patch) -> Result<E, StoreError> {
        self.write().update(id, patch)
    }

    pub fn replace(&self, id: u64, draft: E::Draft) -> Result<E, StoreError> {
        self.write().replace(id, draft)
    }

    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        self.write().delete(id)
    }

    // Mutations commit in a single assignment, so a poisoned lock still guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, EntityStore<E>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EntityStore<E>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
