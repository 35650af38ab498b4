use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use classroom_core::Entity;

use super::error::{StoreError, StoreResult};

/// Ordered collection of entities keyed by `Entity::id`.
///
/// Implementations must preserve insertion order for `list` and must perform
/// each call atomically (an `insert` that checks for duplicates cannot
/// interleave with another `insert`).
pub trait Repository<V: Entity>: Send + Sync {
    fn get(&self, id: &V::Id) -> StoreResult<Option<V>>;
    fn list(&self) -> StoreResult<Vec<V>>;
    /// Append a record; fails with `Duplicate` if the id is taken.
    fn insert(&self, value: V) -> StoreResult<V>;
    /// Mutate the record in place and return the result; fails with `Missing`.
    fn update(&self, id: &V::Id, patch: &mut dyn FnMut(&mut V)) -> StoreResult<V>;
    /// Remove the first record with this id; fails with `Missing`.
    fn remove(&self, id: &V::Id) -> StoreResult<V>;
    fn len(&self) -> StoreResult<usize>;
}

impl<V, S> Repository<V> for Arc<S>
where
    V: Entity,
    S: Repository<V> + ?Sized,
{
    fn get(&self, id: &V::Id) -> StoreResult<Option<V>> {
        (**self).get(id)
    }

    fn list(&self) -> StoreResult<Vec<V>> {
        (**self).list()
    }

    fn insert(&self, value: V) -> StoreResult<V> {
        (**self).insert(value)
    }

    fn update(&self, id: &V::Id, patch: &mut dyn FnMut(&mut V)) -> StoreResult<V> {
        (**self).update(id, patch)
    }

    fn remove(&self, id: &V::Id) -> StoreResult<V> {
        (**self).remove(id)
    }

    fn len(&self) -> StoreResult<usize> {
        (**self).len()
    }
}

/// In-memory repository backed by a `Vec` behind an `RwLock`.
#[derive(Debug)]
pub struct InMemoryRepository<V> {
    inner: RwLock<Vec<V>>,
}

impl<V> InMemoryRepository<V> {
    /// Start from an existing record list (kept in the given order).
    pub fn with_records(records: Vec<V>) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<V>>> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<V>>> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

impl<V> Repository<V> for InMemoryRepository<V>
where
    V: Entity + Clone + Send + Sync + 'static,
{
    fn get(&self, id: &V::Id) -> StoreResult<Option<V>> {
        let records = self.read()?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    fn list(&self) -> StoreResult<Vec<V>> {
        Ok(self.read()?.clone())
    }

    fn insert(&self, value: V) -> StoreResult<V> {
        let mut records = self.write()?;
        if records.iter().any(|r| r.id() == value.id()) {
            return Err(StoreError::Duplicate(value.id().to_string()));
        }
        tracing::debug!(id = %value.id(), "record inserted");
        records.push(value.clone());
        Ok(value)
    }

    fn update(&self, id: &V::Id, patch: &mut dyn FnMut(&mut V)) -> StoreResult<V> {
        let mut records = self.write()?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::Missing(id.to_string()))?;
        patch(record);
        Ok(record.clone())
    }

    fn remove(&self, id: &V::Id) -> StoreResult<V> {
        let mut records = self.write()?;
        let idx = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::Missing(id.to_string()))?;
        tracing::debug!(%id, "record removed");
        Ok(records.remove(idx))
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: u32,
        body: String,
    }

    impl Entity for Note {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn note(id: u32, body: &str) -> Note {
        Note {
            id,
            body: body.to_string(),
        }
    }

    fn repo() -> InMemoryRepository<Note> {
        InMemoryRepository::with_records(vec![note(1, "a"), note(2, "b"), note(3, "c")])
    }

    #[test]
    fn list_preserves_insertion_order() {
        let repo = repo();
        repo.insert(note(0, "z")).unwrap();
        let ids: Vec<u32> = repo.list().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 0]);
    }

    #[test]
    fn insert_rejects_duplicate_and_keeps_existing() {
        let repo = repo();
        let err = repo.insert(note(2, "other")).unwrap_err();
        assert_eq!(err, StoreError::Duplicate("2".to_string()));
        assert_eq!(repo.len().unwrap(), 3);
        assert_eq!(repo.get(&2).unwrap().unwrap().body, "b");
    }

    #[test]
    fn update_patches_in_place() {
        let repo = repo();
        let updated = repo.update(&3, &mut |n| n.body.push('!')).unwrap();
        assert_eq!(updated.body, "c!");
        assert_eq!(repo.get(&3).unwrap(), Some(note(3, "c!")));
    }

    #[test]
    fn update_missing_changes_nothing() {
        let repo = repo();
        let before = repo.list().unwrap();
        let err = repo.update(&9, &mut |n| n.body.clear()).unwrap_err();
        assert_eq!(err, StoreError::Missing("9".to_string()));
        assert_eq!(repo.list().unwrap(), before);
    }

    #[test]
    fn remove_takes_exactly_one_record() {
        let repo = repo();
        assert_eq!(repo.remove(&2).unwrap(), note(2, "b"));
        assert_eq!(repo.len().unwrap(), 2);
        assert!(repo.get(&2).unwrap().is_none());
        assert_eq!(repo.remove(&2).unwrap_err(), StoreError::Missing("2".to_string()));
    }

    #[test]
    fn works_through_shared_trait_object() {
        let repo: Arc<dyn Repository<Note>> = Arc::new(repo());
        assert_eq!(repo.len().unwrap(), 3);
        repo.insert(note(4, "d")).unwrap();
        assert_eq!(repo.len().unwrap(), 4);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: inserting a fresh id grows the store by exactly one.
            #[test]
            fn fresh_insert_grows_by_one(id in 4u32..1_000, body in "[a-z]{0,12}") {
                let repo = repo();
                let before = repo.len().unwrap();
                repo.insert(note(id, &body)).unwrap();
                prop_assert_eq!(repo.len().unwrap(), before + 1);
                prop_assert_eq!(repo.get(&id).unwrap(), Some(note(id, &body)));
            }

            /// Property: a duplicate insert leaves the store untouched.
            #[test]
            fn duplicate_insert_is_a_no_op(id in 1u32..=3, body in "[a-z]{0,12}") {
                let repo = repo();
                let before = repo.list().unwrap();
                prop_assert!(repo.insert(note(id, &body)).is_err());
                prop_assert_eq!(repo.list().unwrap(), before);
            }
        }
    }
}
