//! Fixture-backed repositories and the services built on them.
//!
//! Every collection is held behind the object-safe [`Repository`] trait so that services receive
//! their data explicitly and tests can seed exactly the records they need. The only
//! implementation is [`InMemoryRepository`]: a `RwLock<Vec<T>>` searched linearly.
//!
//! - [`provider`]: provider directory lookups
//! - [`quality`]: questionnaires and questionnaire responses
//! - [`attendance`]: registered nurse attendance search and updates

pub mod attendance;
pub mod provider;
pub mod quality;

use crate::{CoreError, CoreResult};
use fhir::{
    AttendanceSummary, HealthcareService, Provider, Questionnaire, QuestionnaireResponse,
    RegisteredNurseAttendance,
};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A stored record addressable by its id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_record!(
    Provider,
    HealthcareService,
    RegisteredNurseAttendance,
    AttendanceSummary,
    Questionnaire,
    QuestionnaireResponse,
);

/// Storage for one collection of records.
///
/// Readers receive clones; nothing ever hands out a reference into the collection.
pub trait Repository<T: Record>: Send + Sync {
    /// Snapshot of every record, in insertion order.
    fn list(&self) -> Vec<T>;

    fn get(&self, id: &str) -> Option<T>;

    /// Appends `record`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if a record with the same id is already stored.
    fn append(&self, record: T) -> CoreResult<T>;

    /// Applies `change` to the record with `id` under the write lock and returns the updated
    /// record, or `None` if no such record exists.
    fn update(&self, id: &str, change: &mut dyn FnMut(&mut T)) -> Option<T>;

    /// Records for which `predicate` holds, in insertion order.
    fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.list().into_iter().filter(|r| predicate(r)).collect()
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// Process-lifetime, in-memory collection.
#[derive(Debug, Default)]
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Seeds a repository with `records`. Later duplicates of an id are dropped.
    pub fn seeded(records: Vec<T>) -> Self {
        let mut unique: Vec<T> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|r| r.id() == record.id()) {
                tracing::warn!(id = record.id(), "dropping duplicate fixture record");
                continue;
            }
            unique.push(record);
        }
        Self {
            records: RwLock::new(unique),
        }
    }

    // A panic while holding the lock leaves the data itself intact: every mutation is a single
    // push or field assignment.
    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    fn get(&self, id: &str) -> Option<T> {
        self.read().iter().find(|r| r.id() == id).cloned()
    }

    fn append(&self, record: T) -> CoreResult<T> {
        let mut records = self.write();
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(CoreError::InvalidInput(format!(
                "a record with id '{}' already exists",
                record.id()
            )));
        }
        records.push(record.clone());
        Ok(record)
    }

    fn update(&self, id: &str, change: &mut dyn FnMut(&mut T)) -> Option<T> {
        let mut records = self.write();
        let record = records.iter_mut().find(|r| r.id() == id)?;
        change(record);
        Some(record.clone())
    }

    fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.read()
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: String,
        value: u32,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, value: u32) -> Item {
        Item {
            id: id.to_owned(),
            value,
        }
    }

    #[test]
    fn append_rejects_duplicate_ids() {
        let repo = InMemoryRepository::new();
        repo.append(item("a", 1)).expect("first append");

        let err = repo.append(item("a", 2)).expect_err("duplicate id");
        match err {
            CoreError::InvalidInput(msg) => assert!(msg.contains("'a'")),
            other => panic!("expected InvalidInput error, got {other:?}"),
        }
        assert_eq!(repo.get("a").map(|i| i.value), Some(1));
    }

    #[test]
    fn seeded_drops_later_duplicates() {
        let repo = InMemoryRepository::seeded(vec![item("a", 1), item("b", 2), item("a", 3)]);
        let ids: Vec<String> = repo.list().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(repo.get("a").map(|i| i.value), Some(1));
    }

    #[test]
    fn update_mutates_in_place_and_reports_missing() {
        let repo = InMemoryRepository::seeded(vec![item("a", 1)]);

        let updated = repo.update("a", &mut |i| i.value += 10).expect("record exists");
        assert_eq!(updated.value, 11);
        assert_eq!(repo.get("a").map(|i| i.value), Some(11));

        assert!(repo.update("missing", &mut |i| i.value = 0).is_none());
    }

    #[test]
    fn filter_preserves_insertion_order() {
        let repo = InMemoryRepository::seeded(vec![item("a", 1), item("b", 2), item("c", 3)]);
        let odd: Vec<u32> = repo
            .filter(&|i| i.value % 2 == 1)
            .into_iter()
            .map(|i| i.value)
            .collect();
        assert_eq!(odd, vec![1, 3]);
    }

    #[test]
    fn concurrent_appends_keep_ids_unique() {
        let repo: Arc<dyn Repository<Item>> = Arc::new(InMemoryRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        // Every thread races for the same ids; exactly one append per id wins.
                        let _ = repo.append(item(&format!("id-{i}"), n));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread should not panic");
        }

        assert_eq!(repo.list().len(), 25);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let repo = Arc::new(InMemoryRepository::seeded(vec![item("a", 1)]));

        let poisoner = Arc::clone(&repo);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.records.write().expect("lock is healthy");
            panic!("poison the lock");
        })
        .join();

        assert!(repo.records.is_poisoned());
        assert_eq!(repo.get("a").map(|i| i.value), Some(1));
        repo.append(item("b", 2)).expect("append after poisoning");
    }
}
