//! In-memory adapter for the `RecordStorage` port.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::ports::storage::{BoxError, CreateOutcome, RecordStorage};

/// Record storage held in a mutex-guarded map.
///
/// Availability can be toggled at runtime to simulate a storage outage:
/// while unavailable, every read and write fails.
#[derive(Debug)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
    available: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStorage {
    /// Creates empty, available storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
            writes: AtomicUsize::new(0),
        }
    }

    /// Creates storage that fails every operation until
    /// [`set_available`](Self::set_available) is called with `true`.
    #[must_use]
    pub fn unavailable() -> Self {
        let storage = Self::new();
        storage.set_available(false);
        storage
    }

    /// Creates storage pre-populated with `contents` under `key`.
    #[must_use]
    pub fn with_record(key: &str, contents: &str) -> Self {
        let storage = Self::new();
        storage
            .records
            .lock()
            .expect("memory storage lock poisoned")
            .insert(key.to_string(), contents.to_string());
        storage
    }

    /// Makes the storage available or unavailable.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of successful `create_if_absent` writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), BoxError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err("memory storage is unavailable".into())
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, BoxError> {
        self.check_available()?;
        let records = self.records.lock().expect("memory storage lock poisoned");
        Ok(records.get(key).cloned())
    }

    fn create_if_absent(&self, key: &str, contents: &str) -> Result<CreateOutcome, BoxError> {
        self.check_available()?;
        let mut records = self.records.lock().expect("memory storage lock poisoned");
        if let Some(existing) = records.get(key) {
            return Ok(CreateOutcome::Existing(existing.clone()));
        }
        records.insert(key.to_string(), contents.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(CreateOutcome::Created)
    }

    fn location(&self, key: &str) -> String {
        format!("memory:{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_if_absent_is_write_once() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.create_if_absent("k", "a").unwrap(), CreateOutcome::Created);
        assert_eq!(
            storage.create_if_absent("k", "b").unwrap(),
            CreateOutcome::Existing("a".to_string())
        );
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("a"));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn unavailable_storage_fails_everything() {
        let storage = MemoryStorage::unavailable();

        assert!(storage.read("k").is_err());
        assert!(storage.create_if_absent("k", "a").is_err());
        assert_eq!(storage.write_count(), 0);

        storage.set_available(true);
        assert_eq!(storage.read("k").unwrap(), None);
    }

    #[test]
    fn with_record_is_readable() {
        let storage = MemoryStorage::with_record("k", "v");
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v"));
        assert_eq!(storage.location("k"), "memory:k");
    }
}
