//! Append-only calculation history

use super::entry::HistoryEntry;
use super::store::KeyValueStore;
use crate::error::StoreError;
use log::{debug, info, warn};

/// Fixed key the serialized history lives under
pub const HISTORY_KEY: &str = "interestHistory";

/// Insertion-ordered history log.
///
/// Entries are loaded once when the log is opened. Every append or clear
/// rewrites the whole serialized sequence to the store.
#[derive(Debug)]
pub struct HistoryLog<S: KeyValueStore> {
    store: S,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryLog<S> {
    /// Load the stored history. A missing key is an empty log; a stored value
    /// that does not parse is logged and replaced on the next write.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let entries = match store.get(HISTORY_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding unreadable history under {}: {}", HISTORY_KEY, e);
                    Vec::new()
                }
            },
        };
        debug!("Loaded {} history entries", entries.len());
        Ok(Self { store, entries })
    }

    /// Add an entry at the end and persist the whole log
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), StoreError> {
        self.entries.push(entry);
        if let Err(e) = self.persist() {
            self.entries.pop();
            return Err(e);
        }
        debug!("Appended history entry #{}", self.entries.len());
        Ok(())
    }

    /// Remove every entry and persist the empty log
    pub fn clear(&mut self) -> Result<(), StoreError> {
        let previous = std::mem::take(&mut self.entries);
        if let Err(e) = self.persist() {
            self.entries = previous;
            return Err(e);
        }
        info!("Cleared {} history entries", previous.len());
        Ok(())
    }

    /// All entries in insertion order
    pub fn load_all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(&self.entries)?;
        self.store.set(HISTORY_KEY, serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{CalculationInput, InterestEngine, TimeSpan};
    use crate::history::store::{JsonFileStore, MemoryStore};
    use chrono::{TimeZone, Utc};

    fn entry(principal: f64) -> HistoryEntry {
        let input = CalculationInput::new(principal, 5.0, TimeSpan::years(1.0));
        let result = InterestEngine::default().compute(&input).unwrap();
        HistoryEntry::new(&input, &result, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = HistoryLog::open(MemoryStore::new()).unwrap();
        for p in [100.0, 200.0, 300.0] {
            log.append(entry(p)).unwrap();
        }

        let principals: Vec<f64> = log.load_all().iter().map(|e| e.principal).collect();
        assert_eq!(principals, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_reopen_reads_persisted_entries() {
        let mut log = HistoryLog::open(MemoryStore::new()).unwrap();
        log.append(entry(100.0)).unwrap();
        log.append(entry(200.0)).unwrap();

        let reopened = HistoryLog::open(log.store().clone()).unwrap();
        assert_eq!(reopened.load_all(), log.load_all());
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::open(MemoryStore::new()).unwrap();
        log.append(entry(100.0)).unwrap();
        log.clear().unwrap();

        assert!(log.is_empty());
        assert_eq!(log.store().get(HISTORY_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_history_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "{broken".to_string()).unwrap();

        let log = HistoryLog::open(store).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_corrupt_history_file_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{truncated").unwrap();

        let mut log = HistoryLog::open(JsonFileStore::new(&path)).unwrap();
        assert!(log.is_empty());
        log.append(entry(100.0)).unwrap();

        let reopened = HistoryLog::open(JsonFileStore::new(&path)).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.load_all()[0].principal, 100.0);
    }

    #[test]
    fn test_failed_write_leaves_log_unchanged() {
        let mut log = HistoryLog::open(ReadOnlyStore).unwrap();
        assert!(log.append(entry(100.0)).is_err());
        assert_eq!(log.len(), 0);
    }
}
