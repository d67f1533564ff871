//! Calculation history and its key-value persistence

mod entry;
mod ledger;
mod store;

pub use self::entry::HistoryEntry;
pub use self::ledger::{HistoryLog, HISTORY_KEY};
pub use self::store::{JsonFileStore, KeyValueStore, MemoryStore};
