pub mod history;
pub mod kv;

pub use history::HistoryStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
