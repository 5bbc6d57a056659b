use tracing::{debug, warn};

use super::kv::KeyValueStore;

pub const HISTORY_STORAGE_KEY: &str = "githubSearchHistory";
pub const HISTORY_MAX_ITEMS: usize = 5;

/// Most-recent-first list of distinct search terms, persisted as a JSON
/// array under [`HISTORY_STORAGE_KEY`].
///
/// Storage failures never reach the caller: they are logged and the
/// in-memory list stays authoritative.
pub struct HistoryStore {
    storage: Box<dyn KeyValueStore + Send>,
    entries: Vec<String>,
}

impl HistoryStore {
    pub fn new(storage: Box<dyn KeyValueStore + Send>) -> Self {
        Self {
            storage,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Read the persisted list. Missing or malformed data yields an empty list.
    pub fn load(&mut self) -> Vec<String> {
        let raw = match self.storage.get(HISTORY_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored search history");
                return self.replace(Vec::new());
            }
            Err(e) => {
                warn!(error = %e, "Could not read search history");
                return self.replace(Vec::new());
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(stored) => {
                let entries = normalize(stored);
                debug!(count = entries.len(), "Loaded search history");
                self.replace(entries)
            }
            Err(e) => {
                warn!(error = %e, "Could not parse stored search history");
                self.replace(Vec::new())
            }
        }
    }

    /// Move `term` to the front, trim to [`HISTORY_MAX_ITEMS`] and persist.
    pub fn record(&mut self, term: &str) -> Vec<String> {
        let updated = push_term(&self.entries, term);
        self.entries = updated.clone();

        match serde_json::to_string(&self.entries) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(HISTORY_STORAGE_KEY, &raw) {
                    warn!(error = %e, "Could not save search history");
                }
            }
            Err(e) => warn!(error = %e, "Could not serialize search history"),
        }

        updated
    }

    fn replace(&mut self, entries: Vec<String>) -> Vec<String> {
        self.entries = entries;
        self.entries.clone()
    }
}

/// `history` with `term` moved (or inserted) at the front. Matching is
/// exact and case-sensitive.
pub fn push_term(history: &[String], term: &str) -> Vec<String> {
    std::iter::once(term.to_string())
        .chain(history.iter().filter(|t| t.as_str() != term).cloned())
        .take(HISTORY_MAX_ITEMS)
        .collect()
}

fn normalize(stored: Vec<String>) -> Vec<String> {
    let mut entries: Vec<String> = Vec::with_capacity(HISTORY_MAX_ITEMS);
    for term in stored {
        if term.trim().is_empty() || entries.contains(&term) {
            continue;
        }
        entries.push(term);
        if entries.len() == HISTORY_MAX_ITEMS {
            break;
        }
    }
    entries
}
