use anyhow::{Result, bail};
use ghsearch::storage::history::{HISTORY_STORAGE_KEY, push_term};
use ghsearch::storage::{FileStore, HistoryStore, KeyValueStore, MemoryStore};
use tempfile::TempDir;

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn store_with(raw: &str) -> (HistoryStore, MemoryStore) {
    let memory = MemoryStore::new();
    memory.set(HISTORY_STORAGE_KEY, raw).unwrap();
    let mut history = HistoryStore::new(Box::new(memory.clone()));
    history.load();
    (history, memory)
}

/// Storage that fails every call.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        bail!("storage unavailable")
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        bail!("storage unavailable")
    }
}

// --- push_term ---

#[test]
fn test_existing_term_moves_to_front() {
    let history = terms(&["a", "b", "c", "d", "e"]);
    assert_eq!(push_term(&history, "c"), terms(&["c", "a", "b", "d", "e"]));
}

#[test]
fn test_new_term_on_full_list_drops_oldest() {
    let history = terms(&["a", "b", "c", "d", "e"]);
    assert_eq!(push_term(&history, "f"), terms(&["f", "a", "b", "c", "d"]));
}

#[test]
fn test_front_term_is_unchanged() {
    let history = terms(&["a", "b", "c"]);
    assert_eq!(push_term(&history, "a"), history);
}

#[test]
fn test_match_is_case_sensitive() {
    let history = terms(&["octocat"]);
    assert_eq!(
        push_term(&history, "Octocat"),
        terms(&["Octocat", "octocat"])
    );
}

#[test]
fn test_push_onto_empty() {
    assert_eq!(push_term(&[], "torvalds"), terms(&["torvalds"]));
}

// --- load ---

#[test]
fn test_load_missing_key_is_empty() {
    let mut history = HistoryStore::new(Box::new(MemoryStore::new()));
    assert!(history.load().is_empty());
    assert!(history.entries().is_empty());
}

#[test]
fn test_load_malformed_json_is_empty() {
    let (history, _) = store_with("not valid json!!!");
    assert!(history.entries().is_empty());
}

#[test]
fn test_load_wrong_json_shape_is_empty() {
    let (history, _) = store_with(r#"{"terms": ["a"]}"#);
    assert!(history.entries().is_empty());
}

#[test]
fn test_load_stored_list() {
    let (history, _) = store_with(r#"["rust", "octocat"]"#);
    assert_eq!(history.entries(), terms(&["rust", "octocat"]).as_slice());
}

#[test]
fn test_load_normalizes_invalid_list() {
    let (history, _) = store_with(r#"["a", "b", "a", " ", "c", "d", "e", "f"]"#);
    assert_eq!(
        history.entries(),
        terms(&["a", "b", "c", "d", "e"]).as_slice()
    );
}

#[test]
fn test_load_storage_error_is_swallowed() {
    let mut history = HistoryStore::new(Box::new(BrokenStore));
    assert!(history.load().is_empty());
}

// --- record ---

#[test]
fn test_record_persists_json_array() {
    let memory = MemoryStore::new();
    let mut history = HistoryStore::new(Box::new(memory.clone()));
    history.load();

    history.record("octocat");
    let updated = history.record("torvalds");

    assert_eq!(updated, terms(&["torvalds", "octocat"]));
    let raw = memory.get(HISTORY_STORAGE_KEY).unwrap().unwrap();
    let stored: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, updated);
}

#[test]
fn test_record_survives_reload() {
    let memory = MemoryStore::new();
    let mut first = HistoryStore::new(Box::new(memory.clone()));
    first.load();
    for term in ["a", "b", "c", "d", "e", "f"] {
        first.record(term);
    }

    let mut second = HistoryStore::new(Box::new(memory));
    assert_eq!(second.load(), terms(&["f", "e", "d", "c", "b"]));
}

#[test]
fn test_record_with_failing_storage_updates_memory() {
    let mut history = HistoryStore::new(Box::new(BrokenStore));
    history.load();

    assert_eq!(history.record("octocat"), terms(&["octocat"]));
    assert_eq!(history.record("rust"), terms(&["rust", "octocat"]));
    assert_eq!(history.entries(), terms(&["rust", "octocat"]).as_slice());
}

// --- FileStore ---

#[test]
fn test_file_store_set_and_get() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());

    store.set("key", "[\"a\"]").unwrap();
    assert_eq!(store.get("key").unwrap(), Some("[\"a\"]".to_string()));
    assert!(dir.path().join("key.json").exists());
}

#[test]
fn test_file_store_missing_key_is_none() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());

    assert_eq!(store.get("nonexistent").unwrap(), None);
}

#[test]
fn test_file_store_key_sanitization() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());

    store.set("a/b\\c", "value").unwrap();
    assert!(dir.path().join("a_b_c.json").exists());
    assert_eq!(store.get("a/b\\c").unwrap(), Some("value".to_string()));
}

#[test]
fn test_file_store_creates_dir_on_set() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("sub").join("dir");
    let store = FileStore::new(nested.clone());

    assert!(!nested.exists());
    store.set("key", "val").unwrap();
    assert!(nested.exists());
}

#[test]
fn test_history_on_file_store_round_trip() {
    let dir = TempDir::new().unwrap();

    let mut history = HistoryStore::new(Box::new(FileStore::new(dir.path().to_path_buf())));
    history.load();
    history.record("octocat");
    history.record("rust");

    assert!(dir.path().join("githubSearchHistory.json").exists());

    let mut reloaded = HistoryStore::new(Box::new(FileStore::new(dir.path().to_path_buf())));
    assert_eq!(reloaded.load(), terms(&["rust", "octocat"]));
}

#[test]
fn test_history_on_corrupted_file_is_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("githubSearchHistory.json"), "[\"unterminated").unwrap();

    let mut history = HistoryStore::new(Box::new(FileStore::new(dir.path().to_path_buf())));
    assert!(history.load().is_empty());
}
