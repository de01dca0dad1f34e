use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

/// Maximum number of lookups kept in the log
pub const HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    /// Primary definition of the lookup
    pub definition: String,
    /// Local time, ISO-8601 without offset, microsecond precision
    pub timestamp: NaiveDateTime,
}

/// Capacity-bounded log of past lookups, persisted as a JSON array,
/// most recent last.
///
/// Read and write failures degrade to an empty or unpersisted log and are
/// never returned to the caller.
#[derive(Debug)]
pub struct HistoryStore {
    path: Option<PathBuf>,
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load the log at `path`, or start empty when missing or unreadable
    pub fn load(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let mut entries = read_entries(&path);
        let capacity = capacity.max(1);
        trim_front(&mut entries, capacity);

        tracing::info!(
            "Loaded {} history entries from {}",
            entries.len(),
            path.display()
        );

        Self {
            path: Some(path),
            capacity,
            entries,
        }
    }

    /// Log kept in memory only
    pub fn in_memory(capacity: usize) -> Self {
        Self {
            path: None,
            capacity: capacity.max(1),
            entries: Vec::new(),
        }
    }

    /// Record a lookup with the current time and persist the log
    pub fn append(&mut self, word: &str, definition: &str) -> &HistoryEntry {
        self.push(HistoryEntry {
            word: word.to_string(),
            definition: definition.to_string(),
            timestamp: Local::now().naive_local().trunc_subsecs(6),
        })
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        self.entries.push(entry);
        trim_front(&mut self.entries, self.capacity);
        self.persist();

        // Just pushed, so the log is non-empty
        &self.entries[self.entries.len() - 1]
    }

    /// Oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Newest first
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };

        let result = serde_json::to_string(&self.entries)
            .map_err(std::io::Error::from)
            .and_then(|json| fs::write(path, json));

        if let Err(e) = result {
            tracing::warn!("Failed to save history to {}: {}", path.display(), e);
        }
    }
}

fn read_entries(path: &Path) -> Vec<HistoryEntry> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read history {}: {}", path.display(), e);
            }
            return Vec::new();
        }
    };

    serde_json::from_str(&data).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable history {}: {}", path.display(), e);
        Vec::new()
    })
}

fn trim_front(entries: &mut Vec<HistoryEntry>, capacity: usize) {
    if entries.len() > capacity {
        let excess = entries.len() - capacity;
        entries.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_file() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary_history.json");
        (dir, path)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, path) = history_file();
        let store = HistoryStore::load(&path, HISTORY_CAPACITY);
        assert!(store.is_empty());
    }

    #[test]
    fn corrupted_file_loads_empty() {
        let (_dir, path) = history_file();
        fs::write(&path, "{ not json").unwrap();

        let store = HistoryStore::load(&path, HISTORY_CAPACITY);
        assert!(store.is_empty());
    }

    #[test]
    fn append_persists_and_reloads() {
        let (_dir, path) = history_file();

        let mut store = HistoryStore::load(&path, HISTORY_CAPACITY);
        store.append("happy", "enjoying or showing or marked by joy or pleasure");
        store.append("run", "move fast by using one's feet");

        let reloaded = HistoryStore::load(&path, HISTORY_CAPACITY);
        assert_eq!(reloaded.entries(), store.entries());
        assert_eq!(reloaded.entries()[1].word, "run");
    }

    #[test]
    fn fifty_one_appends_evict_the_first() {
        let (_dir, path) = history_file();
        let mut store = HistoryStore::load(&path, HISTORY_CAPACITY);

        for i in 0..51 {
            let newest = store.append(&format!("word{i}"), "definition");
            assert_eq!(newest.word, format!("word{i}"));
            assert!(store.len() <= HISTORY_CAPACITY);
        }

        let persisted: Vec<HistoryEntry> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(persisted.len(), 50);
        assert_eq!(persisted[0].word, "word1");
        assert_eq!(persisted[49].word, "word50");
        assert_eq!(store.recent().next().unwrap().word, "word50");
    }

    #[test]
    fn oversized_file_is_trimmed_on_load() {
        let (_dir, path) = history_file();
        let mut store = HistoryStore::load(&path, 10);
        for i in 0..10 {
            store.append(&format!("w{i}"), "d");
        }

        let smaller = HistoryStore::load(&path, 3);
        let words: Vec<_> = smaller.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["w7", "w8", "w9"]);
    }

    #[test]
    fn reads_timestamps_with_microseconds() {
        let (_dir, path) = history_file();
        fs::write(
            &path,
            r#"[{"word": "happy", "definition": "glad", "timestamp": "2024-05-01T09:30:12.123456"}]"#,
        )
        .unwrap();

        let store = HistoryStore::load(&path, HISTORY_CAPACITY);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.entries()[0].timestamp.format("%Y-%m-%d %H:%M").to_string(),
            "2024-05-01 09:30"
        );
    }

    #[test]
    fn unwritable_path_keeps_memory_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("history.json");

        let mut store = HistoryStore::load(&path, HISTORY_CAPACITY);
        store.append("happy", "glad");

        assert_eq!(store.len(), 1);
        assert!(!path.exists());
    }
}
