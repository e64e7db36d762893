//! # Favorites Persistence
//!
//! The bookmarked-entries list, persisted write-through: every mutation
//! rewrites the full list under one fixed key before returning. Storage is
//! an injected key-value port so tests can substitute an in-memory fake.
//!
//! Read failures (missing key, unreadable file, corrupt JSON) degrade to
//! an empty list with a log line; they are never fatal and never shown to
//! the user. Membership is judged by `term` equality, first match only:
//! two distinct entries sharing a term collapse in favorites lookups, a
//! quirk inherited from the original data set.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::words::WordEntry;

/// Fixed identifier the favorites list is stored under.
pub const FAVORITES_KEY: &str = "korean_word_favorites";

/// Key-value storage port. `read` returns `Ok(None)` for an absent key.
pub trait Storage {
    fn read(&self, key: &str) -> io::Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// Filesystem-backed storage: one key maps to `<dir>/<key>.json`.
///
/// Writes go through `.tmp` + rename for crash safety.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(path).map(Some)
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.key_path(key);
        atomic_write(&path, value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Atomically write `value` to `path` (via `.tmp` + rename).
fn atomic_write(path: &Path, value: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, value)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// The favorites list plus its backing storage.
pub struct FavoritesStore {
    storage: Box<dyn Storage>,
    entries: Vec<WordEntry>,
}

impl FavoritesStore {
    /// Open the store, reading whatever the storage currently holds.
    /// Absent or corrupt stored data yields an empty list.
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let entries = match storage.read(FAVORITES_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Stored favorites are corrupt, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read favorites, starting empty: {e}");
                Vec::new()
            }
        };
        debug!("Favorites loaded: {} entries", entries.len());
        Self { storage, entries }
    }

    pub fn list(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn is_favorite(&self, term: &str) -> bool {
        self.entries.iter().any(|w| w.term == term)
    }

    /// Add `entry` if absent, remove the first match if present, judged by
    /// `term` equality. Persists the updated list before returning.
    pub fn toggle(&mut self, entry: &WordEntry) -> &[WordEntry] {
        match self.entries.iter().position(|w| w.term == entry.term) {
            Some(index) => {
                self.entries.remove(index);
            }
            None => self.entries.push(entry.clone()),
        }
        self.persist();
        &self.entries
    }

    /// Drop every favorite and the stored copy.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.storage.remove(FAVORITES_KEY) {
            warn!("Failed to remove stored favorites: {e}");
        }
    }

    /// Write-through of the full list. Failure keeps the in-memory list
    /// authoritative for the rest of the session.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode favorites: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.write(FAVORITES_KEY, &json) {
            warn!("Failed to persist favorites: {e}");
        }
    }
}
