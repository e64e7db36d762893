//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::core::favorites::{FavoritesStore, Storage};
use crate::core::state::App;
use crate::core::words::WordEntry;

/// In-memory storage fake. Clones share the same map, so a clone kept
/// aside models reopening the store after a restart.
#[derive(Default, Clone)]
pub struct MemoryStorage {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.map.borrow_mut().remove(key);
        Ok(())
    }
}

/// A small fixed word list covering several categories.
pub fn sample_words() -> Vec<WordEntry> {
    vec![
        WordEntry::new("안녕", "你好", "greeting"),
        WordEntry::new("감사합니다", "谢谢", "greeting"),
        WordEntry::new("물", "水", "noun"),
        WordEntry::new("밥", "米饭", "noun"),
        WordEntry::new("하나", "一", "number"),
    ]
}

/// Creates a test App over the sample words with in-memory favorites and
/// a deterministic rng.
pub fn test_app() -> App {
    let favorites = FavoritesStore::open(Box::new(MemoryStorage::default()));
    let mut app = App::new(sample_words(), favorites);
    app.rng = SmallRng::seed_from_u64(7);
    app
}
