//! # Application State
//!
//! Core business state for daneo. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── all_words: Vec<WordEntry>       // loaded once, never mutated
//! ├── filtered_words: Vec<WordEntry>  // derived view, never empty
//! ├── current_index: usize            // always < filtered_words.len()
//! ├── showing_translation: bool       // card face toggle
//! ├── filter: Filter                  // active selector
//! ├── favorites: FavoritesStore       // write-through persisted
//! ├── status_message: String          // status bar text
//! └── load_error: Option<String>    // startup notice until dismissed
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::core::favorites::FavoritesStore;
use crate::core::words::{WordEntry, empty_filter_placeholder, load_placeholder};

/// The active view selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Favorites,
    Category(String),
}

impl Filter {
    pub fn label(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Favorites => "favorites",
            Filter::Category(name) => name,
        }
    }
}

pub struct App {
    pub all_words: Vec<WordEntry>,
    pub filtered_words: Vec<WordEntry>,
    pub current_index: usize,
    pub showing_translation: bool,
    pub filter: Filter,
    pub favorites: FavoritesStore,
    pub status_message: String,
    pub load_error: Option<String>,
    pub(crate) rng: SmallRng,
}

impl App {
    /// Build the initial state. An empty word list (the load failed and the
    /// caller has nothing to show) is replaced by the load placeholder so
    /// the view invariant holds from the first frame.
    pub fn new(words: Vec<WordEntry>, favorites: FavoritesStore) -> Self {
        let all_words = if words.is_empty() {
            vec![load_placeholder()]
        } else {
            words
        };
        let filtered_words = all_words.clone();
        Self {
            all_words,
            filtered_words,
            current_index: 0,
            showing_translation: false,
            filter: Filter::All,
            favorites,
            status_message: String::from("Welcome to daneo!"),
            load_error: None,
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn current_entry(&self) -> &WordEntry {
        &self.filtered_words[self.current_index]
    }

    /// Distinct categories of the loaded data, in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for word in &self.all_words {
            if !seen.contains(&word.category) {
                seen.push(word.category.clone());
            }
        }
        seen
    }

    /// Recompute the filtered view. An empty result is replaced by the
    /// placeholder entry; the index always resets to the first card.
    pub fn apply_filter(&mut self, filter: Filter) {
        let mut filtered: Vec<WordEntry> = match &filter {
            Filter::All => self.all_words.clone(),
            Filter::Favorites => self.favorites.list().to_vec(),
            Filter::Category(name) => self
                .all_words
                .iter()
                .filter(|w| &w.category == name)
                .cloned()
                .collect(),
        };
        if filtered.is_empty() {
            filtered = vec![empty_filter_placeholder()];
        }
        self.filtered_words = filtered;
        self.current_index = 0;
        self.filter = filter;
    }
}
