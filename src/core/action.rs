//! # Actions
//!
//! Everything that can happen in daneo becomes an `Action`.
//! User presses `n`? That's `Action::NextWord`.
//! User picks a category? That's `Action::ApplyFilter(filter)`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state in one place. The TUI layer only translates key
//! events into actions and reacts to the returned `Effect`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.

use log::warn;

use crate::core::navigation::{next_index, prev_index, random_index};
use crate::core::state::{App, Filter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NextWord,
    PrevWord,
    RandomWord,
    ToggleTranslation,
    ToggleFavorite,
    ApplyFilter(Filter),
    ClearFavorites,
    DismissNotice,
    Quit,
}

/// What the event loop must do after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::NextWord => {
            step(app, next_index(app.current_index, app.filtered_words.len()));
        }
        Action::PrevWord => {
            step(app, prev_index(app.current_index, app.filtered_words.len()));
        }
        Action::RandomWord => {
            let len = app.filtered_words.len();
            let jump = random_index(&mut app.rng, len);
            step(app, jump);
        }
        Action::ToggleTranslation => {
            app.showing_translation = !app.showing_translation;
        }
        Action::ToggleFavorite => {
            let entry = app.current_entry().clone();
            let was_favorite = app.favorites.is_favorite(&entry.term);
            app.favorites.toggle(&entry);
            app.status_message = if was_favorite {
                format!("Removed from favorites: {}", entry.term)
            } else {
                format!("Added to favorites: {}", entry.term)
            };
        }
        Action::ApplyFilter(filter) => {
            app.apply_filter(filter);
            app.status_message = format!("Filter: {}", app.filter.label());
        }
        Action::ClearFavorites => {
            app.favorites.clear();
            app.status_message = String::from("Favorites cleared");
        }
        Action::DismissNotice => {
            app.load_error = None;
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

fn step(app: &mut App, jump: Result<usize, crate::core::navigation::EmptyViewError>) {
    match jump {
        Ok(index) => app.current_index = index,
        // Unreachable while the placeholder invariant holds.
        Err(e) => warn!("Navigation skipped: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Effect, update};
    use crate::core::state::Filter;
    use crate::core::words::WordEntry;
    use crate::test_support::test_app;

    #[test]
    fn test_next_advances_and_wraps() {
        let mut app = test_app();
        let len = app.filtered_words.len();
        for expected in (1..len).chain([0]) {
            update(&mut app, Action::NextWord);
            assert_eq!(app.current_index, expected);
        }
    }

    #[test]
    fn test_next_then_prev_restores_index() {
        let mut app = test_app();
        update(&mut app, Action::NextWord);
        update(&mut app, Action::NextWord);
        let before = app.current_index;
        update(&mut app, Action::NextWord);
        update(&mut app, Action::PrevWord);
        assert_eq!(app.current_index, before);
    }

    #[test]
    fn test_random_stays_in_bounds() {
        let mut app = test_app();
        for _ in 0..50 {
            update(&mut app, Action::RandomWord);
            assert!(app.current_index < app.filtered_words.len());
        }
    }

    #[test]
    fn test_toggle_translation_flips_state() {
        let mut app = test_app();
        assert!(!app.showing_translation);
        update(&mut app, Action::ToggleTranslation);
        assert!(app.showing_translation);
        update(&mut app, Action::ToggleTranslation);
        assert!(!app.showing_translation);
    }

    #[test]
    fn test_toggle_favorite_twice_restores_list() {
        let mut app = test_app();
        let before: Vec<WordEntry> = app.favorites.list().to_vec();
        let term = app.current_entry().term.clone();
        update(&mut app, Action::ToggleFavorite);
        assert!(app.favorites.is_favorite(&term));
        update(&mut app, Action::ToggleFavorite);
        assert_eq!(app.favorites.list(), before.as_slice());
    }

    #[test]
    fn test_filter_all_restores_full_view() {
        let mut app = test_app();
        update(&mut app, Action::NextWord);
        update(
            &mut app,
            Action::ApplyFilter(Filter::Category(String::from("noun"))),
        );
        update(&mut app, Action::ApplyFilter(Filter::All));
        assert_eq!(app.filtered_words, app.all_words);
        assert_eq!(app.current_index, 0);
    }

    #[test]
    fn test_filter_by_category() {
        let mut app = test_app();
        update(
            &mut app,
            Action::ApplyFilter(Filter::Category(String::from("noun"))),
        );
        assert!(!app.filtered_words.is_empty());
        assert!(app.filtered_words.iter().all(|w| w.category == "noun"));
        assert_eq!(app.current_index, 0);
    }

    #[test]
    fn test_unmatched_filter_yields_single_placeholder() {
        let mut app = test_app();
        update(
            &mut app,
            Action::ApplyFilter(Filter::Category(String::from("no-such-category"))),
        );
        assert_eq!(app.filtered_words.len(), 1);
        assert_eq!(app.filtered_words[0].category, "error");
    }

    #[test]
    fn test_favorites_filter_with_empty_favorites_yields_placeholder() {
        let mut app = test_app();
        update(&mut app, Action::ApplyFilter(Filter::Favorites));
        assert_eq!(app.filtered_words.len(), 1);
        assert_eq!(app.filtered_words[0].category, "error");
    }

    #[test]
    fn test_favorites_filter_shows_favorited_entries() {
        let mut app = test_app();
        update(&mut app, Action::ToggleFavorite);
        update(&mut app, Action::NextWord);
        update(&mut app, Action::ToggleFavorite);
        update(&mut app, Action::ApplyFilter(Filter::Favorites));
        assert_eq!(app.filtered_words.len(), 2);
        assert_eq!(app.current_index, 0);
    }

    #[test]
    fn test_favorites_view_keeps_copy_semantics() {
        // The favorites view is a snapshot: unfavoriting the shown card
        // does not shrink it until the filter is reapplied.
        let mut app = test_app();
        update(&mut app, Action::ToggleFavorite);
        update(&mut app, Action::ApplyFilter(Filter::Favorites));
        update(&mut app, Action::ToggleFavorite);
        assert!(app.favorites.list().is_empty());
        assert_eq!(app.filtered_words.len(), 1);
        assert_ne!(app.filtered_words[0].category, "error");
    }

    #[test]
    fn test_clear_favorites_empties_store() {
        let mut app = test_app();
        update(&mut app, Action::ToggleFavorite);
        update(&mut app, Action::ClearFavorites);
        assert!(app.favorites.list().is_empty());
        assert_eq!(app.status_message, "Favorites cleared");
    }

    #[test]
    fn test_navigation_safe_on_placeholder_view() {
        let mut app = test_app();
        update(
            &mut app,
            Action::ApplyFilter(Filter::Category(String::from("no-such-category"))),
        );
        update(&mut app, Action::NextWord);
        update(&mut app, Action::PrevWord);
        update(&mut app, Action::RandomWord);
        assert_eq!(app.current_index, 0);
    }

    #[test]
    fn test_dismiss_notice_clears_load_error() {
        let mut app = test_app();
        app.load_error = Some(String::from("boom"));
        update(&mut app, Action::DismissNotice);
        assert_eq!(app.load_error, None);
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(update(&mut app, Action::NextWord), Effect::None);
    }
}
