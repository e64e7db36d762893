//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The card is static between key presses, so the event loop only redraws
//! after an event arrives; idle polling sleeps up to 500ms. Pending events
//! are drained before the next draw so held-down keys don't queue frames.

mod component;
mod components;
mod event;
mod ui;

use std::time::Duration;

use log::debug;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::components::{
    CategoryEvent, CategoryPickerState, FavoritesEvent, FavoritesOverlayState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Favorites overlay (None = hidden)
    pub favorites_overlay: Option<FavoritesOverlayState>,
    /// Category picker overlay (None = hidden)
    pub category_picker: Option<CategoryPickerState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            favorites_overlay: None,
            category_picker: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    let mut terminal = ratatui::init();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of what's on screen
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Blocking load notice: the next key acknowledges it
            if app.load_error.is_some() {
                debug!("Load notice dismissed");
                update(&mut app, Action::DismissNotice);
                continue;
            }

            // When an overlay is open, route all events to it
            if let Some(ref mut picker) = tui.category_picker {
                if let Some(picker_event) = picker.handle_event(&event) {
                    match picker_event {
                        CategoryEvent::Select(filter) => {
                            update(&mut app, Action::ApplyFilter(filter));
                            tui.category_picker = None;
                        }
                        CategoryEvent::Dismiss => {
                            tui.category_picker = None;
                        }
                    }
                }
                continue;
            }
            if let Some(ref mut overlay) = tui.favorites_overlay {
                if let Some(overlay_event) = overlay.handle_event(&event) {
                    match overlay_event {
                        FavoritesEvent::Clear => {
                            update(&mut app, Action::ClearFavorites);
                            overlay.clear_entries();
                        }
                        FavoritesEvent::Dismiss => {
                            tui.favorites_overlay = None;
                        }
                    }
                }
                continue;
            }

            // Card view keys
            let action = match event {
                TuiEvent::InputChar('n') | TuiEvent::CursorRight => Some(Action::NextWord),
                TuiEvent::InputChar('p') | TuiEvent::CursorLeft => Some(Action::PrevWord),
                TuiEvent::InputChar('r') => Some(Action::RandomWord),
                TuiEvent::InputChar('t') | TuiEvent::InputChar(' ') | TuiEvent::Submit => {
                    Some(Action::ToggleTranslation)
                }
                TuiEvent::InputChar('f') => Some(Action::ToggleFavorite),
                TuiEvent::InputChar('l') => {
                    tui.favorites_overlay =
                        Some(FavoritesOverlayState::new(app.favorites.list().to_vec()));
                    None
                }
                TuiEvent::InputChar('c') => {
                    tui.category_picker =
                        Some(CategoryPickerState::new(app.categories(), &app.filter));
                    None
                }
                TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
                _ => None,
            };

            if let Some(action) = action {
                debug!("Dispatching {:?}", action);
                if update(&mut app, action) == Effect::Quit {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
