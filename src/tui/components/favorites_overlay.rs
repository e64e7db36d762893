//! # Favorites Overlay Component
//!
//! Centered overlay listing the bookmarked entries read-only. Opened with
//! `l`, dismissed with Esc. `c` clears all favorites, pressed twice to
//! confirm.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FavoritesOverlayState` lives in `TuiState`
//! - `FavoritesOverlay` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::words::WordEntry;
use crate::tui::event::TuiEvent;

/// Persistent state for the favorites overlay.
pub struct FavoritesOverlayState {
    pub entries: Vec<WordEntry>,
    pub selected: usize,
    pub confirm_clear: bool,
    pub list_state: ListState,
}

impl FavoritesOverlayState {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            entries,
            selected: 0,
            confirm_clear: false,
            list_state,
        }
    }

    /// Handle a key event, returning a FavoritesEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<FavoritesEvent> {
        // Reset clear confirmation on any non-clear key
        let is_clear_key = matches!(event, TuiEvent::InputChar('c'));
        if !is_clear_key {
            self.confirm_clear = false;
        }

        match event {
            TuiEvent::Escape => Some(FavoritesEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.entries.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.entries.is_empty() {
                    self.selected = (self.selected + 1).min(self.entries.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::InputChar('c') => {
                if self.entries.is_empty() {
                    return None;
                }
                if self.confirm_clear {
                    self.confirm_clear = false;
                    Some(FavoritesEvent::Clear)
                } else {
                    self.confirm_clear = true;
                    None
                }
            }
            _ => None,
        }
    }

    /// Empty the local list after the store was cleared.
    pub fn clear_entries(&mut self) {
        self.entries.clear();
        self.selected = 0;
        self.list_state.select(None);
    }
}

/// Events emitted by the favorites overlay.
pub enum FavoritesEvent {
    Clear,
    Dismiss,
}

/// Transient render wrapper for the favorites overlay.
pub struct FavoritesOverlay<'a> {
    state: &'a mut FavoritesOverlayState,
}

impl<'a> FavoritesOverlay<'a> {
    pub fn new(state: &'a mut FavoritesOverlayState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = if self.state.confirm_clear {
            " Press c again to clear all | Esc Cancel "
        } else {
            " c Clear all  Esc Back "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Favorites ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        if self.state.entries.is_empty() {
            let empty = Paragraph::new("No favorites yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        // Terms are CJK, so the column is padded by display width, not chars.
        let term_width = self
            .state
            .entries
            .iter()
            .map(|w| UnicodeWidthStr::width(w.term.as_str()))
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let style = if i == self.state.selected {
                    if self.state.confirm_clear {
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    }
                } else {
                    Style::default().fg(Color::Gray)
                };

                let line = Line::from(vec![
                    Span::styled(pad_to_width(&word.term, term_width), style),
                    Span::styled("  ", style),
                    Span::styled(word.translation.clone(), style),
                    Span::styled("  ", style),
                    Span::styled(
                        format!("[{}]", word.category),
                        if i == self.state.selected {
                            style
                        } else {
                            Style::default().fg(Color::DarkGray)
                        },
                    ),
                ]);

                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Pad `s` with spaces up to `width` terminal columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    let mut padded = s.to_string();
    padded.push_str(&" ".repeat(width.saturating_sub(current)));
    padded
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<WordEntry> {
        vec![
            WordEntry::new("안녕", "你好", "greeting"),
            WordEntry::new("물", "水", "noun"),
        ]
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut state = FavoritesOverlayState::new(entries());
        assert!(state.handle_event(&TuiEvent::InputChar('c')).is_none());
        assert!(state.confirm_clear);
        assert!(matches!(
            state.handle_event(&TuiEvent::InputChar('c')),
            Some(FavoritesEvent::Clear)
        ));
    }

    #[test]
    fn test_any_other_key_cancels_confirmation() {
        let mut state = FavoritesOverlayState::new(entries());
        state.handle_event(&TuiEvent::InputChar('c'));
        state.handle_event(&TuiEvent::CursorDown);
        assert!(!state.confirm_clear);
    }

    #[test]
    fn test_clear_on_empty_list_is_ignored() {
        let mut state = FavoritesOverlayState::new(Vec::new());
        assert!(state.handle_event(&TuiEvent::InputChar('c')).is_none());
        assert!(!state.confirm_clear);
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = FavoritesOverlayState::new(entries());
        assert!(matches!(
            state.handle_event(&TuiEvent::Escape),
            Some(FavoritesEvent::Dismiss)
        ));
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = FavoritesOverlayState::new(entries());
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_pad_to_width_counts_cjk_columns() {
        // 안녕 occupies 4 terminal columns
        assert_eq!(pad_to_width("안녕", 6), "안녕  ");
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }
}
