//! # Category Picker Component
//!
//! Centered overlay for choosing the active filter: all words, favorites,
//! or one category. Opened with `c`, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryPickerState` lives in `TuiState`
//! - `CategoryPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::state::Filter;
use crate::tui::event::TuiEvent;

/// Persistent state for the category picker overlay.
pub struct CategoryPickerState {
    pub filters: Vec<Filter>,
    pub selected: usize,
    pub list_state: ListState,
}

impl CategoryPickerState {
    /// Build the selectable filters: All and Favorites first, then one row
    /// per category of the loaded data. The active filter starts selected.
    pub fn new(categories: Vec<String>, active: &Filter) -> Self {
        let mut filters = vec![Filter::All, Filter::Favorites];
        filters.extend(categories.into_iter().map(Filter::Category));

        let selected = filters.iter().position(|f| f == active).unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            filters,
            selected,
            list_state,
        }
    }

    /// Handle a key event, returning a CategoryEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<CategoryEvent> {
        match event {
            TuiEvent::Escape => Some(CategoryEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.filters.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => self
                .filters
                .get(self.selected)
                .map(|filter| CategoryEvent::Select(filter.clone())),
            _ => None,
        }
    }
}

/// Events emitted by the category picker.
pub enum CategoryEvent {
    Select(Filter),
    Dismiss,
}

/// Transient render wrapper for the category picker overlay.
pub struct CategoryPicker<'a> {
    state: &'a mut CategoryPickerState,
    active: &'a Filter,
}

impl<'a> CategoryPicker<'a> {
    pub fn new(state: &'a mut CategoryPickerState, active: &'a Filter) -> Self {
        Self { state, active }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Categories ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .filters
            .iter()
            .enumerate()
            .map(|(i, filter)| {
                let is_active = filter == self.active;
                let marker = if is_active { " *" } else { "" };

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::styled(format!("{}{}", filter.label(), marker), style))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
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
