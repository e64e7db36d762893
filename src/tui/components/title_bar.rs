//! # TitleBar Component
//!
//! Top status bar: active filter, position within the filtered view, and
//! the transient status message. Stateless - all fields are props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Label of the active filter (e.g. "all", "favorites", "noun")
    pub filter_label: String,
    /// 1-based position within the filtered view
    pub position: usize,
    /// Size of the filtered view
    pub total: usize,
    /// Transient status (e.g. "Added to favorites: 안녕")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(filter_label: String, position: usize, total: usize, status_message: String) -> Self {
        Self {
            filter_label,
            position,
            total,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!(
                "daneo [{}] {}/{}",
                self.filter_label, self.position, self.total
            )
        } else {
            format!(
                "daneo [{}] {}/{} | {}",
                self.filter_label, self.position, self.total, self.status_message
            )
        };
        frame.render_widget(Span::raw(title_text), area);
    }
}
