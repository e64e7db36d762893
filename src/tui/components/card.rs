//! # Card Component
//!
//! The flashcard face: the current term, centered, with the translation
//! appended in parentheses once revealed. Pure projection of `App`;
//! per-entry display is a two-state machine (term only / term plus
//! translation) driven by the translation toggle.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::words::WordEntry;
use crate::tui::component::Component;

/// The single line shown on the card face.
pub fn face_line(entry: &WordEntry, showing_translation: bool) -> String {
    if showing_translation {
        format!("{} ({})", entry.term, entry.translation)
    } else {
        entry.term.clone()
    }
}

pub struct Card<'a> {
    pub entry: &'a WordEntry,
    pub showing_translation: bool,
    pub is_favorite: bool,
}

impl<'a> Card<'a> {
    pub fn new(entry: &'a WordEntry, showing_translation: bool, is_favorite: bool) -> Self {
        Self {
            entry,
            showing_translation,
            is_favorite,
        }
    }
}

impl Component for Card<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.is_favorite {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title(format!(" {} ", self.entry.category))
            .title_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let face_style = if self.entry.category == "error" {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let face = Line::from(Span::styled(
            face_line(self.entry, self.showing_translation),
            face_style,
        ));

        let marker = if self.is_favorite {
            Line::from(Span::styled("♥ favorite", Style::default().fg(Color::Red)))
        } else {
            Line::from("")
        };

        let [face_area, _, marker_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(inner);

        frame.render_widget(
            Paragraph::new(face).alignment(Alignment::Center),
            face_area,
        );
        frame.render_widget(
            Paragraph::new(marker).alignment(Alignment::Center),
            marker_area,
        );
    }
}
