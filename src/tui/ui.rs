use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Card, CategoryPicker, FavoritesOverlay, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, card_area, help_area] = layout.areas(frame.area());

    let entry = app.current_entry();
    let is_favorite = app.favorites.is_favorite(&entry.term);

    // Title bar
    let mut title_bar = TitleBar::new(
        app.filter.label().to_string(),
        app.current_index + 1,
        app.filtered_words.len(),
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    // Card
    let mut card = Card::new(entry, app.showing_translation, is_favorite);
    card.render(frame, card_area);

    // Help line: the favorite label tracks the current entry
    let favorite_label = if is_favorite { "f unfavorite" } else { "f favorite" };
    let help_text = format!(
        " n/p next/prev  r random  t reveal  {favorite_label}  l favorites  c categories  q quit"
    );
    frame.render_widget(
        Span::styled(help_text, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // Overlays (one at a time)
    if let Some(ref mut picker) = tui.category_picker {
        CategoryPicker::new(picker, &app.filter).render(frame, frame.area());
    } else if let Some(ref mut overlay) = tui.favorites_overlay {
        FavoritesOverlay::new(overlay).render(frame, frame.area());
    }

    // Blocking load notice sits on top of everything
    if let Some(ref error_msg) = app.load_error {
        draw_load_notice(frame, frame.area(), error_msg);
    }
}

/// Blocking startup notice: the load failed, the placeholder is shown, and
/// any key acknowledges. Carries the full diagnostic text.
fn draw_load_notice(frame: &mut Frame, area: Rect, error_msg: &str) {
    let overlay = centered_rect(70, 50, area);
    frame.render_widget(Clear, overlay);

    let text = format!(
        "{error_msg}\n\n\
         The placeholder card is shown instead.\n\
         Check the words document and restart.\n\n\
         Press any key to continue."
    );
    let notice = Paragraph::new(text)
        .block(
            Block::bordered()
                .title(" Load Error ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(notice, overlay);
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
