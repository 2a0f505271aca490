use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the pending notification as a centered modal.
///
pub fn notification(frame: &mut Frame, size: Rect, state: &State) {
    let Some(notification) = state.get_notification() else {
        return;
    };
    let theme = state.get_theme();
    let area = centered_rect(50, 7, size);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(notification.title.as_str())
        .border_style(styling::notification_border_style(theme, notification.is_error()));
    let text = vec![
        Line::from(Span::styled(
            notification.body.as_str(),
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            styling::muted_text_style(theme),
        )),
    ];
    let widget = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

/// Return a rectangle of the given width percentage and height, centered in `size`.
///
fn centered_rect(percent_x: u16, height: u16, size: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(size.height)),
            Constraint::Min(0),
        ])
        .split(size);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
