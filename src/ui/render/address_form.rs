use super::Frame;
use crate::address::AddressField;
use crate::state::{FormFocus, State, View};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

const FIELD_HEIGHT: u16 = 3;

/// Render the address entry form.
///
pub fn address_form(frame: &mut Frame, size: Rect, state: &State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(2), // Title
            Constraint::Min(3),    // Fields
            Constraint::Length(3), // Button
        ])
        .split(size);

    header(frame, chunks[0], state);

    let title = Paragraph::new(View::AddAddress.title())
        .style(styling::active_block_title_style())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    fields(frame, chunks[2], state);
    button(frame, chunks[3], state);
}

/// Back hint on the left, home hint on the right.
///
fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let style = Style::default().bg(theme.header_bg.to_color()).fg(theme.button_bg.to_color());
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(size);
    frame.render_widget(Paragraph::new(" ← Back (Esc)").style(style), halves[0]);
    frame.render_widget(
        Paragraph::new("storefront · Home (Home) ")
            .style(style)
            .alignment(Alignment::Right),
        halves[1],
    );
}

fn fields(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let form = state.get_address_form();
    let focused = form.focused_field();

    // Keep the focused field on screen when the terminal is short
    let visible = ((size.height / FIELD_HEIGHT) as usize).clamp(1, AddressField::ALL.len());
    let focus_index = match form.focus() {
        FormFocus::Field(field) => field.index(),
        FormFocus::Submit => AddressField::ALL.len() - 1,
    };
    let start = (focus_index + 1).saturating_sub(visible);
    let shown = &AddressField::ALL[start..start + visible];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            shown
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .collect::<Vec<_>>(),
        )
        .split(size);

    for (field, area) in shown.iter().zip(rows.iter()) {
        let is_focused = focused == Some(*field);
        let title = if field.is_required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };
        let border_style = if is_focused {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);

        let value = form.value(*field);
        let line = if value.is_empty() {
            Line::from(Span::styled(field.placeholder(), styling::muted_text_style(theme)))
        } else {
            Line::from(Span::styled(value, styling::normal_text_style(theme)))
        };
        frame.render_widget(Paragraph::new(line).block(block), *area);

        if is_focused && state.get_notification().is_none() {
            frame.set_cursor(cursor_x(*area, value), area.y.saturating_add(1));
        }
    }
}

/// Column just past `value` inside the bordered `area`, kept on the last
/// inner column when the value is wider than the field.
///
fn cursor_x(area: Rect, value: &str) -> u16 {
    let last_column = area.width.saturating_sub(3);
    let offset = u16::try_from(value.width()).unwrap_or(u16::MAX).min(last_column);
    area.x.saturating_add(1).saturating_add(offset)
}

fn button(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = state.get_address_form().focus() == FormFocus::Submit;
    let label = if state.is_submitting() {
        format!("{} Adding address...", spinner::frame(state.get_spinner_index()))
    } else {
        "Add Address".to_string()
    };
    let border_style = if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let widget = Paragraph::new(label)
        .style(styling::button_style(theme, focused))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(widget, size);
}
