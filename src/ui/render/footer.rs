use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Return the key hints for the current view.
///
fn hints(state: &State) -> &'static str {
    if state.get_notification().is_some() {
        return " Enter/Esc: dismiss";
    }
    match state.current_view() {
        View::Home => " a: add address  q: quit",
        View::AddAddress => {
            " Tab/↓: next  Shift-Tab/↑: previous  Enter: next/submit  Ctrl-S: submit  Esc: back  Home: home"
        }
    }
}

/// Render footer with key hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let widget = Paragraph::new(hints(state)).style(styling::muted_text_style(state.get_theme()));
    frame.render_widget(widget, size);
}
