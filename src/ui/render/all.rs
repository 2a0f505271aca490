use super::{address_form, footer, home, log, notification, Frame};
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Current view
            Constraint::Length(8), // Log
            Constraint::Length(1), // Footer
        ])
        .split(size);

    match state.current_view() {
        View::Home => home(frame, rows[0], state),
        View::AddAddress => address_form(frame, rows[0], state),
    }
    log(frame, rows[1], state);
    footer(frame, rows[2], state);

    // Drawn last so it covers every other widget
    if state.get_notification().is_some() {
        notification(frame, size, state);
    }
}
