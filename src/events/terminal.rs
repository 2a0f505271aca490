use crate::address::{Notification, Outcome, FAILED_MESSAGE};
use crate::state::{FormFocus, State, StateError, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration, time::Instant};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

const IN_FLIGHT_TITLE: &str = "Please wait";
const IN_FLIGHT_MESSAGE: &str = "The address is still being added.";

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => error!("Failed to poll terminal events: {}", e),
            }
            if tx.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx }
    }

    /// Block until the next terminal event arrives.
    ///
    pub fn next(&self) -> Result<Event<KeyEvent>> {
        Ok(self.rx.recv()?)
    }
}

/// Apply a terminal event to state. Returns false if exit was requested.
///
pub fn handle(event: Event<KeyEvent>, state: &mut State) -> bool {
    match event {
        Event::Input(key) => handle_key(key, state),
        Event::Tick => {
            if state.is_submitting() {
                state.advance_spinner_index();
            }
            state.run_due_tasks(Instant::now());
            true
        }
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    // Notifications are modal: only dismissal gets through
    if state.get_notification().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.dismiss_notification();
        }
        return true;
    }

    let view = *state.current_view();
    match view {
        View::Home => match key.code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('a') | KeyCode::Enter => {
                state.open_address_form();
            }
            _ => (),
        },
        View::AddAddress => handle_address_form_key(key, state),
    }
    true
}

fn handle_address_form_key(key: KeyEvent, state: &mut State) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            state.go_back();
        }
        (KeyCode::Home, _) => {
            state.go_home();
        }
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => submit(state),
        (KeyCode::Tab, _) | (KeyCode::Down, _) => {
            state.get_address_form_mut().next_focus();
        }
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
            state.get_address_form_mut().previous_focus();
        }
        (KeyCode::Enter, _) => {
            if state.get_address_form().focus() == FormFocus::Submit {
                submit(state);
            } else {
                state.get_address_form_mut().next_focus();
            }
        }
        (KeyCode::Backspace, _) => {
            state.get_address_form_mut().pop_char();
        }
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            state.get_address_form_mut().push_char(c);
        }
        _ => (),
    }
}

fn submit(state: &mut State) {
    match state.submit_address_form() {
        Ok(()) => debug!("Address submission dispatched."),
        Err(StateError::SubmissionInFlight) => {
            warn!("Ignoring submit while a previous submission is in progress.");
            state.set_notification(Notification::new(IN_FLIGHT_TITLE, IN_FLIGHT_MESSAGE));
        }
        Err(e) => {
            error!("Failed to submit address: {}", e);
            state.set_notification(Outcome::Failed(FAILED_MESSAGE.to_owned()).notification());
        }
    }
}
