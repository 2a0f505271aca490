use crate::address::{Notification, Outcome, FAILED_MESSAGE};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::error::StateError;
use super::form::AddressForm;
use super::navigation::{NavigationAction, View};
use super::schedule::{Scheduler, TaskId};

const MAX_LOG_ENTRIES: usize = 500;
const DEFAULT_NAVIGATION_DELAY_MS: u64 = 500;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    spinner_index: usize,
    view_stack: Vec<View>,
    address_form: AddressForm,
    screen_generation: u64, // Bumped every time the address screen is entered
    pending_submission: Option<u64>, // Screen generation of the submission in flight
    notification: Option<Notification>,
    scheduler: Scheduler<NavigationAction>,
    back_navigation: Option<TaskId>,
    navigation_delay: Duration,
    log_entries: VecDeque<String>,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            spinner_index: 0,
            view_stack: vec![View::Home],
            address_form: AddressForm::default(),
            screen_generation: 0,
            pending_submission: None,
            notification: None,
            scheduler: Scheduler::default(),
            back_navigation: None,
            navigation_delay: Duration::from_millis(DEFAULT_NAVIGATION_DELAY_MS),
            log_entries: VecDeque::new(),
            theme: Theme::default(),
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, navigation_delay: Duration, theme: Theme) -> Self {
        State {
            net_sender: Some(net_sender),
            navigation_delay,
            theme,
            ..State::default()
        }
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Return the view on top of the stack.
    ///
    pub fn current_view(&self) -> &View {
        self.view_stack.last().unwrap_or(&View::Home)
    }

    pub fn view_stack_len(&self) -> usize {
        self.view_stack.len()
    }

    /// Enter the address screen with a fresh, empty form.
    ///
    pub fn open_address_form(&mut self) -> &mut Self {
        if *self.current_view() == View::AddAddress {
            return self;
        }
        self.address_form.reset();
        self.screen_generation += 1;
        self.view_stack.push(View::AddAddress);
        debug!("Entered address screen #{}.", self.screen_generation);
        self
    }

    /// Pop the current view. The home view is never popped.
    ///
    pub fn go_back(&mut self) -> Option<View> {
        if self.view_stack.len() <= 1 {
            return None;
        }
        let view = self.view_stack.pop()?;
        if view == View::AddAddress {
            self.leave_address_screen();
        }
        Some(view)
    }

    /// Drop every view above home.
    ///
    pub fn go_home(&mut self) -> &mut Self {
        if self.view_stack.contains(&View::AddAddress) {
            self.leave_address_screen();
        }
        self.view_stack.truncate(1);
        self
    }

    fn leave_address_screen(&mut self) {
        if let Some(id) = self.back_navigation.take() {
            if self.scheduler.cancel(id) {
                debug!("Cancelled pending back navigation on leaving address screen.");
            }
        }
    }

    fn is_address_screen_mounted(&self, screen: u64) -> bool {
        *self.current_view() == View::AddAddress && self.screen_generation == screen
    }

    pub fn get_address_form(&self) -> &AddressForm {
        &self.address_form
    }

    pub fn get_address_form_mut(&mut self) -> &mut AddressForm {
        &mut self.address_form
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submission.is_some()
    }

    /// Dispatch the current draft for submission. Only one submission may be
    /// in flight at a time.
    ///
    pub fn submit_address_form(&mut self) -> Result<(), StateError> {
        if self.pending_submission.is_some() {
            return Err(StateError::SubmissionInFlight);
        }
        let sender = self
            .net_sender
            .as_ref()
            .ok_or(StateError::NetworkSenderNotSet)?;
        sender
            .send(NetworkEvent::AddAddress {
                draft: self.address_form.draft().clone(),
                screen: self.screen_generation,
            })
            .map_err(|e| StateError::SendFailed(e.to_string()))?;
        self.pending_submission = Some(self.screen_generation);
        Ok(())
    }

    /// Apply the result of a submission started from address screen `screen`.
    ///
    /// Acceptance clears the form that was submitted and schedules the return
    /// to the previous view, provided that screen is still showing.
    ///
    pub fn apply_submission_outcome(
        &mut self,
        outcome: &Outcome,
        screen: u64,
        now: Instant,
    ) -> &mut Self {
        self.pending_submission = None;
        self.notification = Some(outcome.notification());
        if !outcome.is_accepted() {
            return self;
        }
        if self.screen_generation == screen {
            self.address_form.reset();
        }
        if self.is_address_screen_mounted(screen) {
            if let Some(previous) = self.back_navigation.take() {
                self.scheduler.cancel(previous);
            }
            let id = self
                .scheduler
                .schedule(self.navigation_delay, now, NavigationAction::Back);
            self.back_navigation = Some(id);
        } else {
            debug!("Address screen #{} is gone, not navigating back.", screen);
        }
        self
    }

    /// Give up on the submission in flight, if any, reporting it as failed.
    /// Used when its reply can no longer arrive.
    ///
    pub fn abandon_submission(&mut self) -> &mut Self {
        if let Some(screen) = self.pending_submission {
            warn!("Abandoning submission from address screen #{}.", screen);
            let outcome = Outcome::Failed(FAILED_MESSAGE.to_owned());
            self.apply_submission_outcome(&outcome, screen, Instant::now());
        }
        self
    }

    pub fn has_scheduled_navigation(&self) -> bool {
        !self.scheduler.is_empty()
    }

    /// Run deferred navigations that are due at `now`.
    ///
    pub fn run_due_tasks(&mut self, now: Instant) -> &mut Self {
        for action in self.scheduler.take_due(now) {
            match action {
                NavigationAction::Back => {
                    self.back_navigation = None;
                    if *self.current_view() == View::AddAddress {
                        self.go_back();
                    }
                }
            }
        }
        self
    }

    pub fn get_notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn set_notification(&mut self, notification: Notification) -> &mut Self {
        self.notification = Some(notification);
        self
    }

    pub fn dismiss_notification(&mut self) -> &mut Self {
        self.notification = None;
        self
    }

    pub fn push_log_entry(&mut self, entry: String) -> &mut Self {
        if self.log_entries.len() == MAX_LOG_ENTRIES {
            self.log_entries.pop_front();
        }
        self.log_entries.push_back(entry);
        self
    }

    pub fn get_log_entries(&self) -> &VecDeque<String> {
        &self.log_entries
    }
}
