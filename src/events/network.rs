use crate::address::{submit, AddressDraft, AddressRegistry};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    /// Register the draft captured on address screen instance `screen`.
    AddAddress { draft: AddressDraft, screen: u64 },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a, R: AddressRegistry + ?Sized> {
    state: &'a Arc<Mutex<State>>,
    registry: &'a mut R,
}

impl<'a, R: AddressRegistry + ?Sized> Handler<'a, R> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, registry: &'a mut R) -> Self {
        Handler { state, registry }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::AddAddress { draft, screen } => self.add_address(draft, screen).await?,
        }
        Ok(())
    }

    /// Submit the draft and apply the outcome to state. The state lock is
    /// not held while the request is in flight.
    ///
    async fn add_address(&mut self, draft: AddressDraft, screen: u64) -> Result<()> {
        let outcome = submit(&mut *self.registry, draft).await;
        let mut state = self.state.lock().await;
        state.apply_submission_outcome(&outcome, screen, Instant::now());
        Ok(())
    }
}
