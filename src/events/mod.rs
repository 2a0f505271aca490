//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: storefront API interactions
//! - Terminal events: user input and the UI tick

pub mod network;
pub mod terminal;
