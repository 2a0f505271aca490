//! Application state management module.
//!
//! This module contains the state shared by the terminal and network threads:
//! - Main `State` struct holding views, the address form and notifications
//! - Navigation types (View, NavigationAction)
//! - The address form and its focus
//! - Deferred navigation scheduling
//! - State error handling

mod error;
mod form;
mod navigation;
mod schedule;
mod state_impl;

pub use error::StateError;
pub use form::FormFocus;
pub use navigation::View;
pub use state_impl::State;
