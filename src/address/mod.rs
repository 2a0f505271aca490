//! Address domain module.
//!
//! This module holds the address being entered by the user and the workflow
//! that validates it and registers it with the remote API:
//! - `AddressDraft` and `AddressField`: the in-progress field values
//! - `is_submittable`: the required-field check
//! - `submit`: the submission workflow producing an `Outcome`

mod draft;
mod submission;

pub use draft::{AddressDraft, AddressField};
pub use submission::{
    submit, AddAddressRequest, AddAddressResponse, AddressRegistry, Notification, Outcome,
    FAILED_MESSAGE,
};

#[cfg(test)]
pub use submission::UNKNOWN_ERROR_MESSAGE;
