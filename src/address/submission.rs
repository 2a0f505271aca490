//! Address submission workflow.
//!
//! Validates a draft, registers it with the remote API and interprets the
//! reply as an `Outcome`. Applying the outcome (notification, form reset,
//! navigation) is left to the caller.

use super::draft::{is_submittable, AddressDraft};
use crate::api::ApiError;
use async_trait::async_trait;
use log::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as _;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Full name and mobile number are required.";
pub const SUCCESS_MESSAGE: &str = "Address added successfully!";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
pub const FAILED_MESSAGE: &str = "Failed to add address. Please try again.";

const ERROR_TITLE: &str = "Error";
const SUCCESS_TITLE: &str = "Success";

/// Defines the payload sent to register an additional address.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAddressRequest {
    pub additional_address: AddressDraft,
}

/// Defines the reply of the address registration endpoint.
///
/// Both fields are kept loosely typed: `success` is judged by truthiness and
/// `data.updatedUser` may be any JSON value.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAddressResponse {
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub data: Value,
}

impl AddAddressResponse {
    pub fn is_success(&self) -> bool {
        is_truthy(&self.success)
    }

    /// Message explaining a refusal, taken from `data.updatedUser`.
    ///
    pub fn refusal_message(&self) -> String {
        match self.data.get("updatedUser") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => UNKNOWN_ERROR_MESSAGE.to_owned(),
            Some(other) => other.to_string(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Remote service able to store a new shipping address.
///
/// An `Err` means the call itself did not complete (transport failure,
/// unexpected status or an unreadable body).
///
#[async_trait]
pub trait AddressRegistry: Send {
    async fn add_additional_address(
        &mut self,
        request: &AddAddressRequest,
    ) -> Result<AddAddressResponse, ApiError>;
}

/// Result of one submission attempt.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Required fields were missing; nothing was sent.
    Rejected(String),
    Accepted,
    /// The server refused the address or the call did not complete.
    Failed(String),
}

/// Modal message shown to the user.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: &str, body: &str) -> Self {
        Notification {
            title: title.to_owned(),
            body: body.to_owned(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE
    }
}

impl Outcome {
    /// Return the notification that reports this outcome to the user.
    ///
    pub fn notification(&self) -> Notification {
        match self {
            Outcome::Rejected(message) | Outcome::Failed(message) => {
                Notification::new(ERROR_TITLE, message)
            }
            Outcome::Accepted => Notification::new(SUCCESS_TITLE, SUCCESS_MESSAGE),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

/// Validate the draft and, if it passes, register it with the registry.
///
/// At most one call reaches the registry per invocation and none when
/// validation fails. The draft is sent verbatim under `additionalAddress`.
///
pub async fn submit<R>(registry: &mut R, draft: AddressDraft) -> Outcome
where
    R: AddressRegistry + ?Sized,
{
    if !is_submittable(&draft) {
        debug!("Rejecting address draft without name or mobile number.");
        return Outcome::Rejected(REQUIRED_FIELDS_MESSAGE.to_owned());
    }

    let request = AddAddressRequest {
        additional_address: draft,
    };
    info!(
        "Registering additional address for '{}'...",
        request.additional_address.name
    );

    match registry.add_additional_address(&request).await {
        Ok(response) if response.is_success() => {
            info!("Address registered.");
            Outcome::Accepted
        }
        Ok(response) => {
            let message = response.refusal_message();
            warn!("Address registration refused: {}", message);
            Outcome::Failed(message)
        }
        Err(e) => {
            error!("Failed to register address: {}", e);
            let mut source = e.source();
            while let Some(err) = source {
                error!("  Caused by: {}", err);
                source = err.source();
            }
            Outcome::Failed(FAILED_MESSAGE.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressField;
    use fake::{Fake, Faker};
    use serde_json::json;

    /// Registry double that records requests and replays a canned reply.
    ///
    struct StubRegistry {
        requests: Vec<AddAddressRequest>,
        reply: Option<AddAddressResponse>,
    }

    impl StubRegistry {
        fn replying(response: AddAddressResponse) -> Self {
            StubRegistry {
                requests: vec![],
                reply: Some(response),
            }
        }

        fn failing() -> Self {
            StubRegistry {
                requests: vec![],
                reply: None,
            }
        }
    }

    #[async_trait]
    impl AddressRegistry for StubRegistry {
        async fn add_additional_address(
            &mut self,
            request: &AddAddressRequest,
        ) -> Result<AddAddressResponse, ApiError> {
            self.requests.push(request.clone());
            match &self.reply {
                Some(response) => Ok(response.clone()),
                None => Err(ApiError::Status {
                    status: 503,
                    message: "Service Unavailable".to_string(),
                }),
            }
        }
    }

    fn valid_draft() -> AddressDraft {
        let mut draft: AddressDraft = Faker.fake();
        draft.name = "Jane Doe".to_string();
        draft.mobile_no = "5551234".to_string();
        draft
    }

    fn success() -> AddAddressResponse {
        AddAddressResponse {
            success: json!(true),
            data: Value::Null,
        }
    }

    #[tokio::test]
    async fn rejects_missing_required_fields_without_calling() {
        let mut registry = StubRegistry::replying(success());
        let mut drafts = vec![AddressDraft::default(), valid_draft(), valid_draft()];
        drafts[1].set(AddressField::Name, "");
        drafts[2].set(AddressField::MobileNo, "");

        for draft in drafts {
            let outcome = submit(&mut registry, draft).await;
            assert_eq!(
                outcome,
                Outcome::Rejected(REQUIRED_FIELDS_MESSAGE.to_string())
            );
        }
        assert!(registry.requests.is_empty());
    }

    #[tokio::test]
    async fn rejection_is_repeatable() {
        let mut registry = StubRegistry::replying(success());
        let first = submit(&mut registry, AddressDraft::default()).await;
        let second = submit(&mut registry, AddressDraft::default()).await;
        assert_eq!(first, second);
        assert_eq!(first.notification(), second.notification());
        assert!(registry.requests.is_empty());
    }

    #[tokio::test]
    async fn sends_draft_verbatim_once() {
        let mut registry = StubRegistry::replying(success());
        let mut draft = valid_draft();
        draft.set(AddressField::Street, "  Baker Street  ");

        let outcome = submit(&mut registry, draft.clone()).await;

        assert_eq!(outcome, Outcome::Accepted);
        assert_eq!(registry.requests.len(), 1);
        assert_eq!(registry.requests[0].additional_address, draft);
    }

    #[tokio::test]
    async fn server_refusal_uses_server_message() {
        let mut registry = StubRegistry::replying(AddAddressResponse {
            success: json!(false),
            data: json!({"updatedUser": "X"}),
        });
        let outcome = submit(&mut registry, valid_draft()).await;
        assert_eq!(outcome, Outcome::Failed("X".to_string()));
        assert_eq!(outcome.notification(), Notification::new("Error", "X"));
    }

    #[tokio::test]
    async fn server_refusal_without_data_is_unknown_error() {
        let mut registry = StubRegistry::replying(AddAddressResponse::default());
        let outcome = submit(&mut registry, valid_draft()).await;
        assert_eq!(outcome, Outcome::Failed(UNKNOWN_ERROR_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn server_refusal_with_empty_data_is_unknown_error() {
        let mut registry = StubRegistry::replying(AddAddressResponse {
            success: json!(false),
            data: json!({}),
        });
        let outcome = submit(&mut registry, valid_draft()).await;
        assert_eq!(outcome, Outcome::Failed(UNKNOWN_ERROR_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn transport_failure_is_generic() {
        let mut registry = StubRegistry::failing();
        let outcome = submit(&mut registry, valid_draft()).await;
        assert_eq!(outcome, Outcome::Failed(FAILED_MESSAGE.to_string()));
        assert_eq!(registry.requests.len(), 1);
    }

    #[test]
    fn test_notifications() {
        assert_eq!(
            Outcome::Rejected(REQUIRED_FIELDS_MESSAGE.to_string()).notification(),
            Notification::new("Error", "Full name and mobile number are required.")
        );
        assert_eq!(
            Outcome::Accepted.notification(),
            Notification::new("Success", "Address added successfully!")
        );
        assert_eq!(
            Outcome::Failed(FAILED_MESSAGE.to_string()).notification(),
            Notification::new("Error", "Failed to add address. Please try again.")
        );
        assert!(!Outcome::Accepted.notification().is_error());
    }

    #[tokio::test]
    async fn server_refusal_with_user_object_is_rendered() {
        let response: AddAddressResponse = serde_json::from_str(
            r#"{"success": false, "data": {"updatedUser": {"_id": "1"}}}"#,
        )
        .unwrap();
        let mut registry = StubRegistry::replying(response);
        let outcome = submit(&mut registry, valid_draft()).await;
        assert_eq!(outcome, Outcome::Failed(r#"{"_id":"1"}"#.to_string()));
    }

    #[tokio::test]
    async fn null_success_is_a_refusal() {
        let response: AddAddressResponse = serde_json::from_str(r#"{"success": null}"#).unwrap();
        let mut registry = StubRegistry::replying(response);
        let outcome = submit(&mut registry, valid_draft()).await;
        assert_eq!(outcome, Outcome::Failed(UNKNOWN_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_response_decoding() {
        let response: AddAddressResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.is_success());
        assert_eq!(response.refusal_message(), UNKNOWN_ERROR_MESSAGE);

        let response: AddAddressResponse =
            serde_json::from_str(r#"{"success": false, "data": {"updatedUser": "Limit reached"}}"#)
                .unwrap();
        assert_eq!(response.refusal_message(), "Limit reached");

        let response: AddAddressResponse =
            serde_json::from_str(r#"{"success": false, "data": {"updatedUser": null}}"#).unwrap();
        assert_eq!(response.refusal_message(), UNKNOWN_ERROR_MESSAGE);

        let response: AddAddressResponse =
            serde_json::from_str(r#"{"success": 0, "data": "oops"}"#).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.refusal_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_success_truthiness() {
        let cases = [
            (json!(true), true),
            (json!(1), true),
            (json!("yes"), true),
            (json!({}), true),
            (json!(false), false),
            (json!(0), false),
            (json!(""), false),
            (Value::Null, false),
        ];
        for (success, expected) in cases {
            let response = AddAddressResponse {
                success: success.clone(),
                data: Value::Null,
            };
            assert_eq!(response.is_success(), expected, "success = {}", success);
        }
    }

    #[test]
    fn test_request_encoding() {
        let request = AddAddressRequest {
            additional_address: valid_draft(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value["additionalAddress"]["name"], "Jane Doe");
        assert_eq!(value["additionalAddress"]["mobileNo"], "5551234");
    }
}
