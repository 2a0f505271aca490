mod client;
mod error;

pub use error::ApiError;

use crate::address::{AddAddressRequest, AddAddressResponse, AddressRegistry};
use async_trait::async_trait;
use client::Client;
use log::*;

const ADDITIONAL_ADDRESS_ENDPOINT: &str = "users/additional-address";

/// Responsible for asynchronous interaction with the storefront API.
///
pub struct Api {
    client: Client,
}

impl Api {
    /// Returns a new instance for the given base URL and optional token.
    ///
    pub fn new(base_url: &str, access_token: Option<&str>) -> Api {
        debug!("Initializing storefront client for {}...", base_url);
        Api {
            client: Client::new(access_token, base_url),
        }
    }
}

#[async_trait]
impl AddressRegistry for Api {
    async fn add_additional_address(
        &mut self,
        request: &AddAddressRequest,
    ) -> Result<AddAddressResponse, ApiError> {
        debug!("Posting additional address...");
        self.client
            .post_json(ADDITIONAL_ADDRESS_ENDPOINT, request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{
        submit, AddressDraft, Outcome, FAILED_MESSAGE, UNKNOWN_ERROR_MESSAGE,
    };
    use fake::uuid::UUIDv4;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;

    fn jane() -> AddressDraft {
        AddressDraft {
            name: "Jane Doe".to_string(),
            mobile_no: "5551234".to_string(),
            ..AddressDraft::default()
        }
    }

    #[tokio::test]
    async fn add_additional_address_success() -> Result<(), ApiError> {
        let token: String = UUIDv4.fake();
        let draft: AddressDraft = Faker.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/users/additional-address")
                    .header("Authorization", &format!("Bearer {}", &token))
                    .json_body(json!({
                        "additionalAddress": {
                            "country": draft.country,
                            "name": draft.name,
                            "mobileNo": draft.mobile_no,
                            "houseNo": draft.house_no,
                            "street": draft.street,
                            "landmark": draft.landmark,
                            "postalCode": draft.postal_code,
                        }
                    }));
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;

        let mut api = Api::new(&server.base_url(), Some(token.as_str()));
        let response = api
            .add_additional_address(&AddAddressRequest {
                additional_address: draft.clone(),
            })
            .await?;
        assert!(response.is_success());
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn add_additional_address_unauthorized() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/users/additional-address");
                then.status(401);
            })
            .await;

        let mut api = Api::new(&server.base_url(), None);
        let result = api
            .add_additional_address(&AddAddressRequest {
                additional_address: jane(),
            })
            .await;
        assert!(matches!(result, Err(ApiError::Status { status: 401, .. })));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn add_additional_address_malformed_body() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/users/additional-address");
                then.status(200).body("not json");
            })
            .await;

        let mut api = Api::new(&server.base_url(), None);
        let result = api
            .add_additional_address(&AddAddressRequest {
                additional_address: jane(),
            })
            .await;
        assert!(matches!(result, Err(ApiError::Deserialization(_))));
    }

    #[tokio::test]
    async fn submit_end_to_end_success() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/users/additional-address")
                    .json_body(json!({
                        "additionalAddress": {
                            "country": "",
                            "name": "Jane Doe",
                            "mobileNo": "5551234",
                            "houseNo": "",
                            "street": "",
                            "landmark": "",
                            "postalCode": "",
                        }
                    }));
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;

        let mut api = Api::new(&server.base_url(), None);
        let outcome = submit(&mut api, jane()).await;
        assert_eq!(outcome, Outcome::Accepted);
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn submit_rejected_draft_never_reaches_server() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/users/additional-address");
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;

        let mut api = Api::new(&server.base_url(), None);
        let outcome = submit(&mut api, AddressDraft::default()).await;
        assert!(matches!(outcome, Outcome::Rejected(_)));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn submit_server_refusal() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/users/additional-address");
                then.status(200).json_body(json!({
                    "success": false,
                    "data": { "updatedUser": "Address limit reached" }
                }));
            })
            .await;

        let mut api = Api::new(&server.base_url(), None);
        let outcome = submit(&mut api, jane()).await;
        assert_eq!(outcome, Outcome::Failed("Address limit reached".to_string()));
    }

    #[tokio::test]
    async fn submit_server_refusal_without_data() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/users/additional-address");
                then.status(200).json_body(json!({ "success": false }));
            })
            .await;

        let mut api = Api::new(&server.base_url(), None);
        let outcome = submit(&mut api, jane()).await;
        assert_eq!(outcome, Outcome::Failed(UNKNOWN_ERROR_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn submit_server_error_is_transport_failure() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/users/additional-address");
                then.status(500).body("boom");
            })
            .await;

        let mut api = Api::new(&server.base_url(), None);
        let outcome = submit(&mut api, jane()).await;
        assert_eq!(outcome, Outcome::Failed(FAILED_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn submit_unreachable_server_is_transport_failure() {
        // Nothing listens on the discard port.
        let mut api = Api::new("http://127.0.0.1:9", None);
        let outcome = submit(&mut api, jane()).await;
        assert_eq!(outcome, Outcome::Failed(FAILED_MESSAGE.to_string()));
    }
}
