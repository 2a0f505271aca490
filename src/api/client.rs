//! HTTP client for storefront API requests.
//!
//! This module provides a low-level HTTP client wrapper that handles
//! authentication, JSON bodies and status checking.

use super::ApiError;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};

/// Makes requests to the storefront API and decodes JSON replies.
///
pub struct Client {
    pub(crate) access_token: Option<String>,
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given access token and base URL.
    ///
    pub fn new(access_token: Option<&str>, base_url: &str) -> Self {
        Client {
            access_token: access_token.map(str::to_owned),
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Send the body as JSON to the endpoint and decode the reply.
    ///
    pub async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call_with_body(Method::POST, endpoint, body).await
    }

    /// Make request with a JSON body and return the decoded reply or error.
    ///
    async fn call_with_body<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request_url = format!("{}/{}", &self.base_url, endpoint.trim_start_matches('/'));
        log::debug!("{} {}", method, request_url);

        let mut request = self.http_client.request(method, &request_url).json(body);
        if let Some(token) = &self.access_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!("API request failed with status {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            log::error!(
                "Failed to deserialize API response: {}. Response body: {}",
                e,
                String::from_utf8_lossy(&bytes)
            );
            ApiError::from(e)
        })
    }
}
