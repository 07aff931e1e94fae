//! REST client for the rule validation endpoint.
//!
//! One [`ValidationClient::validate`] call is one `POST`. Nothing is
//! retried, queued or cached; timeouts belong to the [`reqwest::Client`]
//! passed to [`ValidationClient::with_client`].

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::{Map, Value};

use emmis_core::{
    create_field_input, create_field_rules_payload, parse_verification_response, Field,
    OperationResult, RulePayloadEntry, ValidationRequestPayload, VerificationOutcome,
};

use crate::config::ClientConfig;

/// Path of the rule endpoint on the portal.
pub const VALIDATION_API_PATH: &str = "/emmis-portal/api/v1/rules";

/// Content type sent with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// HTTP client for the rule validation endpoint.
#[derive(Debug, Clone)]
pub struct ValidationClient {
    client: reqwest::Client,
    url: String,
}

/// Errors from the validation transport layer.
#[derive(Debug, thiserror::Error)]
pub enum ValidationClientError {
    /// The HTTP request failed (network, DNS, TLS) or the response body was
    /// not a valid operation result.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request payload could not be encoded.
    #[error("Failed to encode validation payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// The rule service returned a non-2xx status code.
    #[error("Rule service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl Default for ValidationClient {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

impl ValidationClient {
    /// Create a client posting to `url`.
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (shared
    /// connection pool, caller-configured timeouts).
    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.validation_url())
    }

    /// Request target.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Ask the rule service to run `rules` against `input`.
    ///
    /// Sends `{input, sessionData, rules}` and returns the decoded
    /// operation result. Pass empty containers for any part not needed.
    pub async fn validate(
        &self,
        input: Map<String, Value>,
        session_data: Map<String, Value>,
        rules: Vec<RulePayloadEntry>,
    ) -> Result<OperationResult, ValidationClientError> {
        let payload = ValidationRequestPayload {
            input,
            session_data,
            rules,
        };
        self.send(&payload).await
    }

    /// Send a prebuilt payload. `ValidationRequestPayload::default()` sends
    /// empty `input`, `sessionData` and `rules`.
    pub async fn send(
        &self,
        payload: &ValidationRequestPayload,
    ) -> Result<OperationResult, ValidationClientError> {
        let body = serde_json::to_vec(payload)?;

        tracing::debug!(
            url = %self.url,
            rules = payload.rules.len(),
            "Dispatching validation request",
        );

        let response = self
            .client
            .post(self.url.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<OperationResult>().await?)
    }

    /// Validate one field with its enabled rules and reduce the answer to a
    /// status/message pair.
    pub async fn verify_field(
        &self,
        field: &Field,
        session_data: Map<String, Value>,
    ) -> Result<VerificationOutcome, ValidationClientError> {
        let input = create_field_input(field);
        let rules = create_field_rules_payload(field);

        let result = self.validate(input, session_data, rules).await?;
        let outcome = parse_verification_response(&result);

        tracing::debug!(
            field = %field.name_key(),
            status = ?outcome.status,
            "Field verification complete",
        );
        Ok(outcome)
    }

    /// Turn a non-2xx response into [`ValidationClientError::Api`] carrying
    /// the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ValidationClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Rule service rejected request");
            return Err(ValidationClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
