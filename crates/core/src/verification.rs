//! Operation result returned by the rule service, and its reduction to a
//! UI-facing verification outcome.

use serde::{Deserialize, Serialize};

/// `operationStatus` value the service uses for a clean pass.
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// Message level that maps to [`VerificationStatus::Failure`].
pub const LEVEL_ERROR: &str = "ERROR";

/// Response body of the rule service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    #[serde(default)]
    pub operation_status: String,
    /// Missing and `null` both deserialize as `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_messages: Option<Vec<OperationMessage>>,
}

impl OperationResult {
    pub fn is_success(&self) -> bool {
        self.operation_status == STATUS_SUCCESS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationMessage {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub description: String,
}

impl OperationMessage {
    /// Stand-in used when a non-success result carries no messages.
    fn unspecified_error() -> Self {
        Self {
            level: LEVEL_ERROR.to_string(),
            description: String::new(),
        }
    }
}

/// Verification state shown next to a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Initial state. [`parse_verification_response`] never produces it;
    /// it exists for UIs that show a pending state before a response.
    #[default]
    Waiting,
    Success,
    Failure,
    Warning,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub status: VerificationStatus,
    pub message: String,
}

/// Reduce an operation result to a status/message pair.
///
/// A non-success result is judged by its *first* message only; later
/// messages are ignored. An empty or missing message list counts as a
/// single `ERROR` with an empty description.
pub fn parse_verification_response(response: &OperationResult) -> VerificationOutcome {
    let mut outcome = VerificationOutcome::default();

    if response.is_success() {
        outcome.status = VerificationStatus::Success;
        return outcome;
    }

    let first = response
        .operation_messages
        .as_deref()
        .and_then(<[OperationMessage]>::first)
        .cloned()
        .unwrap_or_else(OperationMessage::unspecified_error);

    outcome.status = if first.level == LEVEL_ERROR {
        VerificationStatus::Failure
    } else {
        VerificationStatus::Warning
    };
    outcome.message = first.description;
    outcome
}

/// Parse a raw rule service response body.
pub fn parse_operation_result(text: &str) -> Result<OperationResult, serde_json::Error> {
    serde_json::from_str(text)
}
