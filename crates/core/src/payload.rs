//! Wire types for the `POST /emmis-portal/api/v1/rules` request body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One rule the remote service should run.
///
/// `config` is omitted from the JSON entirely (not sent as `null`) for
/// rules built from a flat list of names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulePayloadEntry {
    pub rule_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
}

impl RulePayloadEntry {
    /// An entry with no config, as produced from a plain rule name.
    pub fn named(rule_name: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            config: None,
        }
    }
}

/// The complete request body.
///
/// `Default` is the "no arguments" request: empty `input`, `sessionData`
/// and `rules`, which is still well-formed on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequestPayload {
    /// User input under validation, usually a single `name -> value` pair.
    pub input: Map<String, Value>,
    /// Other user input the rules may consult.
    pub session_data: Map<String, Value>,
    pub rules: Vec<RulePayloadEntry>,
}
