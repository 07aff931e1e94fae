//! Request formatting and response normalization for the EMMIS rule
//! validation service.
//!
//! Pure logic only: turns form field descriptions into the wire payload the
//! remote rule engine expects, and reduces its operation result to a
//! status/message pair the UI can render. No network or database access.

pub mod field;
pub mod formatter;
pub mod payload;
pub mod verification;

pub use field::{is_truthy, Component, Field, RuleSource};
pub use formatter::{
    create_component_rules_payload, create_field_input, create_field_rules_payload,
    get_rules_payload, rule_names_payload, AllowList,
};
pub use payload::{RulePayloadEntry, ValidationRequestPayload};
pub use verification::{
    parse_operation_result, parse_verification_response, OperationMessage, OperationResult,
    VerificationOutcome, VerificationStatus,
};
