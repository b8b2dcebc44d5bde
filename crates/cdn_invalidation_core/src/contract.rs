use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::caller_reference::caller_reference;

pub const DEFAULT_DISTRIBUTION_ID: &str = "EA51AZF868RKT";
pub const WILDCARD_PATH: &str = "/*";
pub const INVALIDATION_CONFIRMATION: &str = "CloudFront cache invalidated";
pub const SUCCESS_STATUS_CODE: u16 = 200;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvalidationRequest {
    pub distribution_id: String,
    pub paths: Vec<String>,
    pub caller_reference: String,
}

impl InvalidationRequest {
    /// Number of paths, reported to the API as the batch quantity.
    pub fn quantity(&self) -> usize {
        self.paths.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvalidationReceipt {
    pub invalidation_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn build_invalidation_request(
    distribution_id: &str,
    invoked_at: DateTime<Utc>,
) -> Result<InvalidationRequest, ValidationError> {
    let distribution_id = distribution_id.trim();
    if distribution_id.is_empty() {
        return Err(ValidationError::new("distribution_id cannot be empty"));
    }

    Ok(InvalidationRequest {
        distribution_id: distribution_id.to_string(),
        paths: vec![WILDCARD_PATH.to_string()],
        caller_reference: caller_reference(invoked_at),
    })
}

/// The fixed response returned after every successful invalidation. The body
/// is the JSON encoding of the confirmation message.
pub fn confirmation_response() -> HandlerResponse {
    HandlerResponse {
        status_code: SUCCESS_STATUS_CODE,
        body: serde_json::Value::from(INVALIDATION_CONFIRMATION).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    use super::*;

    fn invoked_at() -> DateTime<Utc> {
        Utc.timestamp_opt(1_760_000_000, 250_000_000).unwrap()
    }

    #[test]
    fn builds_wildcard_request_for_distribution() {
        let request = build_invalidation_request(DEFAULT_DISTRIBUTION_ID, invoked_at())
            .expect("default distribution should be valid");

        assert_eq!(request.distribution_id, "EA51AZF868RKT");
        assert_eq!(request.paths, vec!["/*".to_string()]);
        assert_eq!(request.quantity(), 1);
        assert_eq!(request.caller_reference, "1760000000250000000");
    }

    #[test]
    fn trims_distribution_id() {
        let request = build_invalidation_request("  E123  ", invoked_at())
            .expect("padded distribution should be valid");
        assert_eq!(request.distribution_id, "E123");
    }

    #[test]
    fn rejects_blank_distribution_id() {
        let error = build_invalidation_request("   ", invoked_at())
            .expect_err("blank distribution should fail");
        assert_eq!(error.message(), "distribution_id cannot be empty");
    }

    #[test]
    fn caller_reference_changes_between_invocations() {
        let first = build_invalidation_request("E123", invoked_at()).unwrap();
        let second =
            build_invalidation_request("E123", invoked_at() + Duration::microseconds(1)).unwrap();

        assert_ne!(first.caller_reference, second.caller_reference);
        assert_eq!(first.paths, second.paths);
    }

    #[test]
    fn confirmation_response_is_fixed() {
        let response = confirmation_response();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "\"CloudFront cache invalidated\"");
        assert_eq!(response, confirmation_response());
    }

    #[test]
    fn response_serializes_with_status_code_key() {
        let value = serde_json::to_value(confirmation_response()).unwrap();
        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "body": "\"CloudFront cache invalidated\"",
            })
        );
    }
}
