use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::adapters::invalidator::CacheInvalidator;
use crate::runtime::config::InvalidationConfig;
use crate::runtime::contract::{
    build_invalidation_request, confirmation_response, HandlerResponse, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidationHandlerError {
    #[error("invalid invalidation request: {0}")]
    InvalidRequest(#[from] ValidationError),
    #[error("failed to create cloudfront invalidation: {0}")]
    Api(String),
}

/// Purges every cached object of the configured distribution.
///
/// The event payload is accepted as-is and ignored. Exactly one invalidation is
/// requested per call; failures are returned to the runtime untouched.
pub fn handle_invalidation_event(
    _event: Value,
    config: &InvalidationConfig,
    invoked_at: DateTime<Utc>,
    invalidator: &dyn CacheInvalidator,
) -> Result<HandlerResponse, InvalidationHandlerError> {
    let request = build_invalidation_request(&config.distribution_id, invoked_at)?;

    tracing::info!(
        distribution_id = %request.distribution_id,
        path_count = request.quantity(),
        caller_reference = %request.caller_reference,
        "invalidation_requested"
    );

    let receipt = match invalidator.create_invalidation(&request) {
        Ok(value) => value,
        Err(error) => {
            tracing::error!(
                distribution_id = %request.distribution_id,
                error = %error,
                "invalidation_failed"
            );
            return Err(InvalidationHandlerError::Api(error));
        }
    };

    tracing::info!(
        distribution_id = %request.distribution_id,
        invalidation_id = %receipt.invalidation_id,
        status = %receipt.status,
        "invalidation_created"
    );

    Ok(confirmation_response())
}
