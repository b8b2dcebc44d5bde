use aws_sdk_cloudfront::operation::create_invalidation::CreateInvalidationOutput;
use aws_sdk_cloudfront::types::{InvalidationBatch, Paths};
use cdn_invalidation_lambda::adapters::invalidator::CacheInvalidator;
use cdn_invalidation_lambda::handlers::invalidate::handle_invalidation_event;
use cdn_invalidation_lambda::logging::init_logging;
use cdn_invalidation_lambda::runtime::config::InvalidationConfig;
use cdn_invalidation_lambda::runtime::contract::{
    HandlerResponse, InvalidationReceipt, InvalidationRequest,
};
use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

const UNKNOWN_RECEIPT_FIELD: &str = "unknown";

struct CloudFrontInvalidator {
    cloudfront_client: aws_sdk_cloudfront::Client,
}

impl CacheInvalidator for CloudFrontInvalidator {
    fn create_invalidation(
        &self,
        request: &InvalidationRequest,
    ) -> Result<InvalidationReceipt, String> {
        let batch = invalidation_batch(request)?;
        let distribution_id = request.distribution_id.clone();
        let client = self.cloudfront_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .create_invalidation()
                    .distribution_id(distribution_id)
                    .invalidation_batch(batch)
                    .send()
                    .await
                    .map(|output| receipt_from_output(&output))
                    .map_err(|error| format!("cloudfront create_invalidation failed: {error}"))
            })
        })
    }
}

fn invalidation_batch(request: &InvalidationRequest) -> Result<InvalidationBatch, String> {
    let quantity = i32::try_from(request.quantity())
        .map_err(|_| format!("too many invalidation paths: {}", request.quantity()))?;
    let paths = Paths::builder()
        .quantity(quantity)
        .set_items(Some(request.paths.clone()))
        .build()
        .map_err(|error| format!("invalid invalidation paths: {error}"))?;

    InvalidationBatch::builder()
        .paths(paths)
        .caller_reference(request.caller_reference.clone())
        .build()
        .map_err(|error| format!("invalid invalidation batch: {error}"))
}

fn receipt_from_output(output: &CreateInvalidationOutput) -> InvalidationReceipt {
    match output.invalidation() {
        Some(invalidation) => InvalidationReceipt {
            invalidation_id: invalidation.id().to_string(),
            status: invalidation.status().to_string(),
        },
        None => InvalidationReceipt {
            invalidation_id: UNKNOWN_RECEIPT_FIELD.to_string(),
            status: UNKNOWN_RECEIPT_FIELD.to_string(),
        },
    }
}

async fn handle_request(
    event: LambdaEvent<Value>,
    config: &InvalidationConfig,
    invalidator: &CloudFrontInvalidator,
) -> Result<HandlerResponse, Error> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);
    let response = span.in_scope(|| {
        handle_invalidation_event(event.payload, config, Utc::now(), invalidator)
    })?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let invalidator = CloudFrontInvalidator {
        cloudfront_client: aws_sdk_cloudfront::Client::new(&aws_config),
    };
    let config = InvalidationConfig::from_env();
    tracing::info!(
        distribution_id = %config.distribution_id,
        "invalidate_runtime_started"
    );

    let invalidator = &invalidator;
    let config = &config;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(event, config, invalidator).await
    }))
    .await
}
