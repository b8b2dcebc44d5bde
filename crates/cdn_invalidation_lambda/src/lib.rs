//! AWS-oriented adapters and handlers for CDN cache invalidation.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! CloudFront adapter seam and log setup) and re-exports the core contract
//! under a single runtime module boundary.

pub mod adapters;
pub mod handlers;
pub mod logging;
pub mod runtime;
