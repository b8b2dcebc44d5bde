//! Shared CDN invalidation domain primitives.
//!
//! This crate owns request construction, caller reference derivation and the
//! response contract. It intentionally excludes AWS SDK and Lambda runtime
//! concerns.

pub mod caller_reference;
pub mod config;
pub mod contract;
