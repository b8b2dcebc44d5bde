pub use cdn_invalidation_core::{caller_reference, config, contract};
