use crate::runtime::contract::{InvalidationReceipt, InvalidationRequest};

pub trait CacheInvalidator {
    fn create_invalidation(
        &self,
        request: &InvalidationRequest,
    ) -> Result<InvalidationReceipt, String>;
}
