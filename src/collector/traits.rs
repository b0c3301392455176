//! Trait abstraction for the collector transport to enable mocking in tests

use super::client::{DeliveryOutcome, FormPayload};
use async_trait::async_trait;

/// Transport for delivering compiled markup, substitutable in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectorTransport: Send + Sync {
    /// POST the payload to the collector and classify the outcome
    async fn deliver(&self, payload: &FormPayload) -> DeliveryOutcome;
}
