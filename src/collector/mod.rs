//! Collector module for form delivery

mod client;
mod traits;

pub use client::{CollectorClient, DeliveryOutcome, FormPayload};
pub use traits::CollectorTransport;

#[cfg(test)]
pub use traits::MockCollectorTransport;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mock_transport_substitutes_for_the_client() {
        let mut mock = MockCollectorTransport::new();
        mock.expect_deliver()
            .times(1)
            .returning(|_| DeliveryOutcome::Delivered);

        let payload = FormPayload {
            id: None,
            form_html: "<form></form>".to_string(),
        };
        let outcome = tokio_test::block_on(mock.deliver(&payload));
        assert_eq!(outcome, DeliveryOutcome::Delivered);
    }
}
