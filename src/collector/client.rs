//! HTTP client for delivering compiled markup to the collector
//!
//! One POST per Finish action. The collector is external: any 2xx
//! acknowledgement counts as delivered, anything else is a rejection.

use super::traits::CollectorTransport;
use async_trait::async_trait;
use serde::Serialize;

/// Fixed default collector endpoint
const DEFAULT_COLLECTOR_URL: &str = "https://n8n.atendimentoaocliente.shop/webhook/get-form";

/// Payload POSTed to the collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    /// Externally supplied form id; serialized as `null` when absent
    pub id: Option<String>,
    #[serde(rename = "formHTML")]
    pub form_html: String,
}

/// Outcome of one delivery attempt. The three variants are always
/// reported distinctly to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Remote acknowledged with a 2xx status
    Delivered,
    /// Remote reachable but returned a failure status
    Rejected { status: u16, reason: String },
    /// Network-level failure, no response
    TransportFailure(String),
}

/// Client for the external collector endpoint
pub struct CollectorClient {
    url: String,
    http: reqwest::Client,
}

impl CollectorClient {
    /// Create a client, resolving the endpoint from the
    /// `FORMKIT_COLLECTOR_URL` environment variable, then the config
    /// override, then the fixed default.
    pub fn new(config_url: Option<String>) -> Self {
        let url = std::env::var("FORMKIT_COLLECTOR_URL")
            .ok()
            .or(config_url)
            .unwrap_or_else(|| DEFAULT_COLLECTOR_URL.to_string());
        Self {
            url,
            http: reqwest::Client::new(),
        }
    }
}

/// Classify an HTTP response status
fn outcome_for_status(status: reqwest::StatusCode) -> DeliveryOutcome {
    if status.is_success() {
        DeliveryOutcome::Delivered
    } else {
        DeliveryOutcome::Rejected {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        }
    }
}

#[async_trait]
impl CollectorTransport for CollectorClient {
    async fn deliver(&self, payload: &FormPayload) -> DeliveryOutcome {
        tracing::info!(url = %self.url, "delivering form to collector");
        match self.http.post(&self.url).json(payload).send().await {
            Ok(response) => {
                let outcome = outcome_for_status(response.status());
                if let DeliveryOutcome::Rejected { status, .. } = &outcome {
                    tracing::warn!(status = *status, "collector rejected the form");
                }
                outcome
            }
            Err(err) => {
                tracing::warn!(error = %err, "collector unreachable");
                DeliveryOutcome::TransportFailure(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    #[test]
    fn test_payload_serializes_with_form_html_key() {
        let payload = FormPayload {
            id: Some("abc-123".to_string()),
            form_html: "<form></form>".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc-123",
                "formHTML": "<form></form>",
            })
        );
    }

    #[test]
    fn test_absent_id_serializes_as_null() {
        let payload = FormPayload {
            id: None,
            form_html: String::new(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id"], serde_json::Value::Null);
    }

    #[test]
    fn test_2xx_statuses_are_delivered() {
        assert_eq!(outcome_for_status(StatusCode::OK), DeliveryOutcome::Delivered);
        assert_eq!(
            outcome_for_status(StatusCode::NO_CONTENT),
            DeliveryOutcome::Delivered
        );
    }

    #[test]
    fn test_rejection_preserves_the_status_code() {
        let outcome = outcome_for_status(StatusCode::NOT_FOUND);
        assert_eq!(
            outcome,
            DeliveryOutcome::Rejected {
                status: 404,
                reason: "Not Found".to_string(),
            }
        );

        let outcome = outcome_for_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            outcome,
            DeliveryOutcome::Rejected {
                status: 500,
                reason: "Internal Server Error".to_string(),
            }
        );
    }
}
