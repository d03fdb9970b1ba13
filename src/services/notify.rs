use crate::models::MatchResponse;
use reqwest::Client;
use std::time::Duration;

/// Best-effort relay of match responses to an external webhook.
///
/// Dispatch is fire-and-forget: the POST runs on a detached task and its
/// failure is logged, never surfaced to the request that triggered it.
pub struct WebhookNotifier {
    client: Client,
    return_url: Option<String>,
}

impl WebhookNotifier {
    pub fn new(return_url: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, return_url }
    }

    /// Relay the response payload without blocking the caller.
    pub fn dispatch(&self, payload: &MatchResponse) {
        let Some(url) = self.return_url.clone() else {
            tracing::debug!("No return webhook configured, skipping relay");
            return;
        };

        let body = match serde_json::to_value(payload) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to serialize webhook payload: {}", e);
                return;
            }
        };

        let client = self.client.clone();
        tokio::spawn(async move {
            match client.post(&url).json(&body).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!("Webhook relay delivered to {}", url);
                }
                Ok(response) => {
                    tracing::warn!("Webhook relay to {} returned {}", url, response.status());
                }
                Err(e) => {
                    tracing::warn!("Webhook relay to {} failed: {}", url, e);
                }
            }
        });
    }
}
