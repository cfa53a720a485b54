//! Webhook announcement of new submissions.

use corkboard_core::constants::APPROVE_ROUTE_PREFIX;
use corkboard_core::event::Event;

/// Posts a Discord-compatible message for each submission so a moderator
/// sees the approval link without digging through the store.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
    origin: String,
}

impl Notifier {
    #[must_use]
    pub fn new(webhook_url: Option<String>, origin: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
            origin,
        }
    }

    /// Whether a webhook target is configured at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// The message body posted to the webhook.
    #[must_use]
    pub fn announcement(&self, event: &Event) -> String {
        format!(
            "New event submitted: {} ({} - {}) at {}.\nApprove: {}{}/{}?api_key={}",
            event.title,
            event.start_date,
            event.end_date,
            event.location_text,
            self.origin,
            APPROVE_ROUTE_PREFIX,
            event.id,
            event.api_key
        )
    }

    /// ## Summary
    /// Fires the announcement on a background task. Skipped silently when no
    /// webhook is configured.
    ///
    /// ## Side Effects
    /// Spawns a tokio task that POSTs to the configured webhook; delivery
    /// failures are logged at warn level and never fail the submission.
    pub fn announce(&self, event: &Event) {
        let Some(url) = self.webhook_url.clone() else {
            tracing::debug!(event_id = %event.id, "No webhook configured, skipping announcement");
            return;
        };

        let client = self.client.clone();
        let content = self.announcement(event);
        let event_id = event.id;

        tokio::spawn(async move {
            let payload = serde_json::json!({ "content": content });
            match client.post(&url).json(&payload).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!(event_id = %event_id, "Submission announced");
                }
                Ok(response) => {
                    tracing::warn!(
                        event_id = %event_id,
                        status = %response.status(),
                        "Webhook rejected submission announcement"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        event_id = %event_id,
                        error = %err,
                        "Failed to deliver submission announcement"
                    );
                }
            }
        });
    }
}
