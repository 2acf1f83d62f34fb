//! Brevo transactional-email client.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::errors::FunctionError;

pub const DEFAULT_API_URL: &str = "https://api.brevo.com";

const SMTP_EMAIL_PATH: &str = "/v3/smtp/email";

// Fixed sender identity and operator inbox.
const SENDER_NAME: &str = "The Open Church Project";
const SENDER_EMAIL: &str = "titanbusinesspros@gmail.com";
const RECIPIENT_NAME: &str = "Titan Business Pros";
const RECIPIENT_EMAIL: &str = "titanbusinesspros@gmail.com";

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    #[serde(rename = "messageId")]
    message_id: Option<String>,
}

/// Brevo API client for sending the operator notification email.
pub struct BrevoClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl BrevoClient {
    #[must_use]
    pub fn new(api_key: &str, base_url: &str) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Sends one transactional email from the fixed sender to the operator
    /// inbox and returns the provider's message id.
    ///
    /// # Errors
    ///
    /// A non-2xx answer maps to `Upstream` carrying the raw response body;
    /// transport or decode failures map to `Internal`.
    pub async fn send_email(
        &self,
        subject: &str,
        html_content: &str,
    ) -> Result<Option<String>, FunctionError> {
        let payload = json!({
            "sender": { "name": SENDER_NAME, "email": SENDER_EMAIL },
            "to": [{ "email": RECIPIENT_EMAIL, "name": RECIPIENT_NAME }],
            "subject": subject,
            "htmlContent": html_content,
        });

        let response = self
            .http
            .post(format!("{}{}", self.base_url, SMTP_EMAIL_PATH))
            .header("accept", "application/json")
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "Brevo API error");
            return Err(FunctionError::Upstream {
                message: "Failed to send email notification".to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body: SendEmailResponse = response.json().await?;
        Ok(body.message_id)
    }
}
