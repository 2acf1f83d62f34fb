//! Stripe payment-intent client.
//!
//! One call per invocation, no retry, no idempotency key. A retried client
//! request can therefore create a duplicate intent; known limitation, left
//! to the frontend.

use reqwest::Client;
use tracing::error;

use crate::core::models::PaymentIntent;
use crate::errors::FunctionError;

pub const DEFAULT_API_URL: &str = "https://api.stripe.com";

const PAYMENT_INTENTS_PATH: &str = "/v1/payment_intents";
const DONATION_DESCRIPTION: &str = "Donation to The Open Church Project";
const PROJECT_TAG: &str = "open-church-project";

/// Stripe API client for creating donation payment intents.
pub struct StripeClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl StripeClient {
    #[must_use]
    pub fn new(api_key: &str, base_url: &str) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a payment intent with automatic payment methods enabled and
    /// the donation metadata tags.
    ///
    /// # Errors
    ///
    /// A non-2xx answer maps to `Upstream` carrying the raw response body;
    /// transport or decode failures map to `Internal`.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
        donor_email: &str,
    ) -> Result<PaymentIntent, FunctionError> {
        let form: Vec<(&str, String)> = vec![
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
            ("description", DONATION_DESCRIPTION.to_string()),
            ("metadata[project]", PROJECT_TAG.to_string()),
            ("metadata[donor_email]", donor_email.to_string()),
        ];

        let response = self
            .http
            .post(format!("{}{}", self.base_url, PAYMENT_INTENTS_PATH))
            .bearer_auth(&self.api_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "Stripe API error");
            return Err(FunctionError::Upstream {
                message: "Failed to create payment intent".to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<PaymentIntent>().await?)
    }
}
