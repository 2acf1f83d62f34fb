use serde::Deserialize;
use serde_json::{Map, Value};

/// Minimum donation in minor currency units ($1.00 in cents).
pub const MIN_DONATION_AMOUNT: i64 = 100;

pub const MIN_DONATION_MESSAGE: &str = "Minimum donation amount is $1.00";

/// Donation request from the website payment form. Amount is in the smallest
/// currency unit; a missing amount is a validation failure, not a parse
/// failure, so every field is optional at the serde layer.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub donor_email: Option<String>,
}

impl PaymentRequest {
    /// The amount, if present and at least the donation minimum.
    #[must_use]
    pub fn valid_amount(&self) -> Option<i64> {
        self.amount.filter(|a| *a >= MIN_DONATION_AMOUNT)
    }

    /// Currency code, defaulting to "usd" when absent or empty.
    #[must_use]
    pub fn currency_or_default(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("usd")
    }

    /// Donor email for the intent metadata, "anonymous" when not supplied.
    #[must_use]
    pub fn donor_email_or_anonymous(&self) -> &str {
        self.donor_email
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or("anonymous")
    }
}

/// The three Stripe payment-intent fields the frontend consumes. They
/// deserialize as a unit; partial success is not modeled.
#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
}

/// Website form submission to notify the operator about. `form_data` keeps
/// the caller's field order (serde_json `preserve_order`), which fixes the
/// row order of the rendered email. `submission_time` is display-only and
/// echoed verbatim into the footer.
#[derive(Debug, Deserialize)]
pub struct NotificationRequest {
    #[serde(rename = "formType", default)]
    pub form_type: String,
    #[serde(rename = "formData", default)]
    pub form_data: Map<String, Value>,
    #[serde(rename = "submissionTime", default)]
    pub submission_time: String,
}
