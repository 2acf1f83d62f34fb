use std::env;

use crate::clients::{brevo, stripe};

/// Process-wide configuration, resolved once at startup and passed into the
/// handler. Secrets load as `None` when absent so the handler can report the
/// configuration fault as a structured 500 instead of failing to boot.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub stripe_secret_key: Option<String>,
    pub brevo_api_key: Option<String>,
    pub stripe_api_url: String,
    pub brevo_api_url: String,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            stripe_secret_key: env::var("STRIPE_RESTRICTED_KEY").ok(),
            brevo_api_key: env::var("BREVO_API_KEY").ok(),
            stripe_api_url: env::var("STRIPE_API_URL")
                .unwrap_or_else(|_| stripe::DEFAULT_API_URL.to_string()),
            brevo_api_url: env::var("BREVO_API_URL")
                .unwrap_or_else(|_| brevo::DEFAULT_API_URL.to_string()),
        }
    }
}
