use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FunctionError {
    /// A required secret is absent from the environment. The message is the
    /// public, service-specific one ("Payment service configuration error");
    /// the operational detail is logged at the raise site.
    #[error("{0}")]
    Configuration(String),

    /// Caller input failed validation. Reported as HTTP 400 with the message
    /// verbatim.
    #[error("{0}")]
    Validation(String),

    /// The external API answered with a non-success status. The raw response
    /// body is surfaced to the caller under `details` for diagnostics.
    #[error("{message}: upstream returned status {status}")]
    Upstream {
        message: String,
        status: u16,
        body: String,
    },

    /// Anything else: malformed JSON body, transport failure, unparseable
    /// upstream response.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl FunctionError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            FunctionError::Validation(_) => 400,
            _ => 500,
        }
    }

    /// The `{ error, details? }` JSON body returned to the caller.
    #[must_use]
    pub fn public_body(&self) -> Value {
        match self {
            FunctionError::Configuration(message) | FunctionError::Validation(message) => {
                json!({ "error": message })
            }
            FunctionError::Upstream { message, body, .. } => {
                json!({ "error": message, "details": body })
            }
            FunctionError::Internal(message) => {
                json!({ "error": "Internal server error", "details": message })
            }
        }
    }
}

impl From<reqwest::Error> for FunctionError {
    fn from(error: reqwest::Error) -> Self {
        FunctionError::Internal(error.to_string())
    }
}

impl From<serde_json::Error> for FunctionError {
    fn from(error: serde_json::Error) -> Self {
        FunctionError::Internal(error.to_string())
    }
}
