//! Payment Intent handler.
//!
//! Single-pass pipeline: method check, body parse, config check, amount
//! validation, one Stripe call, response mapping. Any stage failure is
//! terminal and produces exactly one structured response.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::{helpers, parsing};
use crate::clients::StripeClient;
use crate::core::config::AppConfig;
use crate::core::models::{MIN_DONATION_MESSAGE, PaymentRequest};
use crate::errors::FunctionError;

/// Lambda handler for the `process-payment` function.
///
/// # Errors
///
/// Never fails the invocation: every fault is converted to a structured
/// JSON error response at the boundary.
#[tracing::instrument(level = "info", skip(config, event))]
pub async fn function_handler(
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle(config, &event.payload).await)
}

/// Processes one proxy event and returns the proxy-format response.
pub async fn handle(config: &AppConfig, event: &Value) -> Value {
    if parsing::http_method(event) == Some("OPTIONS") {
        return helpers::preflight_response();
    }

    match create_payment_intent(config, event).await {
        Ok(body) => helpers::json_response(200, &body),
        Err(e) => {
            error!("Error in process-payment function: {}", e);
            helpers::error_response(&e)
        }
    }
}

async fn create_payment_intent(
    config: &AppConfig,
    event: &Value,
) -> Result<Value, FunctionError> {
    let body = parsing::request_body(event)?;
    let request: PaymentRequest = serde_json::from_str(&body)?;

    let Some(secret_key) = config.stripe_secret_key.as_deref() else {
        error!("STRIPE_RESTRICTED_KEY not found in environment variables");
        return Err(FunctionError::Configuration(
            "Payment service configuration error".to_string(),
        ));
    };

    // Minimum $1.00; rejected before any outbound call.
    let Some(amount) = request.valid_amount() else {
        return Err(FunctionError::Validation(MIN_DONATION_MESSAGE.to_string()));
    };

    let currency = request.currency_or_default();
    let donor_email = request.donor_email_or_anonymous();

    info!(amount, currency, "Creating Stripe payment intent");

    let stripe = StripeClient::new(secret_key, &config.stripe_api_url);
    let intent = stripe
        .create_payment_intent(amount, currency, donor_email)
        .await?;

    info!(payment_intent_id = %intent.id, "Payment intent created successfully");

    Ok(json!({
        "success": true,
        "client_secret": intent.client_secret,
        "payment_intent_id": intent.id,
        "amount": intent.amount,
    }))
}
