//! Notification Email handler.
//!
//! Mirrors the payment pipeline: method check, body parse, config check,
//! template render, one Brevo call, response mapping.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::{helpers, parsing};
use crate::clients::BrevoClient;
use crate::core::config::AppConfig;
use crate::core::models::NotificationRequest;
use crate::email::{FormCategory, templates};
use crate::errors::FunctionError;

/// Lambda handler for the `send-notification-email` function.
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

    match send_notification(config, event).await {
        Ok(body) => helpers::json_response(200, &body),
        Err(e) => {
            error!("Error in send-notification-email function: {}", e);
            helpers::error_response(&e)
        }
    }
}

async fn send_notification(config: &AppConfig, event: &Value) -> Result<Value, FunctionError> {
    let body = parsing::request_body(event)?;
    let request: NotificationRequest = serde_json::from_str(&body)?;

    let Some(api_key) = config.brevo_api_key.as_deref() else {
        error!("BREVO_API_KEY not found in environment variables");
        return Err(FunctionError::Configuration(
            "Email service configuration error".to_string(),
        ));
    };

    let category = FormCategory::from(request.form_type.as_str());
    let subject = category.subject();
    let html_content = templates::render(category, &request.form_data, &request.submission_time);

    info!(form_type = %request.form_type, subject, "Sending email notification");

    let brevo = BrevoClient::new(api_key, &config.brevo_api_url);
    let message_id = brevo.send_email(subject, &html_content).await?;

    info!(?message_id, "Email sent successfully");

    Ok(json!({
        "success": true,
        "messageId": message_id,
        "message": "Email notification sent successfully",
    }))
}
