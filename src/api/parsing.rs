//! Accessors for API Gateway proxy events.
//!
//! Both payload shapes are accepted: v2 (`requestContext.http.method`) and
//! v1 (`httpMethod`).

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

use crate::errors::FunctionError;

pub fn http_method(event: &Value) -> Option<&str> {
    event
        .pointer("/requestContext/http/method")
        .and_then(Value::as_str)
        .or_else(|| event.get("httpMethod").and_then(Value::as_str))
}

/// The request body as text, base64-decoded when the event flags it.
///
/// # Errors
///
/// A missing or undecodable body maps to `Internal`: the caller-facing
/// contract treats it like any other malformed request, a generic 500.
pub fn request_body(event: &Value) -> Result<String, FunctionError> {
    let body = event
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| FunctionError::Internal("request has no body".to_string()))?;

    if event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        let bytes = BASE64
            .decode(body)
            .map_err(|e| FunctionError::Internal(format!("invalid base64 body: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| FunctionError::Internal(format!("body is not valid UTF-8: {e}")))
    } else {
        Ok(body.to_string())
    }
}
