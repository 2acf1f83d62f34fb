//! Response builders shared by both handlers.
//!
//! Every response, success or error, carries the permissive CORS header set
//! the website frontend relies on. Responses are emitted in API Gateway
//! proxy format (`statusCode` / `headers` / `body`).

use serde_json::{Value, json};

use crate::errors::FunctionError;

const CORS_ALLOW_ORIGIN: &str = "*";
const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";

fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": CORS_ALLOW_ORIGIN,
        "Access-Control-Allow-Headers": CORS_ALLOW_HEADERS,
        "Access-Control-Allow-Methods": CORS_ALLOW_METHODS,
    })
}

/// The CORS preflight answer: 200 with the literal body "ok" and no JSON
/// content type.
#[must_use]
pub fn preflight_response() -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": "ok",
    })
}

/// A JSON response with CORS headers and the body serialized to a string.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    let mut headers = cors_headers();
    if let Some(map) = headers.as_object_mut() {
        map.insert(
            "Content-Type".to_string(),
            Value::String("application/json".to_string()),
        );
    }
    json!({
        "statusCode": status_code,
        "headers": headers,
        "body": body.to_string(),
    })
}

/// Maps a handler error to its structured `{ error, details? }` response.
#[must_use]
pub fn error_response(error: &FunctionError) -> Value {
    json_response(error.status_code(), &error.public_body())
}
