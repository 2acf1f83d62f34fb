use mockito::Matcher;
use openchurch_functions::api::email;
use openchurch_functions::core::config::AppConfig;
use serde_json::{Value, json};

const SMTP_PATH: &str = "/v3/smtp/email";

fn test_config(brevo_url: &str, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        stripe_secret_key: None,
        brevo_api_key: api_key.map(str::to_string),
        stripe_api_url: "http://127.0.0.1:1".to_string(),
        brevo_api_url: brevo_url.to_string(),
    }
}

fn post_event(body: &Value) -> Value {
    json!({ "httpMethod": "POST", "body": body.to_string() })
}

fn status_of(response: &Value) -> u64 {
    response["statusCode"].as_u64().expect("statusCode")
}

fn body_of(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().expect("body string")).expect("body json")
}

#[tokio::test]
async fn options_preflight_returns_ok_with_cors_headers() {
    let config = test_config("http://127.0.0.1:1", None);
    let event = json!({ "httpMethod": "OPTIONS" });

    let response = email::handle(&config, &event).await;

    assert_eq!(status_of(&response), 200);
    assert_eq!(response["body"], "ok");
    assert_eq!(response["headers"]["Access-Control-Allow-Origin"], "*");
}

#[tokio::test]
async fn missing_credential_is_configuration_error_before_any_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", SMTP_PATH).expect(0).create_async().await;
    let config = test_config(&server.url(), None);

    let event = post_event(&json!({
        "formType": "contact",
        "formData": { "name": "Sam" },
        "submissionTime": "now",
    }));
    let response = email::handle(&config, &event).await;

    assert_eq!(status_of(&response), 500);
    assert_eq!(
        body_of(&response)["error"],
        "Email service configuration error"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn church_submission_sends_templated_email_and_returns_message_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", SMTP_PATH)
        .match_header("api-key", "brevo-test-key")
        .match_body(Matcher::PartialJson(json!({
            "sender": {
                "name": "The Open Church Project",
                "email": "titanbusinesspros@gmail.com",
            },
            "to": [{
                "email": "titanbusinesspros@gmail.com",
                "name": "Titan Business Pros",
            }],
            "subject": "🏛️ New Church Registration - The Open Church Project",
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({ "messageId": "<202406.12345@smtp-relay>" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let config = test_config(&server.url(), Some("brevo-test-key"));

    let event = post_event(&json!({
        "formType": "church",
        "formData": { "church_name": "Grace Chapel", "city": "Tulsa" },
        "submissionTime": "2024-06-01 12:00",
    }));
    let response = email::handle(&config, &event).await;

    assert_eq!(status_of(&response), 200);
    let body = body_of(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["messageId"], "<202406.12345@smtp-relay>");
    assert_eq!(body["message"], "Email notification sent successfully");
    mock.assert_async().await;
}

#[tokio::test]
async fn unknown_form_type_uses_generic_subject() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", SMTP_PATH)
        .match_body(Matcher::PartialJson(json!({
            "subject": "📋 New Website Submission - The Open Church Project",
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({ "messageId": "<id>" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let config = test_config(&server.url(), Some("brevo-test-key"));

    let event = post_event(&json!({
        "formType": "prayer-request",
        "formData": { "name": "Sam" },
        "submissionTime": "now",
    }));
    let response = email::handle(&config, &event).await;

    assert_eq!(status_of(&response), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn crisis_contact_body_contains_urgent_callout() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", SMTP_PATH)
        .match_body(Matcher::Regex("URGENT".to_string()))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({ "messageId": "<id>" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let config = test_config(&server.url(), Some("brevo-test-key"));

    let event = post_event(&json!({
        "formType": "contact",
        "formData": { "name": "Sam", "subject": "Need Help/Crisis" },
        "submissionTime": "now",
    }));
    let response = email::handle(&config, &event).await;

    assert_eq!(status_of(&response), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_failure_surfaces_raw_body_after_exactly_one_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", SMTP_PATH)
        .with_status(400)
        .with_body("{\"code\":\"invalid_sender\"}")
        .expect(1)
        .create_async()
        .await;
    let config = test_config(&server.url(), Some("brevo-test-key"));

    let event = post_event(&json!({
        "formType": "newsletter",
        "formData": { "email": "a@b.c" },
        "submissionTime": "now",
    }));
    let response = email::handle(&config, &event).await;

    assert_eq!(status_of(&response), 500);
    let body = body_of(&response);
    assert_eq!(body["error"], "Failed to send email notification");
    assert_eq!(body["details"], "{\"code\":\"invalid_sender\"}");
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_json_body_is_internal_error() {
    let config = test_config("http://127.0.0.1:1", Some("brevo-test-key"));
    let event = json!({ "httpMethod": "POST", "body": "not json at all" });

    let response = email::handle(&config, &event).await;

    assert_eq!(status_of(&response), 500);
    assert_eq!(body_of(&response)["error"], "Internal server error");
}
