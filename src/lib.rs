/// Serverless functions backing The Open Church Project website.
///
/// This crate implements two independent Lambda functions:
/// 1. `process-payment` — validates a donation request and creates a Stripe
///    payment intent, returning the client secret to the browser.
/// 2. `send-notification-email` — renders a category-keyed HTML notification
///    from a website form submission and sends it through the Brevo
///    transactional-email API.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution (one binary per function)
/// - reqwest for the single outbound API call each function makes
/// - Tokio for async runtime
///
/// The functions share no state; each invocation is a single-pass pipeline of
/// method check, body parse, config check, input validation, one upstream
/// call, and response mapping. Any stage failure is terminal and yields
/// exactly one HTTP response.
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod email;
pub mod errors;

pub use errors::FunctionError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of
/// each binary's `main`.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
