use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use openchurch_functions::api::payment;
use openchurch_functions::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    openchurch_functions::setup_logging();

    // Resolved once at process start; the handler reports a missing secret
    // per request as a structured 500.
    let config = AppConfig::from_env();
    let config_ref = &config;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        payment::function_handler(config_ref, event).await
    }))
    .await
}
