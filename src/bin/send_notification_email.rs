use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use openchurch_functions::api::email;
use openchurch_functions::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    openchurch_functions::setup_logging();

    let config = AppConfig::from_env();
    let config_ref = &config;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        email::function_handler(config_ref, event).await
    }))
    .await
}
