#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use std::sync::Arc;
#[cfg(feature = "lambda")]
use tag_viewer::edge::{handle_request, EdgeRequest, EdgeResponse};
#[cfg(feature = "lambda")]
use tag_viewer::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use tag_viewer::{EdgeConfig, HttpTagRecommender};

#[cfg(feature = "lambda")]
async fn function_handler(
    recommender: &HttpTagRecommender,
    event: LambdaEvent<EdgeRequest>,
) -> Result<EdgeResponse, Error> {
    tracing::info!("Handling edge request {}", event.context.request_id);

    let response = handle_request(recommender, &event.payload)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = EdgeConfig::hard_coded();
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    // 同一個 client 給所有呼叫共用
    let recommender = Arc::new(HttpTagRecommender::new(config.upstream_url));

    run(service_fn(move |event: LambdaEvent<EdgeRequest>| {
        let recommender = Arc::clone(&recommender);
        async move { function_handler(&recommender, event).await }
    }))
    .await
}
