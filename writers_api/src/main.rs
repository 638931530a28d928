/**
 * This is the main entrypoint for the `writers_api` lambda function.
 *
 * It serves the read-only writers collection from ``DynamoDB`` through
 * the API Gateway.
 */
use serde::Deserialize;
use writers_api::{dynamodb::DynamoDbWriterRepository, handlers};

#[derive(Debug, Deserialize, Clone)]
struct Config {
    writers_table: String,
}

#[derive(Debug, Clone)]
struct AppContext {
    repository: DynamoDbWriterRepository,
}

impl wi_app::ContextProvider<Config> for AppContext {
    async fn new(config: Config, aws_config: aws_config::SdkConfig) -> Self {
        Self {
            repository: DynamoDbWriterRepository::new(
                aws_sdk_dynamodb::Client::new(&aws_config),
                config.writers_table,
            ),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_context =
        wi_app::create_app_context::<AppContext, Config>().await?;

    let app = handlers::writers_router(app_context.repository);

    wi_axum::run_app(app).await
}
