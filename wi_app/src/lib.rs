use aws_config::{BehaviorVersion, meta::region::RegionProviderChain};
use figment::{Figment, providers::Env};
use serde::de::DeserializeOwned;

pub trait ContextProvider<Config> {
    fn new(
        config: Config,
        aws_config: aws_config::SdkConfig,
    ) -> impl Future<Output = Self>;
}

/// Install the global tracing subscriber.
///
/// Output is JSON without ANSI colors, timestamps or targets so that it
/// reads cleanly in `CloudWatch`. The level is taken from `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // avoids duplicating span fields on every line
        .with_current_span(false)
        .with_ansi(false)
        // CloudWatch adds the ingestion time
        .without_time()
        .with_target(false)
        .init();
}

/// Extract the service configuration from raw environment variables.
///
/// `WRITERS_TABLE=foo` populates a `writers_table` field.
///
/// # Errors
/// If a required variable is missing or cannot be parsed into `Config`.
pub fn load_config<Config: DeserializeOwned>() -> Result<Config, figment::Error>
{
    Figment::new().merge(Env::raw()).extract()
}

/// Initialize the application context with configuration from environment
/// variables and the AWS configuration from the default provider chain.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
pub async fn create_app_context<A, Config: DeserializeOwned>()
-> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
{
    init_tracing();

    let config: Config = load_config()?;

    tracing::info!("configuration loaded");

    let region_provider =
        RegionProviderChain::default_provider().or_else("us-east-1");
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    Ok(A::new(config, aws_config).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TestConfig {
        writers_table: String,
    }

    #[test]
    fn test_load_config_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("WRITERS_TABLE", "writers-dev");

            let config: TestConfig = load_config()?;
            assert_eq!(config.writers_table, "writers-dev");

            Ok(())
        });
    }

    #[test]
    fn test_load_config_missing_variable() {
        Jail::expect_with(|_jail| {
            let result = load_config::<TestConfig>();
            assert!(result.is_err());

            Ok(())
        });
    }
}
