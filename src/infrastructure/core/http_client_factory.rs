use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::time::Duration;

/// Feeds reject requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; newsweight/0.3)";

const MAX_RETRIES: u32 = 3;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// HTTP client for news feeds, retrying transient failures with exponential backoff.
    pub fn create_client() -> ClientWithMiddleware {
        Self::create_client_with_retries(MAX_RETRIES)
    }

    pub fn create_client_with_retries(max_retries: u32) -> ClientWithMiddleware {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }
}
