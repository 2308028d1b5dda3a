//! HTTP client configuration.

use crate::RetryConfig;
use std::time::Duration;

/// Token endpoint for OAuth2 grants.
pub const DEFAULT_AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Base URL for authenticated API requests.
pub const DEFAULT_API_URL: &str = "https://oauth.reddit.com";

/// Page size requested from listing endpoints (the platform maximum).
pub const PAGE_SIZE: usize = 100;

/// Settings for [`RedditClient`](crate::RedditClient).
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RedditConfig {
    /// OAuth2 token endpoint
    #[builder(default = "DEFAULT_AUTH_URL.to_string()")]
    auth_url: String,
    /// Base URL for API requests
    #[builder(default = "DEFAULT_API_URL.to_string()")]
    api_url: String,
    /// User agent sent with every request
    #[builder(default = "default_user_agent()")]
    user_agent: String,
    /// Per-request timeout
    #[builder(default = "Duration::from_secs(30)")]
    timeout: Duration,
    /// Retry policy for transient failures
    #[builder(default)]
    retry: RetryConfig,
}

impl RedditConfig {
    /// Returns a builder for constructing a RedditConfig.
    pub fn builder() -> RedditConfigBuilder {
        RedditConfigBuilder::default()
    }
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }
}

fn default_user_agent() -> String {
    format!(
        "pc:chapterbind:v{} (by chapterbind contributors)",
        env!("CARGO_PKG_VERSION")
    )
}
