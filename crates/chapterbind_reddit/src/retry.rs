//! Retry logic for platform requests.

use chapterbind_error::{PlatformResult, RetryableError};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Retry configuration for platform requests.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first.
    pub max_attempts: usize,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(10),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }
}

/// Retries an operation with exponential backoff.
///
/// Errors that are not retryable are returned immediately.
#[instrument(skip(operation))]
pub async fn retry_with_backoff<F, Fut, T>(config: &RetryConfig, mut operation: F) -> PlatformResult<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = PlatformResult<T>>,
{
    let mut attempt = 0;
    let mut backoff = config.initial_backoff;

    loop {
        attempt += 1;
        debug!(attempt, "Executing request");

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Request succeeded after retry");
                }
                return Ok(result);
            }
            Err(err) => {
                if attempt >= config.max_attempts {
                    warn!(attempt, error = %err, "All retry attempts exhausted");
                    return Err(err);
                }

                if !err.is_retryable() {
                    debug!(error = %err, "Error is not retryable, failing immediately");
                    return Err(err);
                }

                // Rate limiting waits at least twice the normal step
                let wait = if err.should_backoff() {
                    std::cmp::min(backoff * 2, config.max_backoff)
                } else {
                    backoff
                };
                debug!(backoff_ms = wait.as_millis() as u64, "Retrying after failure");

                sleep(wait).await;

                backoff = std::cmp::min(
                    Duration::from_secs_f64(backoff.as_secs_f64() * config.backoff_multiplier),
                    config.max_backoff,
                );
            }
        }
    }
}
