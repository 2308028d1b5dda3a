//! Reddit integration for chapterbind.
//!
//! Provides [`RedditClient`], an implementation of
//! [`PlatformClient`](chapterbind_interface::PlatformClient) backed by the
//! Reddit OAuth API, together with credential loading from dotenv files.
//!
//! The client authenticates once when it is created:
//!
//! ```no_run
//! use chapterbind_reddit::{Credentials, RedditClient, RedditConfig};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::from_dir(Path::new("."))?;
//! let client = RedditClient::connect(&credentials, RedditConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod conversions;
mod credentials;
mod json_models;
mod retry;

pub use client::RedditClient;
pub use config::{DEFAULT_API_URL, DEFAULT_AUTH_URL, PAGE_SIZE, RedditConfig, RedditConfigBuilder};
pub use conversions::{parse_submission_id, submission_from_json, thing_from_json};
pub use credentials::{Credentials, ENV_FILE, ENV_TEMPLATE_FILE, UserLogin};
pub use json_models::{
    LinkJson, ListingDataJson, ListingJson, MeJson, ThingJson, TokenResponse,
};
pub use retry::{RetryConfig, retry_with_backoff};
