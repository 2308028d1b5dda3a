//! JSON models for Reddit API responses.
//!
//! These mirror the wire format and are converted into the platform-neutral
//! types of `chapterbind_core` before leaving this crate.

use serde::Deserialize;

/// Response of the OAuth2 token endpoint.
///
/// Reddit reports some failures, such as a wrong password, with a success
/// status and an `error` field instead of a token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token type, normally "bearer"
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Error code such as "invalid_grant"
    #[serde(default)]
    pub error: Option<String>,
}

/// A paginated listing of things.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingJson {
    /// Listing payload
    pub data: ListingDataJson,
}

/// Payload of a listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingDataJson {
    /// Cursor for the next page, absent on the last page
    #[serde(default)]
    pub after: Option<String>,
    /// Things on this page
    #[serde(default)]
    pub children: Vec<ThingJson>,
}

/// A kind-tagged object inside a listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ThingJson {
    /// Kind prefix such as "t3"
    pub kind: String,
    /// Kind-specific payload
    pub data: serde_json::Value,
}

/// Payload of a `t3` (link/submission) thing.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkJson {
    /// Base-36 id
    pub id: String,
    /// Post title
    pub title: String,
    /// Author name, "[deleted]" when the account is gone
    #[serde(default)]
    pub author: Option<String>,
    /// Community name
    pub subreddit: String,
    /// True for text posts
    #[serde(default)]
    pub is_self: bool,
    /// Fullname of the original post for crossposts
    #[serde(default)]
    pub crosspost_parent: Option<String>,
    /// Rendered body
    #[serde(default)]
    pub selftext_html: Option<String>,
    /// Path relative to the site root
    #[serde(default)]
    pub permalink: String,
    /// Creation time in epoch seconds
    #[serde(default)]
    pub created_utc: f64,
}

/// Response of `/api/v1/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeJson {
    /// Account name
    #[serde(default)]
    pub name: Option<String>,
}
