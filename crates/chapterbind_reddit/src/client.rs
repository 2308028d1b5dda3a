//! Authenticated Reddit API client.

use crate::{
    Credentials, ListingJson, MeJson, PAGE_SIZE, RedditConfig, TokenResponse, parse_submission_id,
    retry_with_backoff, thing_from_json,
};
use async_trait::async_trait;
use chapterbind_core::{Fullname, SearchQuery, SearchScope, Submission, Thing, ThingKind};
use chapterbind_error::{PlatformError, PlatformErrorKind, PlatformResult};
use chapterbind_interface::PlatformClient;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument};

/// Reddit client holding a session established at construction.
///
/// The bearer token is fetched once in [`RedditClient::connect`] and never
/// refreshed; a run is expected to finish well within its lifetime.
#[derive(Debug, Clone)]
pub struct RedditClient {
    client: Client,
    config: RedditConfig,
    token: String,
    username: Option<String>,
}

impl RedditClient {
    /// Authenticate and create a client.
    ///
    /// Uses the password grant when the credentials carry a user login and
    /// confirms the session by fetching the account, otherwise the
    /// application-only client credentials grant.
    ///
    /// # Errors
    ///
    /// Returns `Authentication` if the credentials are rejected and `Http`
    /// if the platform cannot be reached.
    #[instrument(skip(credentials, config), fields(client_id = credentials.client_id()))]
    pub async fn connect(credentials: &Credentials, config: RedditConfig) -> PlatformResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent().as_str())
            .timeout(*config.timeout())
            .build()
            .map_err(|e| {
                PlatformError::new(PlatformErrorKind::Http(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        let token = retry_with_backoff(config.retry(), || {
            request_token(&client, config.auth_url(), credentials)
        })
        .await?;

        let mut reddit = Self {
            client,
            config,
            token,
            username: None,
        };

        if let Some(login) = credentials.login() {
            info!(username = login.username(), "Authenticating with stored username and password");
            let me = reddit.me().await?;
            reddit.username = me.name;
        }

        info!("Authenticated successfully");
        Ok(reddit)
    }

    /// Returns the account name when logged in as a user.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    async fn me(&self) -> PlatformResult<MeJson> {
        let url = format!("{}/api/v1/me", self.config.api_url());
        let url = url.as_str();
        retry_with_backoff(self.config.retry(), || async move {
            let response = self
                .client
                .get(url)
                .bearer_auth(&self.token)
                .query(&[("raw_json", "1")])
                .send()
                .await
                .map_err(http_error)?;
            let response = check_status(response, url).await?;
            response.json::<MeJson>().await.map_err(parse_error)
        })
        .await
    }

    /// GET a listing endpoint with retry.
    async fn listing(&self, path: &str, params: &[(&str, String)]) -> PlatformResult<ListingJson> {
        let url = format!("{}{}", self.config.api_url(), path);
        let url = url.as_str();
        retry_with_backoff(self.config.retry(), || async move {
            debug!(url, params = params.len(), "Fetching listing");
            let response = self
                .client
                .get(url)
                .bearer_auth(&self.token)
                .query(params)
                .query(&[("raw_json", "1")])
                .send()
                .await
                .map_err(http_error)?;
            let response = check_status(response, url).await?;
            response.json::<ListingJson>().await.map_err(parse_error)
        })
        .await
    }

    fn search_path(scope: &SearchScope) -> String {
        match scope {
            SearchScope::Community(community) => format!("/r/{}/search", community.name()),
            SearchScope::AllPlatform => "/r/all/search".to_string(),
        }
    }
}

#[async_trait]
impl PlatformClient for RedditClient {
    #[instrument(skip(self))]
    async fn submission_by_url(&self, url: &str) -> PlatformResult<Submission> {
        let id = parse_submission_id(url)?;
        let fullname = Fullname::new(ThingKind::Link, id);

        match self.thing_by_fullname(&fullname).await? {
            Some(Thing::Submission(submission)) => {
                debug!(title = %submission.title(), "Resolved post URL");
                Ok(*submission)
            }
            _ => Err(PlatformError::new(PlatformErrorKind::NotFound(
                url.to_string(),
            ))),
        }
    }

    #[instrument(skip(self, query), fields(query = %query.query_string(), scope = ?query.scope()))]
    async fn search(&self, query: &SearchQuery) -> PlatformResult<Vec<Thing>> {
        let path = Self::search_path(query.scope());
        let mut things = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let remaining = query.limit().map(|limit| limit.saturating_sub(things.len()));
            if remaining == Some(0) {
                break;
            }
            let page_size = remaining.map_or(PAGE_SIZE, |r| r.min(PAGE_SIZE));

            let mut params = vec![
                ("q", query.query_string()),
                ("sort", query.sort().to_string()),
                ("limit", page_size.to_string()),
            ];
            if matches!(query.scope(), SearchScope::Community(_)) {
                params.push(("restrict_sr", "on".to_string()));
            }
            if let Some(cursor) = &after {
                params.push(("after", cursor.clone()));
            }

            let listing = self.listing(&path, &params).await?;
            let page_len = listing.data.children.len();
            for child in listing.data.children {
                things.push(thing_from_json(child)?);
            }
            debug!(page_len, total = things.len(), "Fetched search page");

            match listing.data.after {
                Some(cursor) if page_len > 0 => after = Some(cursor),
                _ => break,
            }
        }

        if let Some(limit) = query.limit() {
            things.truncate(*limit);
        }
        info!(results = things.len(), "Search complete");
        Ok(things)
    }

    #[instrument(skip(self, fullname), fields(fullname = %fullname))]
    async fn thing_by_fullname(&self, fullname: &Fullname) -> PlatformResult<Option<Thing>> {
        let listing = self
            .listing("/api/info", &[("id", fullname.to_string())])
            .await?;
        listing
            .data
            .children
            .into_iter()
            .next()
            .map(thing_from_json)
            .transpose()
    }

    fn platform_name(&self) -> &str {
        "reddit"
    }
}

async fn request_token(
    client: &Client,
    auth_url: &str,
    credentials: &Credentials,
) -> PlatformResult<String> {
    let mut form = vec![("grant_type", "client_credentials".to_string())];
    if let Some(login) = credentials.login() {
        form = vec![
            ("grant_type", "password".to_string()),
            ("username", login.username().to_string()),
            ("password", login.password().to_string()),
        ];
    }

    let response = client
        .post(auth_url)
        .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
        .form(&form)
        .send()
        .await
        .map_err(http_error)?;

    if response.status() == StatusCode::UNAUTHORIZED {
        error!("Token request rejected");
        return Err(PlatformError::new(PlatformErrorKind::Authentication(
            "client id or secret rejected".to_string(),
        )));
    }
    let response = check_status(response, auth_url).await?;
    let token: TokenResponse = response.json().await.map_err(parse_error)?;

    match (token.access_token, token.error) {
        (Some(access_token), None) => {
            debug!(expires_in = ?token.expires_in, token_type = ?token.token_type, "Received token");
            Ok(access_token)
        }
        (_, Some(code)) => {
            error!(code = %code, "Authentication failed");
            Err(PlatformError::new(PlatformErrorKind::Authentication(code)))
        }
        (None, None) => Err(PlatformError::new(PlatformErrorKind::Authentication(
            "no access token in response".to_string(),
        ))),
    }
}

async fn check_status(response: reqwest::Response, url: &str) -> PlatformResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    error!(status = %status, url, "API error");

    let kind = match status {
        StatusCode::UNAUTHORIZED => PlatformErrorKind::Authentication(message),
        StatusCode::NOT_FOUND => PlatformErrorKind::NotFound(url.to_string()),
        StatusCode::TOO_MANY_REQUESTS => PlatformErrorKind::RateLimited,
        _ => PlatformErrorKind::Api {
            status: status.as_u16(),
            message,
        },
    };
    Err(PlatformError::new(kind))
}

#[track_caller]
fn http_error(err: reqwest::Error) -> PlatformError {
    PlatformError::new(PlatformErrorKind::Http(err.to_string()))
}

#[track_caller]
fn parse_error(err: reqwest::Error) -> PlatformError {
    PlatformError::new(PlatformErrorKind::ResponseParsing(err.to_string()))
}
