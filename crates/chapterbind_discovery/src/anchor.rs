//! Anchor resolution: from a URL to author, community and title.

use chapterbind_core::{Author, Community, Submission};
use chapterbind_error::PlatformResult;
use chapterbind_interface::PlatformClient;
use tracing::{info, instrument};

/// The post the caller pointed at.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    submission: Submission,
}

impl Anchor {
    /// Wraps an already fetched post.
    pub fn new(submission: Submission) -> Self {
        Self { submission }
    }

    /// Author of the anchor post.
    pub fn author(&self) -> &Author {
        self.submission.author()
    }

    /// Community the anchor post belongs to.
    pub fn community(&self) -> &Community {
        self.submission.community()
    }

    /// Literal title of the anchor post.
    pub fn title(&self) -> &str {
        self.submission.title()
    }

    /// The full anchor post.
    pub fn submission(&self) -> &Submission {
        &self.submission
    }
}

/// Fetch the post a URL refers to.
///
/// # Errors
///
/// Returns the client's `InvalidUrl` or `NotFound` error when the URL does
/// not resolve to a post.
#[instrument(skip(client))]
pub async fn resolve_anchor<C>(client: &C, url: &str) -> PlatformResult<Anchor>
where
    C: PlatformClient + ?Sized,
{
    let submission = client.submission_by_url(url).await?;
    let anchor = Anchor::new(submission);
    info!(
        author = %anchor.author(),
        community = %anchor.community(),
        title = anchor.title(),
        "Resolved anchor"
    );
    Ok(anchor)
}
