//! Content-platform client trait.

use async_trait::async_trait;
use chapterbind_core::{Fullname, SearchQuery, Submission, Thing};
use chapterbind_error::PlatformResult;

/// Read-only access to a search-capable content platform.
///
/// Implementations hold an already authenticated session; constructing one
/// is where authentication failures surface. The same client is shared by
/// every stage of a run.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Fetch the post a URL points at.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if the URL does not identify a post and
    /// `NotFound` if the post does not exist.
    async fn submission_by_url(&self, url: &str) -> PlatformResult<Submission>;

    /// Run a search, returning results in the order the platform gave them.
    ///
    /// Results may include objects that are not submissions. The platform
    /// may silently cap the total number of results.
    ///
    /// # Errors
    ///
    /// Returns error if any page of results cannot be fetched.
    async fn search(&self, query: &SearchQuery) -> PlatformResult<Vec<Thing>>;

    /// Fetch a single object by fullname.
    ///
    /// Returns `Ok(None)` when the object no longer exists.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    async fn thing_by_fullname(&self, fullname: &Fullname) -> PlatformResult<Option<Thing>>;

    /// Get platform name.
    fn platform_name(&self) -> &str;
}
