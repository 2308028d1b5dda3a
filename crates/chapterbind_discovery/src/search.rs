//! Candidate search for sibling chapters.

use chapterbind_core::{Author, Community, SearchQuery, SearchScope, SearchTitle, Thing};
use chapterbind_error::PlatformResult;
use chapterbind_interface::PlatformClient;
use tracing::{debug, info, instrument};

/// Search for posts by `author` whose titles contain `title`, newest first.
///
/// With `all_platform` the search spans every community, for works that
/// were posted in more than one place. `limit` caps the number of results
/// fetched; `None` takes everything the platform returns, which the
/// platform itself may cap.
///
/// # Errors
///
/// Returns error if the search request fails.
#[instrument(skip(client, author, community, title), fields(author = %author, title = %title))]
pub async fn search_candidates<C>(
    client: &C,
    author: &Author,
    community: &Community,
    title: &SearchTitle,
    all_platform: bool,
    limit: Option<usize>,
) -> PlatformResult<Vec<Thing>>
where
    C: PlatformClient + ?Sized,
{
    let scope = if all_platform {
        SearchScope::AllPlatform
    } else {
        SearchScope::Community(community.clone())
    };

    let query = SearchQuery::builder()
        .author(author.clone())
        .title(title.clone())
        .scope(scope)
        .limit(limit)
        .build()
        .expect("SearchQuery with all required fields");
    debug!(query = %query.query_string(), "Built search query");

    let candidates = client.search(&query).await?;
    info!(
        candidates = candidates.len(),
        platform = client.platform_name(),
        "Candidate search complete"
    );
    Ok(candidates)
}
