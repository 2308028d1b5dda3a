//! End-to-end discovery: anchor, search, filter, finalize.

use crate::{
    Anchor, ChapterSet, FilterStats, filter_chapters, finalize, resolve_anchor, search_candidates,
};
use chapterbind_core::SearchTitle;
use chapterbind_error::ChapterbindResult;
use chapterbind_interface::PlatformClient;
use tracing::{info, instrument};

/// Default number of leading title words shared by all chapters.
pub const DEFAULT_OVERLAP: usize = 2;

/// Default chapter count at which a run warns about possible truncation.
pub const DEFAULT_MAX_POSTS: usize = 200;

/// Tunables for a discovery run.
///
/// # Examples
///
/// ```
/// use chapterbind_discovery::DiscoveryOptions;
///
/// let options = DiscoveryOptions::builder()
///     .overlap(3usize)
///     .all_platform(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(*options.overlap(), 3);
/// assert_eq!(*options.max_posts(), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct DiscoveryOptions {
    /// Leading words of the anchor title used as the search title
    #[builder(default = "DEFAULT_OVERLAP")]
    overlap: usize,
    /// Search the whole platform instead of the anchor's community
    #[builder(default)]
    all_platform: bool,
    /// Expected maximum number of chapters
    #[builder(default = "DEFAULT_MAX_POSTS")]
    max_posts: usize,
    /// Optional cap on the number of search results fetched
    #[builder(default)]
    search_limit: Option<usize>,
}

impl DiscoveryOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.overlap == Some(0) {
            return Err("overlap must be at least 1".to_string());
        }
        if self.max_posts == Some(0) {
            return Err("max_posts must be at least 1".to_string());
        }
        Ok(())
    }
}

impl DiscoveryOptions {
    /// Returns a builder for constructing DiscoveryOptions.
    pub fn builder() -> DiscoveryOptionsBuilder {
        DiscoveryOptionsBuilder::default()
    }
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            overlap: DEFAULT_OVERLAP,
            all_platform: false,
            max_posts: DEFAULT_MAX_POSTS,
            search_limit: None,
        }
    }
}

/// Everything a discovery run learned about a work.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct DiscoveredWork {
    /// The post the run started from
    anchor: Anchor,
    /// Title prefix shared by the chapters
    search_title: SearchTitle,
    /// Raw search results before filtering
    candidates: usize,
    /// What the filter did with the candidates
    stats: FilterStats,
    /// Chapters in reading order
    chapters: ChapterSet,
}

impl DiscoveredWork {
    /// Consumes the work, returning the chapter set.
    pub fn into_chapters(self) -> ChapterSet {
        self.chapters
    }
}

/// Runs discovery against one platform client.
pub struct Discovery<'a, C: PlatformClient + ?Sized> {
    client: &'a C,
    options: DiscoveryOptions,
}

impl<'a, C: PlatformClient + ?Sized> Discovery<'a, C> {
    /// Create a discovery run over `client`.
    pub fn new(client: &'a C, options: DiscoveryOptions) -> Self {
        Self { client, options }
    }

    /// Returns the options in use.
    pub fn options(&self) -> &DiscoveryOptions {
        &self.options
    }

    /// Discover the chapters of the work the anchor URL belongs to.
    ///
    /// # Errors
    ///
    /// Returns a platform error if the anchor cannot be resolved or the
    /// search fails, and a selection error if fewer than two chapters
    /// survive filtering.
    #[instrument(skip(self), fields(platform = self.client.platform_name(), overlap = self.options.overlap))]
    pub async fn run(&self, url: &str) -> ChapterbindResult<DiscoveredWork> {
        let anchor = resolve_anchor(self.client, url).await?;
        let search_title = SearchTitle::from_title(anchor.title(), self.options.overlap);
        info!(search_title = %search_title, "Derived search title");

        let candidates = search_candidates(
            self.client,
            anchor.author(),
            anchor.community(),
            &search_title,
            self.options.all_platform,
            self.options.search_limit,
        )
        .await?;
        let candidate_count = candidates.len();

        let filtered = filter_chapters(self.client, candidates, &search_title).await;
        let stats = filtered.stats().clone();
        let chapters = finalize(filtered.into_chapters(), self.options.max_posts)?;

        Ok(DiscoveredWork {
            anchor,
            search_title,
            candidates: candidate_count,
            stats,
            chapters,
        })
    }
}
