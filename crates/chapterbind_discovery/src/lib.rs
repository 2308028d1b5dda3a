//! Chapter discovery for works serialized as a sequence of posts.
//!
//! Starting from one anchor post, discovery searches the author's posts that
//! share the anchor's leading title words, keeps the genuine text chapters,
//! and returns them oldest first.
//!
//! # Example
//!
//! ```no_run
//! use chapterbind_discovery::{Discovery, DiscoveryOptions};
//! use chapterbind_interface::PlatformClient;
//!
//! # async fn example(client: &dyn PlatformClient) -> chapterbind_error::ChapterbindResult<()> {
//! let discovery = Discovery::new(client, DiscoveryOptions::default());
//! let work = discovery.run("https://redd.it/abc123").await?;
//! for chapter in work.chapters().chapters() {
//!     println!("{}", chapter.title());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod anchor;
mod filter;
mod finalize;
mod pipeline;
mod search;

pub use anchor::{Anchor, resolve_anchor};
pub use filter::{
    FilterStats, FilteredChapters, ORIGINAL_FETCH_CONCURRENCY, Rejection, filter_chapters,
};
pub use finalize::{ChapterSet, SelectionWarning, finalize};
pub use pipeline::{
    DEFAULT_MAX_POSTS, DEFAULT_OVERLAP, DiscoveredWork, Discovery, DiscoveryOptions,
    DiscoveryOptionsBuilder,
};
pub use search::search_candidates;
