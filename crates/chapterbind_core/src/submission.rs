//! Submission (chapter candidate) type.

use crate::{Author, Community, Fullname, ThingKind};
use serde::{Deserialize, Serialize};

/// A post as returned by the content platform.
///
/// Submissions are read-only snapshots fetched fresh for every run.
///
/// # Examples
///
/// ```
/// use chapterbind_core::{Author, Community, Submission};
///
/// let post = Submission::builder()
///     .id("abc123")
///     .title("The Long Road, Part 1")
///     .author(Author::new("writer"))
///     .community(Community::new("WritingPrompts"))
///     .is_self(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(post.fullname().to_string(), "t3_abc123");
/// assert_eq!(post.shortlink(), "https://redd.it/abc123");
/// assert!(!post.is_repost());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Submission {
    /// Base-36 id without the kind prefix
    id: String,
    /// Post title
    title: String,
    /// Author of the post
    author: Author,
    /// Community the post was submitted to
    community: Community,
    /// True for self-contained text posts, false for link/media posts
    is_self: bool,
    /// Fullname of the original post when this is a crosspost
    #[builder(default, setter(strip_option))]
    crosspost_parent: Option<Fullname>,
    /// Pre-rendered HTML of the text body
    #[builder(default, setter(strip_option))]
    selftext_html: Option<String>,
    /// Path of the post relative to the platform root
    #[builder(default)]
    permalink: String,
    /// Creation time in seconds since the Unix epoch
    #[builder(default)]
    created_utc: i64,
}

impl Submission {
    /// Returns a builder for constructing a Submission.
    pub fn builder() -> SubmissionBuilder {
        SubmissionBuilder::default()
    }

    /// Returns the kind-prefixed identifier of this post.
    pub fn fullname(&self) -> Fullname {
        Fullname::new(ThingKind::Link, self.id.clone())
    }

    /// Returns the shareable short link of this post.
    pub fn shortlink(&self) -> String {
        format!("https://redd.it/{}", self.id)
    }

    /// Whether the post points at an original post elsewhere.
    pub fn is_repost(&self) -> bool {
        self.crosspost_parent.is_some()
    }
}
