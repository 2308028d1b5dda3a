//! Search title and query types.

use crate::{Author, Community};
use serde::{Deserialize, Serialize};

/// The first `overlap` words of the anchor title.
///
/// Display keeps the anchor's casing; matching is case-insensitive and
/// compares the raw string prefix, without checking for a word boundary
/// after the last word ("Chapter 1" also matches "Chapter 10").
///
/// # Examples
///
/// ```
/// use chapterbind_core::SearchTitle;
///
/// let title = SearchTitle::from_title("The Long Road: Part 3", 2);
/// assert_eq!(title.as_str(), "The Long");
/// assert!(title.matches("the long road: part 1"));
/// assert!(title.matches("THE LONGEST DAY"));
/// assert!(!title.matches("A Long Road"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchTitle {
    text: String,
    folded: String,
    overlap: usize,
}

impl SearchTitle {
    /// Derives the search title from an anchor title.
    ///
    /// Words are split on single spaces, so titles shorter than `overlap`
    /// words yield the whole title.
    pub fn from_title(title: &str, overlap: usize) -> Self {
        let text = title.split(' ').take(overlap).collect::<Vec<_>>().join(" ");
        let folded = text.to_lowercase();
        Self {
            text,
            folded,
            overlap,
        }
    }

    /// Returns the search title as displayed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of leading words the title was built from.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Whether a candidate title starts with this search title, ignoring case.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.to_lowercase().starts_with(&self.folded)
    }
}

impl std::fmt::Display for SearchTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Where a search looks for candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchScope {
    /// Only the given community
    Community(Community),
    /// The entire platform, for works that span communities
    AllPlatform,
}

/// Result ordering requested from the platform.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Newest first
    #[default]
    New,
    /// Platform relevance ranking
    Relevance,
    /// Highest score first
    Top,
}

/// A candidate search for posts by one author sharing a title prefix.
///
/// # Examples
///
/// ```
/// use chapterbind_core::{Author, SearchQuery, SearchScope, SearchTitle};
///
/// let query = SearchQuery::builder()
///     .author(Author::new("writer"))
///     .title(SearchTitle::from_title("The Long Road, Part 4", 2))
///     .scope(SearchScope::AllPlatform)
///     .build()
///     .unwrap();
///
/// assert_eq!(query.query_string(), r#"author:"writer" title:"The Long""#);
/// assert!(query.limit().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct SearchQuery {
    /// Exact author filter
    author: Author,
    /// Exact title-phrase filter
    title: SearchTitle,
    /// Community or whole platform
    scope: SearchScope,
    /// Requested ordering
    #[builder(default)]
    sort: SortOrder,
    /// Optional cap on the number of results fetched
    #[builder(default)]
    limit: Option<usize>,
}

impl SearchQuery {
    /// Returns a builder for constructing a SearchQuery.
    pub fn builder() -> SearchQueryBuilder {
        SearchQueryBuilder::default()
    }

    /// Renders the platform search expression.
    pub fn query_string(&self) -> String {
        format!(r#"author:"{}" title:"{}""#, self.author, self.title)
    }
}
