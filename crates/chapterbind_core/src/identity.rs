//! Author and community identities.

use serde::{Deserialize, Serialize};

/// Name of the account that wrote a post.
///
/// # Examples
///
/// ```
/// use chapterbind_core::Author;
///
/// let author = Author::new("jklideas");
/// assert_eq!(author.name(), "jklideas");
/// assert_eq!(author.to_string(), "jklideas");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Author(String);

impl Author {
    /// Creates an author from an account name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the account name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Community (subreddit) a post was submitted to.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Community(String);

impl Community {
    /// Creates a community from its name, without any `r/` prefix.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the community name.
    pub fn name(&self) -> &str {
        &self.0
    }
}
