//! Platform object kinds and fullnames.

use crate::Submission;
use chapterbind_error::{PlatformError, PlatformErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind prefix of a platform object.
///
/// Reddit prefixes every object id with its kind (`t3_abc123` is a link
/// submission). Only [`ThingKind::Link`] objects can be chapters.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
)]
pub enum ThingKind {
    /// A comment
    #[strum(serialize = "t1")]
    Comment,
    /// A user account
    #[strum(serialize = "t2")]
    Account,
    /// A submission (text post or link post)
    #[strum(serialize = "t3")]
    Link,
    /// A private message
    #[strum(serialize = "t4")]
    Message,
    /// A community
    #[strum(serialize = "t5")]
    Subreddit,
    /// An award
    #[strum(serialize = "t6")]
    Award,
}

/// Kind-prefixed object identifier, e.g. `t3_abc123`.
///
/// # Examples
///
/// ```
/// use chapterbind_core::{Fullname, ThingKind};
///
/// let name: Fullname = "t3_abc123".parse().unwrap();
/// assert_eq!(name.kind(), ThingKind::Link);
/// assert_eq!(name.id(), "abc123");
/// assert_eq!(name.to_string(), "t3_abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fullname {
    kind: ThingKind,
    id: String,
}

impl Fullname {
    /// Creates a fullname from a kind and a bare id.
    pub fn new(kind: ThingKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Returns the object kind.
    pub fn kind(&self) -> ThingKind {
        self.kind
    }

    /// Returns the bare id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for Fullname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.kind, self.id)
    }
}

impl FromStr for Fullname {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, id) = s.split_once('_').ok_or_else(|| {
            PlatformError::new(PlatformErrorKind::ResponseParsing(format!(
                "Fullname without kind prefix: {}",
                s
            )))
        })?;
        let kind = ThingKind::from_str(prefix).map_err(|_| {
            PlatformError::new(PlatformErrorKind::ResponseParsing(format!(
                "Unknown kind prefix in fullname: {}",
                s
            )))
        })?;
        if id.is_empty() {
            return Err(PlatformError::new(PlatformErrorKind::ResponseParsing(
                format!("Fullname without id: {}", s),
            )));
        }
        Ok(Self::new(kind, id))
    }
}

/// An object returned by a platform listing.
///
/// Searches across the whole platform may return things other than
/// submissions; those are carried as [`Thing::Other`] so the chapter filter
/// can reject them explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Thing {
    /// A submission
    Submission(Box<Submission>),
    /// Any other kind of object
    Other(Fullname),
}

impl Thing {
    /// Returns the kind of this object.
    pub fn kind(&self) -> ThingKind {
        match self {
            Thing::Submission(_) => ThingKind::Link,
            Thing::Other(name) => name.kind(),
        }
    }

    /// Returns the submission if this object is one.
    pub fn as_submission(&self) -> Option<&Submission> {
        match self {
            Thing::Submission(submission) => Some(submission),
            Thing::Other(_) => None,
        }
    }

    /// Consumes the object, returning the submission if it is one.
    pub fn into_submission(self) -> Option<Submission> {
        match self {
            Thing::Submission(submission) => Some(*submission),
            Thing::Other(_) => None,
        }
    }
}

impl From<Submission> for Thing {
    fn from(submission: Submission) -> Self {
        Thing::Submission(Box::new(submission))
    }
}
