//! Core data types for chapterbind.
//!
//! This crate provides the read-only entities shared by every other crate:
//! authors, communities, submissions, the derived search title and the
//! search query handed to a platform client.

#![warn(missing_docs)]

mod identity;
mod observability;
mod search;
mod submission;
mod thing;

pub use identity::{Author, Community};
pub use observability::init_tracing;
pub use search::{SearchQuery, SearchQueryBuilder, SearchScope, SearchTitle, SortOrder};
pub use submission::{Submission, SubmissionBuilder};
pub use thing::{Fullname, Thing, ThingKind};
