//! Document assembly trait.

use chapterbind_core::{Author, Submission};
use chapterbind_error::BookError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Metadata of the packaged document.
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
#[builder(setter(into))]
pub struct BookMetadata {
    /// Unique identifier of the book
    identifier: String,
    /// Book title
    title: String,
    /// Author credited on the cover
    author: Author,
    /// Language tag
    #[builder(default = "String::from(\"en\")")]
    language: String,
}

impl BookMetadata {
    /// Returns a builder for constructing BookMetadata.
    pub fn builder() -> BookMetadataBuilder {
        BookMetadataBuilder::default()
    }
}

/// Packages chapters, in reading order, into an output document.
///
/// Assembly never influences which chapters were selected.
pub trait BookAssembler {
    /// Write the document to `output`, returning the path written.
    ///
    /// # Errors
    ///
    /// Returns error if there are no chapters or the file cannot be written.
    fn assemble(
        &self,
        metadata: &BookMetadata,
        chapters: &[Submission],
        output: &Path,
    ) -> Result<PathBuf, BookError>;
}
