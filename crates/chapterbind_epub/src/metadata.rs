//! Book metadata derived from a chapter set.

use chapterbind_core::{Author, SearchTitle, Submission};
use chapterbind_error::{BookError, BookErrorKind};
use chapterbind_interface::BookMetadata;
use tracing::debug;

/// Build metadata for chapters given oldest first.
///
/// The identifier is the id of the oldest chapter. The title is
/// `title_override` when given, otherwise the first `overlap` words of the
/// oldest chapter's title.
///
/// # Errors
///
/// Returns `Empty` when `chapters` is empty.
pub fn book_metadata(
    chapters: &[Submission],
    author: &Author,
    title_override: Option<&str>,
    overlap: usize,
) -> Result<BookMetadata, BookError> {
    let oldest = chapters
        .first()
        .ok_or_else(|| BookError::new(BookErrorKind::Empty))?;

    let title = match title_override {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => SearchTitle::from_title(oldest.title(), overlap)
            .as_str()
            .to_string(),
    };
    debug!(identifier = %oldest.id(), title = %title, "Derived book metadata");

    Ok(BookMetadata::builder()
        .identifier(oldest.id().clone())
        .title(title)
        .author(author.clone())
        .build()
        .expect("BookMetadata with all required fields"))
}
