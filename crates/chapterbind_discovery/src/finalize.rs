//! Turns filtered chapters into reading order.

use chapterbind_core::Submission;
use chapterbind_error::{SelectionError, SelectionErrorKind};
use tracing::{info, warn};

/// Non-fatal conditions noticed while finalizing a chapter set.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SelectionWarning {
    /// The number of chapters reached the expected maximum, so the search
    /// may have missed older chapters.
    #[display(
        "Found {found} chapters, at or above the expected maximum of {max_posts}; \
         older chapters may be missing"
    )]
    PossibleTruncation {
        /// Chapters found
        found: usize,
        /// Expected maximum
        max_posts: usize,
    },
}

/// Chapters in reading order (oldest first) with any warnings raised.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct ChapterSet {
    chapters: Vec<Submission>,
    warnings: Vec<SelectionWarning>,
}

impl ChapterSet {
    /// Returns the number of chapters.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Returns true when the set holds no chapters.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Returns the oldest chapter.
    pub fn first(&self) -> Option<&Submission> {
        self.chapters.first()
    }

    /// Consumes the set, returning the chapters oldest first.
    pub fn into_chapters(self) -> Vec<Submission> {
        self.chapters
    }
}

/// Validate the chapter count and reverse newest-first chapters into
/// reading order.
///
/// # Errors
///
/// Returns `NoChaptersFound` when `chapters` is empty and
/// `NoSiblingChapters` when it holds a single post.
pub fn finalize(
    mut chapters: Vec<Submission>,
    max_posts: usize,
) -> Result<ChapterSet, SelectionError> {
    match chapters.len() {
        0 => return Err(SelectionError::new(SelectionErrorKind::NoChaptersFound)),
        1 => return Err(SelectionError::new(SelectionErrorKind::NoSiblingChapters)),
        _ => {}
    }

    let mut warnings = Vec::new();
    if chapters.len() >= max_posts {
        let warning = SelectionWarning::PossibleTruncation {
            found: chapters.len(),
            max_posts,
        };
        warn!(found = chapters.len(), max_posts, "{}", warning);
        warnings.push(warning);
    }

    chapters.reverse();
    info!(chapters = chapters.len(), "Chapters in reading order");
    Ok(ChapterSet { chapters, warnings })
}
