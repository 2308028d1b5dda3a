//! Chapter selection outcomes that end a run.

/// Kinds of selection failure.
///
/// These are expected outcomes rather than bugs: the caller should branch on
/// them and can usually recover by trying a different anchor URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SelectionErrorKind {
    /// Nothing survived the chapter filter
    #[display("No text chapters found")]
    NoChaptersFound,
    /// Only the anchor itself survived the chapter filter
    #[display("No other chapters found sharing the title prefix")]
    NoSiblingChapters,
}

/// Selection error with location tracking.
///
/// # Examples
///
/// ```
/// use chapterbind_error::{SelectionError, SelectionErrorKind};
///
/// let err = SelectionError::new(SelectionErrorKind::NoSiblingChapters);
/// assert!(format!("{}", err).contains("No other chapters"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Selection Error: {} at line {} in {}", kind, line, file)]
pub struct SelectionError {
    /// The kind of error that occurred
    pub kind: SelectionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SelectionError {
    /// Create a new selection error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SelectionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SelectionErrorKind {
        &self.kind
    }
}
