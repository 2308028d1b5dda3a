//! Document assembly error types.

/// Kinds of book assembly errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BookErrorKind {
    /// I/O error while writing the output file
    #[display("I/O error: {}", _0)]
    Io(String),
    /// The archive writer rejected an entry
    #[display("Archive error: {}", _0)]
    Archive(String),
    /// A book needs at least one chapter
    #[display("Book has no chapters")]
    Empty,
}

/// Book assembly error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Book Error: {} at line {} in {}", kind, line, file)]
pub struct BookError {
    /// The kind of error that occurred
    pub kind: BookErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BookError {
    /// Create a new book error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BookErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<std::io::Error> for BookError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        BookError::new(BookErrorKind::Io(err.to_string()))
    }
}
