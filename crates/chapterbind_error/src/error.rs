//! Crate-level error aggregation.

use crate::{BookError, ConfigError, PlatformError, SelectionError};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum ChapterbindErrorKind {
    /// Startup configuration error
    Config(ConfigError),
    /// Content-platform error
    Platform(PlatformError),
    /// Chapter selection outcome
    Selection(SelectionError),
    /// Document assembly error
    Book(BookError),
}

impl std::fmt::Display for ChapterbindErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChapterbindErrorKind::Config(e) => write!(f, "{}", e),
            ChapterbindErrorKind::Platform(e) => write!(f, "{}", e),
            ChapterbindErrorKind::Selection(e) => write!(f, "{}", e),
            ChapterbindErrorKind::Book(e) => write!(f, "{}", e),
        }
    }
}

/// Chapterbind error with kind discrimination.
#[derive(Debug)]
pub struct ChapterbindError(Box<ChapterbindErrorKind>);

impl ChapterbindError {
    /// Create a new error from a kind.
    pub fn new(kind: ChapterbindErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ChapterbindErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ChapterbindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chapterbind Error: {}", self.0)
    }
}

impl std::error::Error for ChapterbindError {}

// Generic From implementation for any type that converts to ChapterbindErrorKind
impl<T> From<T> for ChapterbindError
where
    T: Into<ChapterbindErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for chapterbind operations.
pub type ChapterbindResult<T> = std::result::Result<T, ChapterbindError>;
