//! Content-platform error types and retry classification.

/// Content-platform error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlatformErrorKind {
    /// Transport-level failure (connection refused, timeout, TLS)
    Http(String),
    /// Platform answered with a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },
    /// Credentials were rejected or a session could not be established
    Authentication(String),
    /// The referenced post does not exist or is no longer visible
    NotFound(String),
    /// URL does not identify a single post
    InvalidUrl(String),
    /// Response body did not have the expected shape
    ResponseParsing(String),
    /// Platform asked us to slow down
    RateLimited,
}

impl std::fmt::Display for PlatformErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformErrorKind::Http(msg) => write!(f, "HTTP request failed: {}", msg),
            PlatformErrorKind::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            PlatformErrorKind::Authentication(msg) => {
                write!(f, "Authentication failed: {}", msg)
            }
            PlatformErrorKind::NotFound(what) => write!(f, "Post not found: {}", what),
            PlatformErrorKind::InvalidUrl(url) => {
                write!(f, "URL does not point at a post: {}", url)
            }
            PlatformErrorKind::ResponseParsing(msg) => {
                write!(f, "Response parsing failed: {}", msg)
            }
            PlatformErrorKind::RateLimited => write!(f, "Rate limit exceeded"),
        }
    }
}

impl PlatformErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            PlatformErrorKind::Http(_) => true,
            PlatformErrorKind::RateLimited => true,
            PlatformErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }

    /// Whether the retry should wait longer than usual before the next attempt.
    pub fn should_backoff(&self) -> bool {
        matches!(
            self,
            PlatformErrorKind::RateLimited | PlatformErrorKind::Api { status: 429, .. }
        )
    }
}

/// Content-platform error with source location tracking.
///
/// # Examples
///
/// ```
/// use chapterbind_error::{PlatformError, PlatformErrorKind};
///
/// let err = PlatformError::new(PlatformErrorKind::NotFound("t3_abc".to_string()));
/// assert!(format!("{}", err).contains("t3_abc"));
/// ```
#[derive(Debug, Clone)]
pub struct PlatformError {
    /// The kind of error that occurred
    pub kind: PlatformErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PlatformError {
    /// Create a new PlatformError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlatformErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Platform Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for PlatformError {}

/// Result type for content-platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use chapterbind_error::{PlatformError, PlatformErrorKind, RetryableError};
///
/// let err = PlatformError::new(PlatformErrorKind::Api {
///     status: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
///
/// let err = PlatformError::new(PlatformErrorKind::Authentication("invalid_grant".into()));
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503, 429 or network timeouts return true.
    /// Permanent errors like 401, 404 or a malformed URL return false.
    fn is_retryable(&self) -> bool;

    /// Returns true if the caller should wait longer than the usual backoff.
    fn should_backoff(&self) -> bool {
        false
    }
}

impl RetryableError for PlatformError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn should_backoff(&self) -> bool {
        self.kind.should_backoff()
    }
}
