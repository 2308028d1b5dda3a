//! Error types for chapterbind.
//!
//! Every error records the file and line where it was created. Component
//! errors convert into [`ChapterbindError`] so the top of a run can report a
//! single failure value with a human-readable cause.

#![warn(missing_docs)]

mod book;
mod config;
mod error;
mod platform;
mod selection;

pub use book::{BookError, BookErrorKind};
pub use config::ConfigError;
pub use error::{ChapterbindError, ChapterbindErrorKind, ChapterbindResult};
pub use platform::{PlatformError, PlatformErrorKind, PlatformResult, RetryableError};
pub use selection::{SelectionError, SelectionErrorKind};
