//! Collect the chapters of a serialized Reddit story into an EPUB.
//!
//! This facade re-exports the workspace crates and provides the command-line
//! front end used by the `chapterbind` binary.
//!
//! # Crates
//!
//! - `chapterbind_error`: error types
//! - `chapterbind_core`: posts, authors, search title and query
//! - `chapterbind_interface`: platform client and book assembler traits
//! - `chapterbind_reddit`: Reddit API client and credential loading
//! - `chapterbind_discovery`: anchor, search, filter and finalize steps
//! - `chapterbind_epub`: EPUB packaging

#![warn(missing_docs)]

pub mod cli;

pub use chapterbind_core::*;
pub use chapterbind_discovery::*;
pub use chapterbind_epub::*;
pub use chapterbind_error::*;
pub use chapterbind_interface::*;
pub use chapterbind_reddit::*;
pub use cli::{BindReport, Cli, bind, bind_with};
