//! Trait definitions for chapterbind.
//!
//! The chapter discovery core talks to the outside world through two seams:
//! a [`PlatformClient`] that reads posts from the content platform, and a
//! [`BookAssembler`] that packages the selected chapters into a document.

#![warn(missing_docs)]

mod assembler;
mod platform;

pub use assembler::{BookAssembler, BookMetadata, BookMetadataBuilder};
pub use platform::PlatformClient;
