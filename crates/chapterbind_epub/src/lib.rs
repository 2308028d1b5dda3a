//! EPUB packaging for chapterbind.
//!
//! [`EpubAssembler`] implements
//! [`BookAssembler`](chapterbind_interface::BookAssembler) by writing an
//! EPUB 3 archive with a cover page, a navigation document and one page per
//! chapter in reading order.

#![warn(missing_docs)]

mod assembler;
mod file_name;
mod metadata;
mod templates;

pub use assembler::EpubAssembler;
pub use file_name::{EPUB_EXTENSION, default_file_name};
pub use metadata::book_metadata;
