//! Output file naming.

use regex::Regex;
use std::sync::LazyLock;

/// Extension appended to generated file names.
pub const EPUB_EXTENSION: &str = "epub";

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9a-zA-Z]+").expect("valid non-alphanumeric pattern")
});

/// Derive a file name from a book title.
///
/// Leading and trailing commas and periods are dropped, then every run of
/// characters outside `[0-9a-zA-Z]` becomes a single `_`.
///
/// # Examples
///
/// ```
/// use chapterbind_epub::default_file_name;
///
/// assert_eq!(default_file_name("The Long"), "The_Long.epub");
/// assert_eq!(default_file_name("...Wait, what?"), "Wait_what_.epub");
/// ```
pub fn default_file_name(title: &str) -> String {
    let trimmed = title.trim_matches(|c| c == ',' || c == '.');
    format!(
        "{}.{}",
        NON_ALPHANUMERIC.replace_all(trimmed, "_"),
        EPUB_EXTENSION
    )
}
