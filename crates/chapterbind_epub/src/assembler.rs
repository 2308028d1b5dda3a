//! EPUB archive writer.

use crate::templates::{
    self, CONTAINER_XML, COVER_FILE, MIMETYPE, NAV_FILE, NCX_FILE, OPF_FILE,
};
use chapterbind_core::Submission;
use chapterbind_error::{BookError, BookErrorKind};
use chapterbind_interface::{BookAssembler, BookMetadata};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes chapters as an EPUB 3 archive.
///
/// # Examples
///
/// ```no_run
/// use chapterbind_epub::{EpubAssembler, book_metadata};
/// use chapterbind_interface::BookAssembler;
/// # use chapterbind_core::{Author, Submission};
/// # use std::path::Path;
///
/// # fn example(chapters: &[Submission]) -> Result<(), chapterbind_error::BookError> {
/// let author = Author::new("writer");
/// let metadata = book_metadata(chapters, &author, None, 2)?;
/// let path = EpubAssembler::new().assemble(&metadata, chapters, Path::new("The_Long.epub"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct EpubAssembler {
    modified: Option<DateTime<Utc>>,
}

impl EpubAssembler {
    /// Create an assembler stamping archives with the current time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed modification time, for reproducible archives.
    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    fn modified_stamp(&self) -> String {
        self.modified
            .unwrap_or_else(Utc::now)
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string()
    }

    fn write_archive<W: Write + Seek>(
        &self,
        writer: W,
        metadata: &BookMetadata,
        chapters: &[Submission],
    ) -> Result<W, BookError> {
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(writer);

        // Readers expect an uncompressed mimetype as the very first entry
        add_entry(&mut zip, "mimetype", MIMETYPE, stored)?;
        add_entry(&mut zip, "META-INF/container.xml", CONTAINER_XML, deflated)?;

        let language = metadata.language();
        add_entry(
            &mut zip,
            &oebps(OPF_FILE),
            &templates::opf(metadata, chapters, &self.modified_stamp()),
            deflated,
        )?;
        add_entry(&mut zip, &oebps(NCX_FILE), &templates::ncx(metadata, chapters), deflated)?;
        add_entry(&mut zip, &oebps(NAV_FILE), &templates::nav(metadata, chapters), deflated)?;
        add_entry(&mut zip, &oebps(COVER_FILE), &templates::cover(metadata), deflated)?;

        for (i, chapter) in chapters.iter().enumerate() {
            debug!(index = i, id = %chapter.id(), "Adding chapter");
            add_entry(
                &mut zip,
                &oebps(&templates::chapter_file(i)),
                &templates::chapter(chapter, language),
                deflated,
            )?;
        }

        zip.finish().map_err(archive_error)
    }
}

impl BookAssembler for EpubAssembler {
    #[instrument(skip(self, metadata, chapters, output), fields(title = %metadata.title(), chapters = chapters.len(), output = %output.display()))]
    fn assemble(
        &self,
        metadata: &BookMetadata,
        chapters: &[Submission],
        output: &Path,
    ) -> Result<PathBuf, BookError> {
        if chapters.is_empty() {
            return Err(BookError::new(BookErrorKind::Empty));
        }

        let file = File::create(output)?;
        let mut file = self.write_archive(file, metadata, chapters)?;
        file.flush()?;

        info!("EPUB written");
        Ok(output.to_path_buf())
    }
}

fn oebps(name: &str) -> String {
    format!("OEBPS/{}", name)
}

fn add_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    content: &str,
    options: SimpleFileOptions,
) -> Result<(), BookError> {
    zip.start_file(name, options).map_err(archive_error)?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

#[track_caller]
fn archive_error(err: zip::result::ZipError) -> BookError {
    BookError::new(BookErrorKind::Archive(err.to_string()))
}
