//! Run handler: discover chapters and write the book.

use crate::Cli;
use chapterbind_core::SearchTitle;
use chapterbind_discovery::{Discovery, FilterStats, SelectionWarning};
use chapterbind_epub::{EpubAssembler, book_metadata, default_file_name};
use chapterbind_error::ChapterbindResult;
use chapterbind_interface::{BookAssembler, PlatformClient};
use chapterbind_reddit::{Credentials, RedditClient, RedditConfig};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Outcome of a successful run.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct BindReport {
    /// Title prefix shared by the chapters
    search_title: SearchTitle,
    /// Number of chapters in the book
    chapters: usize,
    /// Conditions worth telling the user about
    warnings: Vec<SelectionWarning>,
    /// What the chapter filter did
    stats: FilterStats,
    /// Path of the written book
    output: PathBuf,
}

/// Authenticate against Reddit and bind the story `cli.input` belongs to.
///
/// # Errors
///
/// Returns error if credentials cannot be loaded, authentication fails, the
/// story has fewer than two chapters, or the book cannot be written.
#[instrument(skip_all, fields(input = %cli.input))]
pub async fn bind(cli: &Cli) -> ChapterbindResult<BindReport> {
    let credentials = Credentials::from_dir(&cli.env_dir)?;
    let client = RedditClient::connect(&credentials, RedditConfig::default()).await?;
    bind_with(&client, &EpubAssembler::new(), cli).await
}

/// Bind a story using the given platform client and assembler.
///
/// # Errors
///
/// Returns error if discovery fails or the book cannot be written.
#[instrument(skip_all, fields(platform = client.platform_name(), input = %cli.input))]
pub async fn bind_with<C, A>(client: &C, assembler: &A, cli: &Cli) -> ChapterbindResult<BindReport>
where
    C: PlatformClient + ?Sized,
    A: BookAssembler + ?Sized,
{
    let options = cli.discovery_options()?;
    let work = Discovery::new(client, options).run(&cli.input).await?;
    let chapters = work.chapters().chapters();

    let metadata = book_metadata(
        chapters,
        work.anchor().author(),
        cli.title.as_deref(),
        cli.overlap,
    )?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_file_name(metadata.title())));

    let output = assembler.assemble(&metadata, chapters, &output)?;
    info!(output = %output.display(), chapters = chapters.len(), "Book written");

    Ok(BindReport {
        search_title: work.search_title().clone(),
        chapters: chapters.len(),
        warnings: work.chapters().warnings().clone(),
        stats: work.stats().clone(),
        output,
    })
}
