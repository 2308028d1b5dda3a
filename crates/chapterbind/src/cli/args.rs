//! Command-line arguments.

use chapterbind_discovery::{DEFAULT_MAX_POSTS, DEFAULT_OVERLAP, DiscoveryOptions};
use chapterbind_error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for chapterbind.
#[derive(Parser, Debug, Clone)]
#[command(name = "chapterbind")]
#[command(about = "Collect the chapters of a serialized Reddit story into an EPUB")]
#[command(version)]
pub struct Cli {
    /// URL of any chapter of the series
    #[arg(short, long)]
    pub input: String,

    /// File name of the EPUB; defaults to the book title
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Book title, replacing the leading words of the first chapter title
    #[arg(short, long)]
    pub title: Option<String>,

    /// How many words at the start of the title all chapters share
    #[arg(long, default_value_t = DEFAULT_OVERLAP, value_parser = parse_overlap)]
    pub overlap: usize,

    /// Warn when at least this many chapters are found
    #[arg(short, long, alias = "max_posts", default_value_t = DEFAULT_MAX_POSTS)]
    pub max_posts: usize,

    /// Search all of Reddit, for stories that span subreddits
    #[arg(long)]
    pub all_reddit: bool,

    /// Directory holding the .env credentials file
    #[arg(long, default_value = ".")]
    pub env_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Discovery options selected on the command line.
    ///
    /// # Errors
    ///
    /// Returns error if the options are out of range.
    pub fn discovery_options(&self) -> Result<DiscoveryOptions, ConfigError> {
        DiscoveryOptions::builder()
            .overlap(self.overlap)
            .max_posts(self.max_posts)
            .all_platform(self.all_reddit)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid options: {}", e)))
    }
}

fn parse_overlap(value: &str) -> Result<usize, String> {
    let overlap: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number of words", value))?;
    if overlap == 0 {
        return Err("overlap must be at least 1".to_string());
    }
    Ok(overlap)
}
