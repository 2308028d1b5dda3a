//! chapterbind - turn a serialized Reddit story into an EPUB.

use chapterbind::{Cli, bind, init_tracing};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let report = bind(&cli).await?;

    println!(
        "Total number of found posts with title prefix '{}': {}",
        report.search_title(),
        report.chapters()
    );
    for warning in report.warnings() {
        eprintln!("{}", warning);
    }
    println!("Wrote {}", report.output().display());

    Ok(())
}
