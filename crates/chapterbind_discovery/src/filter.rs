//! Chapter filter: keeps genuine text chapters from raw search results.

use chapterbind_core::{Fullname, SearchTitle, Submission, Thing};
use chapterbind_error::PlatformResult;
use chapterbind_interface::PlatformClient;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Maximum number of repost originals fetched at the same time.
pub const ORIGINAL_FETCH_CONCURRENCY: usize = 8;

/// Why a candidate was not accepted as a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// Title does not start with the search title
    #[display("title mismatch")]
    TitleMismatch,
    /// Object is not a submission, e.g. a comment
    #[display("not a submission")]
    NotSubmission,
    /// Link or media post without a repost reference
    #[display("link or media post")]
    LinkOrMedia,
    /// Repost whose original is not a text post (including reposts of reposts)
    #[display("repost of non-text post")]
    RepostOfNonText,
    /// Repost whose original could not be fetched or no longer exists
    #[display("unresolvable repost")]
    Unresolved,
    /// Same post already accepted earlier in the sequence
    #[display("duplicate")]
    Duplicate,
}

/// Counts of what the filter did with its input.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct FilterStats {
    /// Candidates examined
    examined: usize,
    /// Chapters accepted, reposts replaced by their originals included
    accepted: usize,
    /// Reposts replaced by their original post
    reposts_resolved: usize,
    /// Titles not starting with the search title
    title_mismatches: usize,
    /// Non-submission objects
    non_submissions: usize,
    /// Link or media posts
    link_or_media: usize,
    /// Reposts of non-text posts
    reposts_of_non_text: usize,
    /// Reposts whose original could not be fetched
    unresolved: usize,
    /// Duplicate posts
    duplicates: usize,
}

impl FilterStats {
    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::TitleMismatch => self.title_mismatches += 1,
            Rejection::NotSubmission => self.non_submissions += 1,
            Rejection::LinkOrMedia => self.link_or_media += 1,
            Rejection::RepostOfNonText => self.reposts_of_non_text += 1,
            Rejection::Unresolved => self.unresolved += 1,
            Rejection::Duplicate => self.duplicates += 1,
        }
    }

    /// Total number of rejected candidates.
    pub fn rejected(&self) -> usize {
        self.examined - self.accepted
    }
}

/// Output of [`filter_chapters`]: accepted chapters in input order.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct FilteredChapters {
    /// Accepted chapters, newest first when the input was
    chapters: Vec<Submission>,
    /// What happened to every candidate
    stats: FilterStats,
}

impl FilteredChapters {
    /// Consumes the result, returning the chapters.
    pub fn into_chapters(self) -> Vec<Submission> {
        self.chapters
    }
}

/// First-pass decision for one candidate.
enum Screen {
    Accept(Submission),
    Resolve(Fullname),
    Reject(Rejection),
}

fn screen(candidate: Thing, title: &SearchTitle) -> Screen {
    let Some(submission) = candidate.into_submission() else {
        return Screen::Reject(Rejection::NotSubmission);
    };
    if !title.matches(submission.title()) {
        return Screen::Reject(Rejection::TitleMismatch);
    }
    if *submission.is_self() {
        return Screen::Accept(submission);
    }
    match submission.crosspost_parent() {
        Some(parent) => Screen::Resolve(parent.clone()),
        None => Screen::Reject(Rejection::LinkOrMedia),
    }
}

/// Decide on a repost given the fetch result for its original.
fn judge_original(
    original: PlatformResult<Option<Thing>>,
    parent: &Fullname,
    title: &SearchTitle,
) -> Result<Submission, Rejection> {
    let original = match original {
        Ok(Some(thing)) => thing,
        Ok(None) => {
            warn!(parent = %parent, "Repost original no longer exists, skipping");
            return Err(Rejection::Unresolved);
        }
        Err(e) => {
            warn!(parent = %parent, error = %e, "Failed to fetch repost original, skipping");
            return Err(Rejection::Unresolved);
        }
    };

    let Some(original) = original.into_submission() else {
        return Err(Rejection::NotSubmission);
    };
    if !*original.is_self() {
        return Err(Rejection::RepostOfNonText);
    }
    if !title.matches(original.title()) {
        return Err(Rejection::TitleMismatch);
    }
    Ok(original)
}

/// Keep only the candidates that are chapters of the work.
///
/// For each candidate, in order:
/// 1. reject non-submissions and titles not starting with `title`
///    (case-insensitive raw prefix),
/// 2. accept text posts as they are,
/// 3. reject link/media posts that are not reposts,
/// 4. replace reposts by their original when the original is a text post
///    with a matching title; reposts of anything else, reposts of reposts
///    included, are rejected.
///
/// Originals are fetched concurrently, at most
/// [`ORIGINAL_FETCH_CONCURRENCY`] at a time. A fetch that still fails after the
/// client's retries drops only that candidate. The output keeps input order
/// and contains each post at most once (the first occurrence wins).
#[instrument(skip(client, candidates, title), fields(candidates = candidates.len(), title = %title))]
pub async fn filter_chapters<C>(
    client: &C,
    candidates: Vec<Thing>,
    title: &SearchTitle,
) -> FilteredChapters
where
    C: PlatformClient + ?Sized,
{
    let mut stats = FilterStats {
        examined: candidates.len(),
        ..FilterStats::default()
    };

    let screened: Vec<Screen> = candidates
        .into_iter()
        .map(|candidate| screen(candidate, title))
        .collect();

    let parents: Vec<&Fullname> = screened
        .iter()
        .filter_map(|s| match s {
            Screen::Resolve(parent) => Some(parent),
            _ => None,
        })
        .collect();
    debug!(reposts = parents.len(), "Resolving repost originals");
    let mut originals = stream::iter(parents.iter().map(|p| client.thing_by_fullname(p)))
        .buffered(ORIGINAL_FETCH_CONCURRENCY)
        .collect::<Vec<_>>()
        .await
        .into_iter();

    let mut seen = HashSet::new();
    let mut chapters = Vec::new();
    for decision in &screened {
        let outcome = match decision {
            Screen::Accept(submission) => Ok((submission.clone(), false)),
            Screen::Reject(rejection) => Err(*rejection),
            Screen::Resolve(parent) => {
                // One fetch result per Resolve entry, in the same order
                let fetched = originals.next().unwrap_or(Ok(None));
                judge_original(fetched, parent, title).map(|original| (original, true))
            }
        };

        let outcome = outcome.and_then(|(submission, resolved)| {
            if seen.insert(submission.id().clone()) {
                Ok((submission, resolved))
            } else {
                Err(Rejection::Duplicate)
            }
        });

        match outcome {
            Ok((submission, resolved)) => {
                debug!(id = %submission.id(), title = %submission.title(), resolved, "Accepted chapter");
                if resolved {
                    stats.reposts_resolved += 1;
                }
                chapters.push(submission);
            }
            Err(rejection) => {
                debug!(%rejection, "Rejected candidate");
                stats.record(rejection);
            }
        }
    }

    stats.accepted = chapters.len();
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected(),
        unresolved = stats.unresolved,
        "Chapter filter complete"
    );

    FilteredChapters { chapters, stats }
}
