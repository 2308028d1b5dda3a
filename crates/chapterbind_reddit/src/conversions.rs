//! Conversions from Reddit JSON models into platform-neutral types.

use crate::{LinkJson, ThingJson};
use chapterbind_core::{Author, Community, Fullname, Submission, Thing, ThingKind};
use chapterbind_error::{PlatformError, PlatformErrorKind, PlatformResult};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static SUBMISSION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:/comments/|^(?:https?://)?(?:www\.)?redd\.it/)([A-Za-z0-9]+)")
        .expect("submission id pattern is valid")
});

/// Extract the base-36 submission id from a post URL.
///
/// Accepts permalinks (`.../comments/<id>/...`) and short links
/// (`https://redd.it/<id>`).
///
/// # Errors
///
/// Returns `InvalidUrl` if the URL does not identify a post.
#[track_caller]
pub fn parse_submission_id(url: &str) -> PlatformResult<String> {
    SUBMISSION_ID
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_lowercase())
        .ok_or_else(|| PlatformError::new(PlatformErrorKind::InvalidUrl(url.to_string())))
}

/// Convert a listing entry into a [`Thing`].
///
/// # Errors
///
/// Returns `ResponseParsing` if the kind is unknown or the payload does not
/// match it.
pub fn thing_from_json(thing: ThingJson) -> PlatformResult<Thing> {
    let kind = ThingKind::from_str(&thing.kind).map_err(|_| {
        PlatformError::new(PlatformErrorKind::ResponseParsing(format!(
            "Unknown thing kind: {}",
            thing.kind
        )))
    })?;

    match kind {
        ThingKind::Link => {
            let link: LinkJson = serde_json::from_value(thing.data).map_err(|e| {
                PlatformError::new(PlatformErrorKind::ResponseParsing(format!(
                    "Malformed submission: {}",
                    e
                )))
            })?;
            Ok(submission_from_json(link)?.into())
        }
        other => {
            let id = thing
                .data
                .get("id")
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| {
                    PlatformError::new(PlatformErrorKind::ResponseParsing(format!(
                        "{} thing without id",
                        other
                    )))
                })?;
            Ok(Thing::Other(Fullname::new(other, id)))
        }
    }
}

/// Convert a `t3` payload into a [`Submission`].
///
/// # Errors
///
/// Returns `ResponseParsing` if the crosspost parent is not a valid fullname.
pub fn submission_from_json(link: LinkJson) -> PlatformResult<Submission> {
    let crosspost_parent = link
        .crosspost_parent
        .as_deref()
        .map(Fullname::from_str)
        .transpose()?;

    let mut builder = Submission::builder();
    builder
        .id(link.id)
        .title(link.title)
        .author(Author::new(
            link.author.unwrap_or_else(|| "[deleted]".to_string()),
        ))
        .community(Community::new(link.subreddit))
        .is_self(link.is_self)
        .permalink(link.permalink)
        .created_utc(link.created_utc as i64);
    if let Some(parent) = crosspost_parent {
        builder.crosspost_parent(parent);
    }
    if let Some(html) = link.selftext_html {
        builder.selftext_html(html);
    }

    builder.build().map_err(|e| {
        PlatformError::new(PlatformErrorKind::ResponseParsing(format!(
            "Incomplete submission: {}",
            e
        )))
    })
}
