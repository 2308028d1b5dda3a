//! Tests for the chapter filter.

mod test_utils;

use chapterbind_core::SearchTitle;
use chapterbind_discovery::{ORIGINAL_FETCH_CONCURRENCY, filter_chapters};
use chapterbind_error::PlatformErrorKind;
use test_utils::*;

fn title() -> SearchTitle {
    SearchTitle::from_title("The Long Road, Part 3", 2)
}

#[tokio::test]
async fn test_keeps_text_posts_in_input_order() {
    let client = MockPlatform::new();
    let candidates = vec![
        thing(text_post("c3", "The Long Road, Part 3")),
        thing(text_post("c2", "The Long Road, Part 2")),
        thing(text_post("c1", "The Long Road, Part 1")),
    ];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert_eq!(ids(filtered.chapters()), vec!["c3", "c2", "c1"]);
    assert_eq!(*filtered.stats().accepted(), 3);
    assert_eq!(filtered.stats().rejected(), 0);
    assert!(client.lookup_calls().is_empty());
}

#[tokio::test]
async fn test_title_match_ignores_case() {
    let client = MockPlatform::new();
    let candidates = vec![
        thing(text_post("c2", "THE LONG ROAD, PART 2")),
        thing(text_post("c1", "the long road, part 1")),
    ];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert_eq!(ids(filtered.chapters()), vec!["c2", "c1"]);
}

#[tokio::test]
async fn test_rejects_title_mismatch() {
    let client = MockPlatform::new();
    let candidates = vec![
        thing(text_post("c2", "The Long Road, Part 2")),
        thing(text_post("x1", "A Long Road Home")),
        thing(text_post("x2", "Update on The Long Road")),
    ];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert_eq!(ids(filtered.chapters()), vec!["c2"]);
    assert_eq!(*filtered.stats().title_mismatches(), 2);
}

#[tokio::test]
async fn test_rejects_comments_and_link_posts() {
    let client = MockPlatform::new();
    let candidates = vec![
        thing(text_post("c2", "The Long Road, Part 2")),
        comment("k1"),
        thing(link_post("l1", "The Long Road, cover art")),
        thing(text_post("c1", "The Long Road, Part 1")),
    ];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert_eq!(ids(filtered.chapters()), vec!["c2", "c1"]);
    assert_eq!(*filtered.stats().non_submissions(), 1);
    assert_eq!(*filtered.stats().link_or_media(), 1);
    assert_eq!(*filtered.stats().examined(), 4);
}

#[tokio::test]
async fn test_repost_replaced_by_original() {
    let client = MockPlatform::new().with_lookup(
        link_name("orig2"),
        Lookup::Found(thing(text_post("orig2", "The Long Road, Part 2"))),
    );
    let candidates = vec![
        thing(text_post("c3", "The Long Road, Part 3")),
        thing(repost("r2", "The Long Road, Part 2", "orig2")),
        thing(text_post("c1", "The Long Road, Part 1")),
    ];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert_eq!(ids(filtered.chapters()), vec!["c3", "orig2", "c1"]);
    assert!(*filtered.chapters()[1].is_self());
    assert_eq!(*filtered.stats().reposts_resolved(), 1);
    assert_eq!(client.lookup_calls(), vec![link_name("orig2")]);
}

#[tokio::test]
async fn test_repost_of_link_post_dropped() {
    let client = MockPlatform::new().with_lookup(
        link_name("img"),
        Lookup::Found(thing(link_post("img", "The Long Road, map"))),
    );
    let candidates = vec![
        thing(text_post("c1", "The Long Road, Part 1")),
        thing(repost("r1", "The Long Road, map", "img")),
    ];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert_eq!(ids(filtered.chapters()), vec!["c1"]);
    assert_eq!(*filtered.stats().reposts_of_non_text(), 1);
}

#[tokio::test]
async fn test_repost_of_repost_dropped() {
    let client = MockPlatform::new()
        .with_lookup(
            link_name("mid"),
            Lookup::Found(thing(repost("mid", "The Long Road, Part 2", "orig"))),
        )
        .with_lookup(
            link_name("orig"),
            Lookup::Found(thing(text_post("orig", "The Long Road, Part 2"))),
        );
    let candidates = vec![
        thing(repost("r2", "The Long Road, Part 2", "mid")),
        thing(text_post("c1", "The Long Road, Part 1")),
    ];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert_eq!(ids(filtered.chapters()), vec!["c1"]);
    assert_eq!(*filtered.stats().reposts_of_non_text(), 1);
    // Only one level of repost is followed
    assert_eq!(client.lookup_calls(), vec![link_name("mid")]);
}

#[tokio::test]
async fn test_repost_whose_original_has_other_title_dropped() {
    let client = MockPlatform::new().with_lookup(
        link_name("orig"),
        Lookup::Found(thing(text_post("orig", "Something else entirely"))),
    );
    let candidates = vec![thing(repost("r1", "The Long Road, Part 1", "orig"))];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert!(filtered.chapters().is_empty());
    assert_eq!(*filtered.stats().title_mismatches(), 1);
}

#[tokio::test]
async fn test_unresolvable_repost_skipped_without_failing_run() {
    let client = MockPlatform::new()
        .with_lookup(
            link_name("gone"),
            Lookup::Fails(PlatformErrorKind::Api {
                status: 503,
                message: "unavailable".to_string(),
            }),
        )
        .with_lookup(link_name("deleted"), Lookup::Missing);
    let candidates = vec![
        thing(text_post("c3", "The Long Road, Part 3")),
        thing(repost("r2", "The Long Road, Part 2", "gone")),
        thing(repost("r1", "The Long Road, Part 1", "deleted")),
        thing(text_post("c0", "The Long Road, Prologue")),
    ];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert_eq!(ids(filtered.chapters()), vec!["c3", "c0"]);
    assert_eq!(*filtered.stats().unresolved(), 2);
}

#[tokio::test]
async fn test_duplicates_keep_first_occurrence() {
    let client = MockPlatform::new().with_lookup(
        link_name("c2"),
        Lookup::Found(thing(text_post("c2", "The Long Road, Part 2"))),
    );
    let candidates = vec![
        thing(text_post("c2", "The Long Road, Part 2")),
        thing(repost("r2", "The Long Road, Part 2", "c2")),
        thing(text_post("c2", "The Long Road, Part 2")),
        thing(text_post("c1", "The Long Road, Part 1")),
    ];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert_eq!(ids(filtered.chapters()), vec!["c2", "c1"]);
    assert_eq!(*filtered.stats().duplicates(), 2);
    assert_eq!(*filtered.stats().reposts_resolved(), 0);
}

#[tokio::test]
async fn test_repost_counted_as_resolved_only_when_kept() {
    let client = MockPlatform::new().with_lookup(
        link_name("c2"),
        Lookup::Found(thing(text_post("c2", "The Long Road, Part 2"))),
    );
    let candidates = vec![
        thing(repost("r2", "The Long Road, Part 2", "c2")),
        thing(repost("r2b", "The Long Road, Part 2", "c2")),
        thing(text_post("c1", "The Long Road, Part 1")),
    ];

    let filtered = filter_chapters(&client, candidates, &title()).await;

    assert_eq!(ids(filtered.chapters()), vec!["c2", "c1"]);
    assert_eq!(*filtered.stats().reposts_resolved(), 1);
    assert_eq!(*filtered.stats().duplicates(), 1);
}

#[tokio::test]
async fn test_original_lookups_are_bounded_and_keep_order() {
    let reposts = ORIGINAL_FETCH_CONCURRENCY * 2 + 3;
    let mut client = MockPlatform::new();
    let mut candidates = Vec::new();
    for i in (0..reposts).rev() {
        let original = format!("orig{}", i);
        let title = format!("The Long Road, Part {}", i);
        client = client.with_lookup(
            link_name(&original),
            Lookup::Found(thing(text_post(&original, &title))),
        );
        candidates.push(thing(repost(&format!("r{}", i), &title, &original)));
    }

    let filtered = filter_chapters(&client, candidates, &title()).await;

    let expected: Vec<String> = (0..reposts).rev().map(|i| format!("orig{}", i)).collect();
    assert_eq!(ids(filtered.chapters()), expected);
    assert_eq!(*filtered.stats().reposts_resolved(), reposts);
    assert_eq!(client.lookup_calls().len(), reposts);
    assert!(client.peak_in_flight() > 1);
    assert!(client.peak_in_flight() <= ORIGINAL_FETCH_CONCURRENCY);
}

#[tokio::test]
async fn test_filter_is_idempotent() {
    let client = MockPlatform::new().with_lookup(
        link_name("orig2"),
        Lookup::Found(thing(text_post("orig2", "The Long Road, Part 2"))),
    );
    let candidates = vec![
        thing(text_post("c3", "The Long Road, Part 3")),
        thing(repost("r2", "The Long Road, Part 2", "orig2")),
        comment("k1"),
        thing(text_post("c1", "The Long Road, Part 1")),
    ];

    let once = filter_chapters(&client, candidates, &title()).await;
    let again_input = once.chapters().iter().cloned().map(thing).collect();
    let twice = filter_chapters(&client, again_input, &title()).await;

    assert_eq!(once.chapters(), twice.chapters());
}

#[tokio::test]
async fn test_empty_input() {
    let client = MockPlatform::new();

    let filtered = filter_chapters(&client, Vec::new(), &title()).await;

    assert!(filtered.chapters().is_empty());
    assert_eq!(filtered.stats().rejected(), 0);
}
