//! Tests for chapter set finalization.

mod test_utils;

use chapterbind_discovery::{SelectionWarning, finalize};
use chapterbind_error::SelectionErrorKind;
use test_utils::*;

fn newest_first(count: usize) -> Vec<chapterbind_core::Submission> {
    (1..=count)
        .rev()
        .map(|n| text_post(&format!("c{}", n), &format!("Serial Story, Part {}", n)))
        .collect()
}

#[test]
fn test_reverses_into_reading_order() {
    let set = finalize(newest_first(3), 200).unwrap();

    assert_eq!(ids(set.chapters()), vec!["c1", "c2", "c3"]);
    assert!(set.warnings().is_empty());
    assert_eq!(set.first().map(|c| c.id().as_str()), Some("c1"));
}

#[test]
fn test_no_chapters() {
    let err = finalize(Vec::new(), 200).unwrap_err();
    assert_eq!(err.kind(), &SelectionErrorKind::NoChaptersFound);
}

#[test]
fn test_single_chapter_has_no_siblings() {
    let err = finalize(newest_first(1), 200).unwrap_err();
    assert_eq!(err.kind(), &SelectionErrorKind::NoSiblingChapters);
}

#[test]
fn test_two_chapters_succeed() {
    let set = finalize(newest_first(2), 200).unwrap();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_warns_when_reaching_max_posts() {
    let set = finalize(newest_first(7), 5).unwrap();

    assert_eq!(
        ids(set.chapters()),
        vec!["c1", "c2", "c3", "c4", "c5", "c6", "c7"]
    );
    assert_eq!(
        set.warnings(),
        &vec![SelectionWarning::PossibleTruncation {
            found: 7,
            max_posts: 5
        }]
    );
    assert!(set.warnings()[0].to_string().contains("older chapters may be missing"));
}

#[test]
fn test_warns_at_exactly_max_posts() {
    let set = finalize(newest_first(5), 5).unwrap();
    assert_eq!(set.warnings().len(), 1);
}

#[test]
fn test_no_warning_below_max_posts() {
    let set = finalize(newest_first(4), 5).unwrap();
    assert!(set.warnings().is_empty());
}
