use chapterbind_core::{Fullname, SearchTitle, SortOrder, ThingKind};

#[test]
fn test_search_title_takes_leading_words() {
    let title = SearchTitle::from_title("Dungeon Diary - Entry 14: The Return", 3);
    assert_eq!(title.as_str(), "Dungeon Diary -");
    assert_eq!(title.overlap(), 3);
    assert_eq!(title.to_string(), "Dungeon Diary -");
}

#[test]
fn test_search_title_shorter_than_overlap_uses_whole_title() {
    let title = SearchTitle::from_title("Prologue", 2);
    assert_eq!(title.as_str(), "Prologue");
    assert!(title.matches("Prologue"));
}

#[test]
fn test_search_title_matches_ignoring_case() {
    let title = SearchTitle::from_title("The Deep Ones [Part 7]", 2);
    assert!(title.matches("The Deep Ones [Part 1]"));
    assert!(title.matches("the deep ones [part 2]"));
    assert!(title.matches("THE DEEP ONES [PART 3]"));
}

#[test]
fn test_search_title_rejects_different_leading_words() {
    let title = SearchTitle::from_title("The Deep Ones [Part 7]", 2);
    assert!(!title.matches("A Deep One"));
    assert!(!title.matches("The Shallow Ones"));
    assert!(!title.matches("Deep Ones, The"));
}

#[test]
fn test_search_title_matches_raw_prefix_without_word_boundary() {
    let title = SearchTitle::from_title("Chapter 1", 1);
    assert!(title.matches("ChapterX begins"));

    let title = SearchTitle::from_title("Chapter 1 - Dawn", 2);
    assert!(title.matches("Chapter 10 - Dusk"));
}

#[test]
fn test_fullname_round_trips_through_display() {
    let name: Fullname = "t1_xyz".parse().expect("Valid fullname");
    assert_eq!(name.kind(), ThingKind::Comment);
    assert_eq!(name.id(), "xyz");
    assert_eq!(name.to_string(), "t1_xyz");
}

#[test]
fn test_fullname_rejects_malformed_input() {
    assert!("abc123".parse::<Fullname>().is_err());
    assert!("t9_abc".parse::<Fullname>().is_err());
    assert!("t3_".parse::<Fullname>().is_err());
}

#[test]
fn test_sort_order_renders_lowercase() {
    assert_eq!(SortOrder::default(), SortOrder::New);
    assert_eq!(SortOrder::New.to_string(), "new");
    assert_eq!(SortOrder::Relevance.as_ref(), "relevance");
}
