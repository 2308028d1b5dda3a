//! Test utilities for discovery tests.
//!
//! Provides an in-memory platform client and helpers for building posts.

#![allow(dead_code)]

use async_trait::async_trait;
use chapterbind_core::{
    Author, Community, Fullname, SearchQuery, Submission, Thing, ThingKind,
};
use chapterbind_error::{PlatformError, PlatformErrorKind, PlatformResult};
use chapterbind_interface::PlatformClient;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const AUTHOR: &str = "serialwriter";
pub const COMMUNITY: &str = "HFY";

/// How the mock answers a fullname lookup.
#[derive(Debug, Clone)]
pub enum Lookup {
    Found(Thing),
    Missing,
    Fails(PlatformErrorKind),
}

/// In-memory platform with scripted anchors, search results and lookups.
#[derive(Debug, Default)]
pub struct MockPlatform {
    anchors: HashMap<String, Submission>,
    results: Vec<Thing>,
    lookups: HashMap<Fullname, Lookup>,
    queries: Mutex<Vec<SearchQuery>>,
    lookup_calls: Mutex<Vec<Fullname>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, url: &str, submission: Submission) -> Self {
        self.anchors.insert(url.to_string(), submission);
        self
    }

    pub fn with_results(mut self, results: Vec<Thing>) -> Self {
        self.results = results;
        self
    }

    pub fn with_lookup(mut self, fullname: Fullname, lookup: Lookup) -> Self {
        self.lookups.insert(fullname, lookup);
        self
    }

    /// Queries received by `search`, in order.
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }

    /// Fullnames received by `thing_by_fullname`.
    pub fn lookup_calls(&self) -> Vec<Fullname> {
        self.lookup_calls.lock().unwrap().clone()
    }

    /// Most lookups that were pending at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlatformClient for MockPlatform {
    async fn submission_by_url(&self, url: &str) -> PlatformResult<Submission> {
        self.anchors
            .get(url)
            .cloned()
            .ok_or_else(|| PlatformError::new(PlatformErrorKind::NotFound(url.to_string())))
    }

    async fn search(&self, query: &SearchQuery) -> PlatformResult<Vec<Thing>> {
        self.queries.lock().unwrap().push(query.clone());
        let mut results = self.results.clone();
        if let Some(limit) = query.limit() {
            results.truncate(*limit);
        }
        Ok(results)
    }

    async fn thing_by_fullname(&self, fullname: &Fullname) -> PlatformResult<Option<Thing>> {
        self.lookup_calls.lock().unwrap().push(fullname.clone());
        let pending = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(pending, Ordering::SeqCst);
        // Stay pending across one poll so overlapping lookups are observable
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.lookups.get(fullname) {
            Some(Lookup::Found(thing)) => Ok(Some(thing.clone())),
            Some(Lookup::Fails(kind)) => Err(PlatformError::new(kind.clone())),
            Some(Lookup::Missing) | None => Ok(None),
        }
    }

    fn platform_name(&self) -> &str {
        "mock"
    }
}

/// A text post by the default author in the default community.
pub fn text_post(id: &str, title: &str) -> Submission {
    Submission::builder()
        .id(id)
        .title(title)
        .author(Author::new(AUTHOR))
        .community(Community::new(COMMUNITY))
        .is_self(true)
        .selftext_html(format!("<p>Body of {}</p>", title))
        .build()
        .expect("text post with all required fields")
}

/// A link or media post.
pub fn link_post(id: &str, title: &str) -> Submission {
    Submission::builder()
        .id(id)
        .title(title)
        .author(Author::new(AUTHOR))
        .community(Community::new("pics"))
        .is_self(false)
        .build()
        .expect("link post with all required fields")
}

/// A repost of `parent`.
pub fn repost(id: &str, title: &str, parent: &str) -> Submission {
    Submission::builder()
        .id(id)
        .title(title)
        .author(Author::new(AUTHOR))
        .community(Community::new("OtherSub"))
        .is_self(false)
        .crosspost_parent(Fullname::new(ThingKind::Link, parent))
        .build()
        .expect("repost with all required fields")
}

pub fn thing(submission: Submission) -> Thing {
    Thing::from(submission)
}

pub fn comment(id: &str) -> Thing {
    Thing::Other(Fullname::new(ThingKind::Comment, id))
}

pub fn link_name(id: &str) -> Fullname {
    Fullname::new(ThingKind::Link, id)
}

pub fn ids(chapters: &[Submission]) -> Vec<&str> {
    chapters.iter().map(|c| c.id().as_str()).collect()
}
