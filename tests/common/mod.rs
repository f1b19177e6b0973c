//! Shared providers and fixtures for integration tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sitemap_route::sitemap::{ProviderError, SitemapNode, SitemapSet, SitemapSetProvider};

/// Provider that counts fetches and can be switched into a failing state.
#[derive(Default)]
pub struct CountingProvider {
    sets: std::sync::Mutex<Vec<SitemapSet>>,
    fetches: AtomicUsize,
    failing: AtomicBool,
    delay: Option<Duration>,
}

#[allow(dead_code)]
impl CountingProvider {
    pub fn new(sets: Vec<SitemapSet>) -> Arc<Self> {
        Arc::new(Self {
            sets: std::sync::Mutex::new(sets),
            ..Default::default()
        })
    }

    /// Every fetch sleeps for `delay` first, widening race windows.
    pub fn slow(sets: Vec<SitemapSet>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            sets: std::sync::Mutex::new(sets),
            delay: Some(delay),
            ..Default::default()
        })
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn replace_sets(&self, sets: Vec<SitemapSet>) {
        *self.sets.lock().unwrap() = sets;
    }
}

#[async_trait]
impl SitemapSetProvider for CountingProvider {
    async fn fetch_sets(&self) -> Result<Vec<SitemapSet>, ProviderError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ProviderError::Unavailable("injected failure".into()));
        }
        Ok(self.sets.lock().unwrap().clone())
    }
}

/// A tenant-agnostic fixture with nested nodes, a disabled set and a second enabled set.
#[allow(dead_code)]
pub fn sample_sets() -> Vec<SitemapSet> {
    vec![
        SitemapSet::new("main", "/sitemap").with_nodes(vec![
            SitemapNode::new("node-42", "/blog.xml"),
            SitemapNode::new("products", "/products.xml").with_children(vec![
                SitemapNode::new("shoes", "/shoes.xml"),
                SitemapNode::new("hats", "/hats.xml")
                    .with_children(vec![SitemapNode::new("caps", "/caps.xml")]),
            ]),
        ]),
        SitemapSet::new("news", "news").with_nodes(vec![SitemapNode::new("latest", "/latest.xml")]),
        SitemapSet::new("legacy", "old")
            .disabled()
            .with_nodes(vec![SitemapNode::new("archive", "/archive.xml")]),
    ]
}
