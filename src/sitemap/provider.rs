//! Sitemap set provider abstraction.
//!
//! # Responsibilities
//! - Supply the full list of sitemap sets (enabled and disabled)
//! - Report storage failures as `ProviderError`
//!
//! # Design Decisions
//! - Injected into the resolver as `Arc<dyn SitemapSetProvider>`
//! - Providers never filter; the index builder decides what routes

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::sitemap::model::SitemapSet;

/// Errors raised while fetching sitemap sets.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The backing document could not be read.
    #[error("Failed to read sitemap sets from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The backing document is not a valid sitemap set document.
    #[error("Failed to parse sitemap sets from {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Storage is unavailable for any other reason.
    #[error("Sitemap set storage unavailable: {0}")]
    Unavailable(String),
}

/// Source of truth for sitemap set configuration.
#[async_trait]
pub trait SitemapSetProvider: Send + Sync {
    /// Fetch every configured sitemap set, enabled or not.
    async fn fetch_sets(&self) -> Result<Vec<SitemapSet>, ProviderError>;
}

/// Serves a fixed, in-memory list of sets.
#[derive(Debug, Clone, Default)]
pub struct StaticSitemapProvider {
    sets: Vec<SitemapSet>,
}

impl StaticSitemapProvider {
    pub fn new(sets: Vec<SitemapSet>) -> Self {
        Self { sets }
    }
}

#[async_trait]
impl SitemapSetProvider for StaticSitemapProvider {
    async fn fetch_sets(&self) -> Result<Vec<SitemapSet>, ProviderError> {
        Ok(self.sets.clone())
    }
}
