//! File-backed sitemap set provider.
//!
//! The document holds a `sets` array. Files ending in `.json` are parsed as
//! JSON, anything else as TOML:
//!
//! ```toml
//! [[sets]]
//! id = "main"
//! root_path = "/sitemap"
//!
//! [[sets.nodes]]
//! id = "node-42"
//! path = "/blog.xml"
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::sitemap::model::SitemapSet;
use crate::sitemap::provider::{ProviderError, SitemapSetProvider};

/// On-disk layout of a sitemap set document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SitemapDocument {
    #[serde(default)]
    pub sets: Vec<SitemapSet>,
}

/// Read and parse a sitemap set document.
pub fn load_sets(path: &Path) -> Result<Vec<SitemapSet>, ProviderError> {
    let content = fs::read_to_string(path).map_err(|source| ProviderError::Io {
        path: path.to_path_buf(),
        source: Arc::new(source),
    })?;
    parse_sets(path, &content)
}

fn parse_sets(path: &Path, content: &str) -> Result<Vec<SitemapSet>, ProviderError> {
    let parse_error = |message: String| ProviderError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let document: SitemapDocument = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
    } else {
        toml::from_str(content).map_err(|e| parse_error(e.to_string()))?
    };

    tracing::debug!(path = %path.display(), sets = document.sets.len(), "Sitemap document parsed");
    Ok(document.sets)
}

/// Provider that re-reads a sitemap document from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileSitemapProvider {
    path: PathBuf,
}

impl FileSitemapProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SitemapSetProvider for FileSitemapProvider {
    async fn fetch_sets(&self) -> Result<Vec<SitemapSet>, ProviderError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ProviderError::Io {
                path: self.path.clone(),
                source: Arc::new(source),
            })?;
        parse_sets(&self.path, &content)
    }
}
