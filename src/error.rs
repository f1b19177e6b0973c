//! Route building and lookup errors.

use thiserror::Error;

use crate::sitemap::model::NodeId;
use crate::sitemap::provider::ProviderError;

/// Errors surfaced by `SitemapRoute` builds.
///
/// A lookup miss is not an error: `matches` yields `false` and `resolve` yields `None`.
#[derive(Debug, Clone, Error)]
pub enum RouteError {
    /// The sitemap set provider failed while fetching sets for a build.
    #[error("Sitemap set provider unavailable: {0}")]
    ProviderUnavailable(#[from] ProviderError),

    /// Two nodes produced the same fully-qualified path in one build.
    #[error("Duplicate sitemap route '{path}' (nodes '{existing}' and '{conflicting}')")]
    DuplicateRoute {
        path: String,
        existing: NodeId,
        conflicting: NodeId,
    },
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
