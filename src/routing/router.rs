//! Sitemap route lookup and index lifecycle.
//!
//! # Responsibilities
//! - Build the route index lazily on the first lookup
//! - Answer `matches` / `resolve` against the published index
//! - Rebuild on demand, e.g. after sitemap configuration changes
//!
//! # Design Decisions
//! - Published index lives in an `ArcSwapOption`; readers never lock
//! - Builds are serialized behind an async mutex, with a re-check after
//!   acquiring it so concurrent cold lookups fetch from the provider once
//! - Lookups queued behind a failed build share its error instead of
//!   fetching again; the next fresh lookup retries
//! - A failed build never replaces the published index

use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{broadcast, mpsc, Mutex};

use crate::error::{RouteError, RouteResult};
use crate::observability::metrics;
use crate::routing::index::RouteIndex;
use crate::sitemap::model::{NodeId, SitemapSet};
use crate::sitemap::provider::SitemapSetProvider;
use crate::tenant::{TenantContext, TenantPrefix};

/// Per-tenant sitemap route table.
pub struct SitemapRoute {
    provider: Arc<dyn SitemapSetProvider>,
    tenant_prefix: TenantPrefix,
    routes: ArcSwapOption<RouteIndex>,
    build_lock: Mutex<BuildState>,
    /// Finished build attempts. Only advanced while `build_lock` is held.
    attempts: AtomicU64,
}

/// Outcome of the most recent build attempt, guarded by the build lock.
#[derive(Default)]
struct BuildState {
    last_error: Option<RouteError>,
}

impl fmt::Debug for SitemapRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SitemapRoute")
            .field("tenant_prefix", &self.tenant_prefix)
            .field("routes", &self.routes.load_full().map(|r| r.len()))
            .finish()
    }
}

impl SitemapRoute {
    /// Create a route table with no index. The first lookup builds it.
    pub fn new(provider: Arc<dyn SitemapSetProvider>, tenant: &impl TenantContext) -> Self {
        Self {
            provider,
            tenant_prefix: TenantPrefix::from_context(tenant),
            routes: ArcSwapOption::empty(),
            build_lock: Mutex::new(BuildState::default()),
            attempts: AtomicU64::new(0),
        }
    }

    /// Whether `path` is a sitemap route.
    pub async fn matches(&self, path: &str) -> RouteResult<bool> {
        let routes = self.current().await?;
        let hit = routes.contains(&self.tenant_prefix.apply(path));
        metrics::record_lookup(hit);
        Ok(hit)
    }

    /// Node that should render `path`, or `None` for non-sitemap paths.
    pub async fn resolve(&self, path: &str) -> RouteResult<Option<NodeId>> {
        let routes = self.current().await?;
        let node = routes.get(&self.tenant_prefix.apply(path)).cloned();
        metrics::record_lookup(node.is_some());
        tracing::debug!(path = %path, node = ?node, "Sitemap route resolved");
        Ok(node)
    }

    /// Build and publish a new index.
    ///
    /// Without `sets`, the provider is queried. On error the previously
    /// published index, if any, stays in effect.
    pub async fn build(&self, sets: Option<Vec<SitemapSet>>) -> RouteResult<Arc<RouteIndex>> {
        let mut state = self.build_lock.lock().await;
        self.build_locked(&mut state, sets).await
    }

    /// Whether an index has been published.
    pub fn is_built(&self) -> bool {
        self.routes.load().is_some()
    }

    /// The currently published index, without triggering a build.
    pub fn snapshot(&self) -> Option<Arc<RouteIndex>> {
        self.routes.load_full()
    }

    pub fn tenant_prefix(&self) -> &TenantPrefix {
        &self.tenant_prefix
    }

    /// Rebuild from every set list received on `updates` until shutdown or
    /// until the sender side is dropped.
    pub async fn run_rebuilds(
        self: Arc<Self>,
        mut updates: mpsc::UnboundedReceiver<Vec<SitemapSet>>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        tracing::info!(tenant = %self.tenant_prefix, "Sitemap rebuild loop starting");

        loop {
            tokio::select! {
                update = updates.recv() => {
                    let Some(sets) = update else {
                        tracing::info!("Sitemap update channel closed, exiting rebuild loop");
                        break;
                    };
                    if let Err(e) = self.build(Some(sets)).await {
                        tracing::error!(error = %e, "Sitemap rebuild failed, keeping current routes");
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!("Rebuild loop received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    async fn current(&self) -> RouteResult<Arc<RouteIndex>> {
        if let Some(routes) = self.routes.load_full() {
            return Ok(routes);
        }

        let seen = self.attempts.load(Ordering::Acquire);
        let mut state = self.build_lock.lock().await;
        // Another caller may have published while we waited
        if let Some(routes) = self.routes.load_full() {
            return Ok(routes);
        }
        // ... or failed, in which case we share its outcome
        if self.attempts.load(Ordering::Acquire) != seen {
            if let Some(err) = &state.last_error {
                tracing::debug!(error = %err, "Sharing failed sitemap build with queued lookup");
                return Err(err.clone());
            }
        }
        self.build_locked(&mut state, None).await
    }

    async fn build_locked(
        &self,
        state: &mut BuildState,
        sets: Option<Vec<SitemapSet>>,
    ) -> RouteResult<Arc<RouteIndex>> {
        let result = self.try_build(sets).await;
        state.last_error = result.as_ref().err().cloned();
        self.attempts.fetch_add(1, Ordering::Release);
        result
    }

    async fn try_build(&self, sets: Option<Vec<SitemapSet>>) -> RouteResult<Arc<RouteIndex>> {
        let start = Instant::now();
        let prefetched = sets.is_some();

        let sets = match sets {
            Some(sets) => sets,
            None => match self.provider.fetch_sets().await {
                Ok(sets) => sets,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to fetch sitemap sets");
                    metrics::record_build("provider_error", start);
                    return Err(e.into());
                }
            },
        };

        let index = match RouteIndex::build(&sets, &self.tenant_prefix) {
            Ok(index) => Arc::new(index),
            Err(e) => {
                metrics::record_build("conflict", start);
                return Err(e);
            }
        };

        self.routes.store(Some(index.clone()));
        metrics::record_build("ok", start);
        metrics::record_route_count(index.len());

        tracing::info!(
            tenant = %self.tenant_prefix,
            sets = sets.len(),
            enabled_sets = sets.iter().filter(|s| s.enabled).count(),
            nodes = sets.iter().filter(|s| s.enabled).map(SitemapSet::node_count).sum::<usize>(),
            routes = index.len(),
            prefetched,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Sitemap routes built"
        );
        Ok(index)
    }
}
