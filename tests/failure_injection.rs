//! Failure injection: provider outages and conflicting configuration.

use sitemap_route::sitemap::{SitemapNode, SitemapSet};
use sitemap_route::{NodeId, RouteError, SitemapRoute};

mod common;
use common::{sample_sets, CountingProvider};

fn conflicting_sets() -> Vec<SitemapSet> {
    vec![
        SitemapSet::new("one", "sitemap").with_nodes(vec![SitemapNode::new("a", "/x.xml")]),
        SitemapSet::new("two", "/sitemap").with_nodes(vec![SitemapNode::new("b", "/x.xml")]),
    ]
}

#[tokio::test]
async fn test_provider_failure_on_cold_lookup() {
    let provider = CountingProvider::new(sample_sets());
    provider.set_failing(true);
    let route = SitemapRoute::new(provider.clone(), &"site1");

    let err = route.matches("sitemap/blog.xml").await.unwrap_err();
    assert!(matches!(err, RouteError::ProviderUnavailable(_)));
    assert!(!route.is_built());

    // Recovers on the next lookup once the provider is back
    provider.set_failing(false);
    assert!(route.matches("sitemap/blog.xml").await.unwrap());
    assert_eq!(provider.fetches(), 2);
}

#[tokio::test]
async fn test_provider_failure_keeps_previous_index() {
    let provider = CountingProvider::new(sample_sets());
    let route = SitemapRoute::new(provider.clone(), &"site1");
    route.build(None).await.unwrap();

    provider.set_failing(true);
    let err = route.build(None).await.unwrap_err();
    assert!(matches!(err, RouteError::ProviderUnavailable(_)));

    assert_eq!(
        route.resolve("sitemap/blog.xml").await.unwrap(),
        Some(NodeId::from("node-42"))
    );
}

#[tokio::test]
async fn test_duplicate_route_on_cold_build() {
    let provider = CountingProvider::new(conflicting_sets());
    let route = SitemapRoute::new(provider, &"site1");

    let err = route.resolve("sitemap/x.xml").await.unwrap_err();
    match err {
        RouteError::DuplicateRoute { path, existing, conflicting } => {
            assert_eq!(path, "site1/sitemap/x.xml");
            assert_eq!(existing, NodeId::from("a"));
            assert_eq!(conflicting, NodeId::from("b"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!route.is_built());
}

#[tokio::test]
async fn test_duplicate_route_keeps_previous_index() {
    let provider = CountingProvider::new(sample_sets());
    let route = SitemapRoute::new(provider.clone(), &"");
    let before = route.build(None).await.unwrap();

    let err = route.build(Some(conflicting_sets())).await.unwrap_err();
    assert!(err.to_string().contains("sitemap/x.xml"));

    let after = route.snapshot().unwrap();
    assert_eq!(*before, *after);
    assert!(route.matches("sitemap/blog.xml").await.unwrap());
    assert!(!route.matches("sitemap/x.xml").await.unwrap());
}

#[tokio::test]
async fn test_conflict_only_in_disabled_set_is_ignored() {
    let mut sets = conflicting_sets();
    sets[1].enabled = false;
    let route = SitemapRoute::new(CountingProvider::new(sets), &"");

    assert_eq!(
        route.resolve("sitemap/x.xml").await.unwrap(),
        Some(NodeId::from("a"))
    );
}
