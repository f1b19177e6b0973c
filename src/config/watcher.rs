//! Sitemap document watcher for hot rebuilds.

use notify::event::{ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::sitemap::file::load_sets;
use crate::sitemap::model::SitemapSet;

/// A watcher that monitors the sitemap set document for changes.
pub struct SitemapWatcher {
    path: PathBuf,
    poll_interval: Duration,
    update_tx: mpsc::UnboundedSender<Vec<SitemapSet>>,
}

impl SitemapWatcher {
    /// Create a new SitemapWatcher.
    ///
    /// Returns the watcher and a receiver for freshly loaded set lists, meant
    /// for `SitemapRoute::run_rebuilds`.
    pub fn new(
        path: &Path,
        poll_interval: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<Vec<SitemapSet>>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                poll_interval,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// The parent directory is watched rather than the file itself, so saves
    /// that rename a temp file over the document keep being picked up.
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let path = self.path.clone();
        let file_name = self
            .path
            .file_name()
            .map(ToOwned::to_owned)
            .ok_or_else(|| notify::Error::path_not_found().add_path(self.path.clone()))?;
        if !self.path.is_file() {
            return Err(notify::Error::path_not_found().add_path(self.path.clone()));
        }
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !event.paths.iter().any(|p| p.file_name() == Some(file_name.as_os_str())) {
                        return;
                    }
                    if event.kind.is_remove()
                        || matches!(event.kind, EventKind::Modify(ModifyKind::Name(RenameMode::From)))
                    {
                        tracing::warn!(path = %path.display(), "Sitemap document removed, keeping current routes");
                        return;
                    }
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = %path.display(), "Sitemap document change detected, reloading...");
                        match load_sets(&path) {
                            Ok(sets) => {
                                let _ = tx.send(sets);
                            }
                            Err(e) => {
                                tracing::error!("Failed to reload sitemap sets: {}. Keeping current routes.", e);
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(self.poll_interval),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, dir = ?dir, "Sitemap watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_fails_to_watch() {
        let (watcher, _rx) = SitemapWatcher::new(
            Path::new("/nonexistent/sitemaps.toml"),
            Duration::from_secs(1),
        );
        assert!(watcher.run().is_err());
    }

    #[tokio::test]
    async fn test_change_delivers_fresh_sets() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[sets]]\nid = \"main\"\nroot_path = \"sitemap\"").unwrap();

        let (watcher, mut rx) = SitemapWatcher::new(file.path(), Duration::from_millis(100));
        let _guard = watcher.run().unwrap();

        std::fs::write(
            file.path(),
            "[[sets]]\nid = \"news\"\nroot_path = \"news\"\n\n[[sets.nodes]]\nid = \"n1\"\npath = \"/latest.xml\"\n",
        )
        .unwrap();

        let sets = tokio::time::timeout(Duration::from_secs(10), async {
            loop {
                match rx.recv().await {
                    Some(sets) if sets.iter().any(|s| s.id == "news") => break sets,
                    Some(_) => continue,
                    None => panic!("watcher channel closed"),
                }
            }
        })
        .await
        .expect("no reload within timeout");

        assert_eq!(sets[0].node_count(), 1);
    }

    async fn next_with_set(
        rx: &mut mpsc::UnboundedReceiver<Vec<SitemapSet>>,
        id: &str,
    ) -> Vec<SitemapSet> {
        tokio::time::timeout(Duration::from_secs(10), async {
            loop {
                match rx.recv().await {
                    Some(sets) if sets.iter().any(|s| s.id == id) => break sets,
                    Some(_) => continue,
                    None => panic!("watcher channel closed"),
                }
            }
        })
        .await
        .unwrap_or_else(|_| panic!("no reload with set '{id}' within timeout"))
    }

    #[tokio::test]
    async fn test_edits_after_rename_over_save_still_delivered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemaps.toml");
        std::fs::write(&path, "[[sets]]\nid = \"v0\"\n").unwrap();

        let (watcher, mut rx) = SitemapWatcher::new(&path, Duration::from_millis(100));
        let _guard = watcher.run().unwrap();

        // Editor-style save: write a temp file, then rename it over the document
        let tmp = dir.path().join(".sitemaps.toml.swp");
        std::fs::write(&tmp, "[[sets]]\nid = \"v1\"\n").unwrap();
        std::fs::rename(&tmp, &path).unwrap();
        next_with_set(&mut rx, "v1").await;

        // In-place edit after the rename
        std::fs::write(&path, "[[sets]]\nid = \"v2\"\n").unwrap();
        let sets = next_with_set(&mut rx, "v2").await;
        assert_eq!(sets.len(), 1);
    }

    #[tokio::test]
    async fn test_sibling_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemaps.toml");
        std::fs::write(&path, "[[sets]]\nid = \"v0\"\n").unwrap();

        let (watcher, mut rx) = SitemapWatcher::new(&path, Duration::from_millis(100));
        let _guard = watcher.run().unwrap();

        std::fs::write(dir.path().join("other.toml"), "[[sets]]\nid = \"other\"\n").unwrap();
        let delivered = tokio::time::timeout(Duration::from_millis(500), rx.recv()).await;
        assert!(delivered.is_err());
    }
}
