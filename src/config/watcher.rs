use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;
use tracing::{error, info, warn};

const DEBOUNCE: Duration = Duration::from_millis(100);

/// Watches the values and metadata files and reports when they change.
///
/// Parent directories are watched rather than the files themselves so that
/// editors which save by rename keep triggering events.
pub struct InputWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    targets: Vec<PathBuf>,
}

impl InputWatcher {
    pub fn new(paths: &[PathBuf]) -> Result<Self> {
        let (tx, rx) = channel();

        // The notification back-end is selected based on the platform.
        let mut watcher = RecommendedWatcher::new(tx, Config::default())?;

        let mut targets = Vec::new();
        let mut dirs: Vec<PathBuf> = Vec::new();
        for path in paths {
            if !path.exists() {
                warn!("Input path does not exist, skipping: {}", path.display());
                continue;
            }
            let target = std::fs::canonicalize(path)?;
            if let Some(dir) = target.parent() {
                if !dirs.iter().any(|d| d == dir) {
                    watcher.watch(dir, RecursiveMode::NonRecursive)?;
                    dirs.push(dir.to_path_buf());
                }
            }
            info!("Watching input: {}", target.display());
            targets.push(target);
        }

        if targets.is_empty() {
            anyhow::bail!("None of the input paths exist; nothing to watch");
        }

        Ok(Self {
            _watcher: watcher,
            rx,
            targets,
        })
    }

    /// Block, calling `on_change` once per burst of relevant events, until the
    /// event channel closes
    pub fn run<F>(self, mut on_change: F)
    where
        F: FnMut(),
    {
        loop {
            match self.rx.recv() {
                Ok(Ok(event)) => {
                    if !self.touches_targets(&event) {
                        continue;
                    }
                    // Debounce slightly by waiting, then drop the rest of the burst
                    std::thread::sleep(DEBOUNCE);
                    while self.rx.try_recv().is_ok() {}
                    info!("Input change detected, re-running transform...");
                    on_change();
                }
                Ok(Err(e)) => error!("Watch error: {:?}", e),
                Err(e) => {
                    error!("Watch channel error: {:?}", e);
                    break;
                }
            }
        }
    }

    fn touches_targets(&self, event: &Event) -> bool {
        event
            .paths
            .iter()
            .any(|p| self.targets.iter().any(|t| same_file(t, p)))
    }
}

fn same_file(target: &Path, candidate: &Path) -> bool {
    target == candidate
        || std::fs::canonicalize(candidate)
            .map(|c| c == target)
            .unwrap_or(false)
}
