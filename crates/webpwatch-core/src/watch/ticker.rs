//! What the watcher waits on between two scans.
//!
//! Change detection is always decided by diffing snapshots; a ticker only
//! decides *when* the next scan happens.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};

use crate::error::{CoreError, CoreResult};

/// Fixed delay between two scans of the input tree.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

const DEBOUNCE: Duration = Duration::from_millis(200);

/// Blocks until the next scan is due.
pub trait Ticker {
    fn wait(&mut self);
}

/// Sleeps a fixed interval between scans.
#[derive(Debug, Clone, Copy)]
pub struct PollTicker {
    interval: Duration,
}

impl PollTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for PollTicker {
    fn default() -> Self {
        Self::new(POLL_INTERVAL)
    }
}

impl Ticker for PollTicker {
    fn wait(&mut self) {
        std::thread::sleep(self.interval);
    }
}

/// Wakes early when the filesystem reports activity below the watched root,
/// but never waits longer than the poll interval.
pub struct EventTicker {
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<()>,
    interval: Duration,
}

impl EventTicker {
    /// Starts a recursive watch on `root`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Watch`] if the platform watcher cannot be
    /// created or `root` cannot be watched.
    pub fn new(root: &Path) -> CoreResult<Self> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(
            DEBOUNCE,
            move |result: Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>| {
                match result {
                    Ok(events) => {
                        if events
                            .iter()
                            .any(|e| matches!(e.kind, DebouncedEventKind::Any))
                        {
                            let _ = tx.send(());
                        }
                    }
                    Err(e) => tracing::warn!("filesystem watch error: {e}"),
                }
            },
        )
        .map_err(|e| CoreError::Watch(e.to_string()))?;

        debouncer
            .watcher()
            .watch(root, notify::RecursiveMode::Recursive)
            .map_err(|e| CoreError::Watch(e.to_string()))?;

        Ok(Self {
            _debouncer: debouncer,
            rx,
            interval: POLL_INTERVAL,
        })
    }
}

impl Ticker for EventTicker {
    fn wait(&mut self) {
        match self.rx.recv_timeout(self.interval) {
            Ok(()) => tracing::trace!("woken by filesystem event"),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => std::thread::sleep(self.interval),
        }
        // Collapse a burst of notifications into one scan.
        while self.rx.try_recv().is_ok() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Instant;
    use tempfile::TempDir;

    #[test]
    fn poll_ticker_sleeps_interval() {
        let mut ticker = PollTicker::new(Duration::from_millis(20));
        let started = Instant::now();
        ticker.wait();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn poll_ticker_default_is_one_second() {
        assert_eq!(PollTicker::default().interval, Duration::from_secs(1));
    }

    #[test]
    fn event_ticker_starts_on_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(EventTicker::new(tmp.path()).is_ok());
    }

    #[test]
    fn event_ticker_missing_root_errors() {
        let tmp = TempDir::new().unwrap();
        let result = EventTicker::new(&tmp.path().join("missing"));
        assert!(matches!(result, Err(CoreError::Watch(_))));
    }

    #[test]
    fn event_ticker_waits_at_most_interval() {
        let tmp = TempDir::new().unwrap();
        let mut ticker = EventTicker::new(tmp.path()).unwrap();
        ticker.interval = Duration::from_millis(50);

        let started = Instant::now();
        ticker.wait();
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn event_ticker_wakes_on_nested_change() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        let mut ticker = EventTicker::new(tmp.path()).unwrap();
        ticker.interval = Duration::from_secs(5);

        fs::write(tmp.path().join("sub").join("new.png"), "").unwrap();

        let started = Instant::now();
        ticker.wait();
        assert!(
            started.elapsed() < Duration::from_secs(5),
            "should be woken by the file creation"
        );
    }
}
