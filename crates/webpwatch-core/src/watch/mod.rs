//! Change detection for the input tree.
//!
//! [`snapshot::FileSnapshot`] records which files exist, [`ticker`] decides
//! when to look again, and [`watcher::ChangeWatcher`] ties both to the
//! conversion engine.

pub mod snapshot;
pub mod ticker;
pub mod watcher;

pub use snapshot::{FileSnapshot, SnapshotDiff};
pub use ticker::{EventTicker, PollTicker, Ticker, POLL_INTERVAL};
pub use watcher::{ChangeWatcher, Confirm, TickOutcome, WatchState, CONVERT_PROMPT};
