//! Poll-and-diff watch loop that re-renders the tree and reconverts on change.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::convert::codec::Codec;
use crate::convert::engine::{ConversionEngine, PassReport};
use crate::error::CoreResult;
use crate::fs::tree::print_tree;
use crate::watch::snapshot::{FileSnapshot, SnapshotDiff};
use crate::watch::ticker::Ticker;

/// Prompt shown before a conversion pass triggered by a change.
pub const CONVERT_PROMPT: &str = "Press enter to convert to webp...";

/// Asks the operator whether to go ahead with a conversion pass.
pub trait Confirm {
    /// Returns `true` to run the pass, `false` to skip it.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Where the watcher is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Polling; the last scan matched the stored snapshot.
    Idle,
    /// A scan differed; rendering, confirming and converting.
    ChangeDetected,
}

/// What one iteration of the watch loop did.
#[derive(Debug)]
pub enum TickOutcome {
    /// The file set was identical to the previous scan.
    Unchanged,
    /// The file set changed and a full pass ran.
    Converted { diff: SnapshotDiff, report: PassReport },
    /// The file set changed but the operator declined the pass.
    Declined { diff: SnapshotDiff },
}

/// Watches `input_root` and runs full conversion passes into `output_root`.
pub struct ChangeWatcher<C> {
    input_root: PathBuf,
    output_root: PathBuf,
    engine: ConversionEngine<C>,
    ticker: Box<dyn Ticker>,
    confirm: Box<dyn Confirm>,
    snapshot: FileSnapshot,
    state: WatchState,
}

impl<C: Codec> ChangeWatcher<C> {
    /// Creates a watcher, taking the baseline snapshot of `input_root`.
    pub fn new(
        input_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        engine: ConversionEngine<C>,
        ticker: Box<dyn Ticker>,
        confirm: Box<dyn Confirm>,
    ) -> Self {
        let input_root = input_root.into();
        let snapshot = FileSnapshot::capture(&input_root);
        tracing::debug!(files = snapshot.len(), "baseline snapshot taken");
        Self {
            input_root,
            output_root: output_root.into(),
            engine,
            ticker,
            confirm,
            snapshot,
            state: WatchState::Idle,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn snapshot(&self) -> &FileSnapshot {
        &self.snapshot
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    /// Announces the watch and prints the initial tree.
    pub fn start(&self, out: &mut dyn Write) -> CoreResult<()> {
        writeln!(
            out,
            "Monitoring '{}' directory for changes...\n",
            self.input_root.display()
        )?;
        print_tree(&self.input_root, out)
    }

    /// Waits one tick, rescans, and handles a difference if there is one.
    ///
    /// On a difference the stored snapshot is replaced before asking for
    /// confirmation, so a declined or failed pass does not re-trigger on the
    /// next tick. Confirmed passes cover the whole tree, not only the diff.
    pub fn poll_once(&mut self, out: &mut dyn Write) -> CoreResult<TickOutcome> {
        self.ticker.wait();

        let current = FileSnapshot::capture(&self.input_root);
        let diff = current.diff(&self.snapshot);
        if diff.is_empty() {
            self.state = WatchState::Idle;
            return Ok(TickOutcome::Unchanged);
        }

        self.state = WatchState::ChangeDetected;
        tracing::debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            "input tree changed"
        );

        writeln!(out, "\nChange detected! Refreshing directory tree...\n")?;
        print_tree(&self.input_root, out)?;
        self.snapshot = current;
        out.flush()?;

        let outcome = if self.confirm.confirm(CONVERT_PROMPT) {
            let report = self
                .engine
                .run_pass(&self.input_root, &self.output_root, out)?;
            TickOutcome::Converted { diff, report }
        } else {
            tracing::info!("conversion declined");
            TickOutcome::Declined { diff }
        };

        writeln!(out, "Waiting for further changes...")?;
        self.state = WatchState::Idle;
        Ok(outcome)
    }

    /// Runs the watch loop until an unrecoverable error occurs.
    pub fn run(&mut self, out: &mut dyn Write) -> CoreResult<()> {
        self.start(out)?;
        loop {
            self.poll_once(out)?;
        }
    }
}
