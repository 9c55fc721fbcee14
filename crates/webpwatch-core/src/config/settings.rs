//! Settings for one invocation of the tool.

use std::path::PathBuf;

/// Default input root, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "Input";
/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "Output";

/// Whether to convert once or keep watching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Convert the current contents once and exit.
    ConvertNow,
    /// Watch the input root and convert on every confirmed change.
    #[default]
    Watch,
}

/// What wakes the watcher between scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriggerKind {
    /// Fixed one-second polling.
    #[default]
    Poll,
    /// Filesystem notifications, bounded by the polling interval.
    Events,
}

/// Top-level settings.
///
/// All fields have defaults matching the command-line defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub mode: RunMode,
    pub trigger: TriggerKind,
    pub spinner: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            mode: RunMode::default(),
            trigger: TriggerKind::default(),
            spinner: true,
        }
    }
}

impl RunConfig {
    /// Engine options derived from these settings.
    pub fn engine_options(&self) -> crate::convert::EngineOptions {
        crate::convert::EngineOptions {
            spinner: self.spinner,
        }
    }
}
