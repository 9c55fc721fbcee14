//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use webpwatch_core::config::settings::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use webpwatch_core::{RunConfig, RunMode, TriggerKind};

#[derive(Debug, Parser)]
#[command(name = "webpwatch")]
#[command(about = "Monitor directory and convert images to .webp format")]
pub struct Args {
    /// Directory to monitor for images
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory to save converted .webp images
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Convert existing files immediately without monitoring
    #[arg(long)]
    pub convert_now: bool,

    /// Wake on filesystem notifications instead of waiting the full poll interval
    #[arg(long)]
    pub watch_events: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_spinner: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            input_dir: args.input_dir,
            output_dir: args.output_dir,
            mode: if args.convert_now {
                RunMode::ConvertNow
            } else {
                RunMode::Watch
            },
            trigger: if args.watch_events {
                TriggerKind::Events
            } else {
                TriggerKind::Poll
            },
            spinner: !args.no_spinner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["webpwatch"]).unwrap();
        assert_eq!(args.log_level(), tracing::Level::WARN);

        let config = RunConfig::from(args);
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn convert_now_with_custom_dirs() {
        let args = Args::try_parse_from([
            "webpwatch",
            "--input-dir",
            "photos",
            "--output-dir",
            "web",
            "--convert-now",
        ])
        .unwrap();

        let config = RunConfig::from(args);
        assert_eq!(config.input_dir, PathBuf::from("photos"));
        assert_eq!(config.output_dir, PathBuf::from("web"));
        assert_eq!(config.mode, RunMode::ConvertNow);
    }

    #[test]
    fn optional_flags() {
        let args = Args::try_parse_from(["webpwatch", "--watch-events", "--no-spinner", "-vv"])
            .unwrap();
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        let config = RunConfig::from(args);
        assert_eq!(config.trigger, TriggerKind::Events);
        assert!(!config.spinner);
        assert_eq!(config.mode, RunMode::Watch);
    }

    #[test]
    fn verbosity_saturates_at_trace() {
        let args = Args::try_parse_from(["webpwatch", "-vvvvv"]).unwrap();
        assert_eq!(args.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["webpwatch", "--quality", "80"]).is_err());
    }
}
