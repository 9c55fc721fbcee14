//! Dispatch between one-shot conversion and the watch loop.

use std::io::Write;

use anyhow::Context;
use webpwatch_core::{
    ensure_roots, ChangeWatcher, ConversionEngine, EventTicker, PollTicker, RunConfig, RunMode,
    Ticker, TriggerKind, WebpCodec,
};

use crate::prompt::LinePrompt;

/// Sets up both roots, then converts once or watches forever.
///
/// Operator-facing text goes to `out`. Watch mode only returns on error.
pub fn run(config: &RunConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    ensure_roots(&config.input_dir, &config.output_dir, out)
        .context("failed to set up working directories")?;

    let engine = ConversionEngine::new(WebpCodec, config.engine_options());

    match config.mode {
        RunMode::ConvertNow => {
            let report = engine
                .run_pass(&config.input_dir, &config.output_dir, out)
                .context("conversion pass failed")?;
            writeln!(
                out,
                "{} converted, {} failed.",
                report.converted_count(),
                report.failed_count()
            )?;
            Ok(())
        }
        RunMode::Watch => {
            let ticker: Box<dyn Ticker> = match config.trigger {
                TriggerKind::Poll => Box::new(PollTicker::default()),
                TriggerKind::Events => Box::new(
                    EventTicker::new(&config.input_dir)
                        .context("failed to start filesystem notifications")?,
                ),
            };
            let mut watcher = ChangeWatcher::new(
                &config.input_dir,
                &config.output_dir,
                engine,
                ticker,
                Box::new(LinePrompt::stdin()),
            );
            writeln!(out, "Press CTRL+C to exit.")?;
            watcher.run(out).context("watch loop stopped")?;
            Ok(())
        }
    }
}
