//! webpwatch — watch a folder and convert its images to WebP.
//!
//! This binary parses arguments, initialises logging, and runs the blocking
//! conversion or watch work while listening for Ctrl-C.

mod app;
mod cli;
mod prompt;

use clap::Parser;
use webpwatch_core::RunConfig;

use crate::cli::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the tree on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level())
        .init();

    let config = RunConfig::from(args);
    tracing::debug!(?config, "starting");

    let worker = tokio::task::spawn_blocking(move || {
        let mut out = std::io::stdout();
        app::run(&config, &mut out)
    });

    tokio::select! {
        joined = worker => {
            joined??;
            Ok(())
        }
        () = interrupted() => {
            println!("\nExiting program gracefully.");
            // The blocking worker may be parked on stdin; don't wait for it.
            std::process::exit(0);
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
