//! Run configuration.
//!
//! There is no configuration file; [`settings::RunConfig`] is built by the
//! frontend from command-line flags.

pub mod settings;
