//! Logger setup for the command-line binary

use log::LevelFilter;
use std::env;

/// Initialize `env_logger` once.
///
/// Logs at `Debug` when `verbose` is set, `Warn` otherwise. An explicit
/// `RUST_LOG` takes precedence over both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second initialization (e.g. from tests) is not an error worth surfacing
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
