// colorsh/src/logger.rs
//! Logger bootstrap for the colorsh binary.
//!
//! Respects `RUST_LOG` by default; `--debug` and `--quiet` override it for
//! the colorsh crates only.

use env_logger::Builder;
use log::LevelFilter;

/// Initializes the global logger. Passing a level pins both colorsh crates
/// to it; `None` leaves the environment configuration in charge.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    if let Some(level) = level {
        builder
            .filter_module("colorsh", level)
            .filter_module("colorsh_core", level);
    }
    builder.format_timestamp(None);
    // Integration tests may initialize more than once; later calls are no-ops.
    let _ = builder.try_init();
}
