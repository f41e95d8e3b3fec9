//! Shared pieces of the helper executables.
//!
//! Each binary in `src/bin` is a thin `clap` front end that loads the
//! config, starts logging, and hands off to one of the [`commands`].

#[cfg(windows)]
pub mod commands;

use ffhelpers_core::config::{self, Config};
use ffhelpers_core::log_info;

/// Loads the config and starts file logging for `program`.
pub fn startup(program: &'static str) -> Config {
    let config = config::load();
    ffhelpers_core::log::init(&config.log, program);
    log_info!(
        "{program} {} started (port {}, settle {} ms)",
        env!("CARGO_PKG_VERSION"),
        config.display.port,
        config.display.settle_ms
    );
    config
}

/// Message printed by the binaries on platforms without Win32.
pub const UNSUPPORTED: &str = "this helper only runs on Windows";
