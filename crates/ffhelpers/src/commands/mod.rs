pub mod close;
pub mod exists;
pub mod launch;
pub mod locales;

use ffhelpers_core::config::Config;
use ffhelpers_core::display::{PORT_ENV, resolve_port};
use ffhelpers_core::{DisplayTarget, log_debug};

/// Builds the display target from the host name, `FF_XPORT`, and config.
pub fn display_target(config: &Config) -> DisplayTarget {
    let env = std::env::var(PORT_ENV).ok();
    let port = resolve_port(env.as_deref(), config.display.port);
    let target = DisplayTarget::new(ffhelpers_windows::system::computer_name(), port);
    log_debug!("display window title: {}", target.title());
    target
}

/// Sleeps for the configured settle delay.
///
/// VcXsrv needs a moment after a client exits before its window is gone,
/// and again after the shutdown message before the port is free.
pub fn settle(config: &Config) {
    std::thread::sleep(config.settle_delay());
}
