use ffhelpers_core::config::Config;
use ffhelpers_core::{CloseDecision, log_error, log_info, log_warn};

/// Shuts the display down if no X client windows are left on it.
///
/// Always exits 0: a display that is busy, missing, or refuses the
/// message is not a failure from the caller's point of view.
pub fn execute(config: &Config) -> i32 {
    super::settle(config);

    let target = super::display_target(config);
    let display = ffhelpers_windows::display::find_display(&target);
    let windows = match display {
        Some(_) => match ffhelpers_windows::enumerate_windows() {
            Ok(windows) => windows,
            Err(e) => {
                log_error!("window enumeration failed, leaving display up: {e}");
                return 0;
            }
        },
        None => Vec::new(),
    };

    match ffhelpers_core::decide(display.as_ref(), &windows) {
        CloseDecision::NotRunning => {
            log_info!("display {} not running", target.port);
        }
        CloseDecision::Busy { clients } => {
            log_info!("display {} busy with {clients} client window(s)", target.port);
        }
        CloseDecision::Close => {
            let Some(display) = display else {
                return 0;
            };
            match ffhelpers_windows::display::post_shutdown(&display) {
                Ok(()) => {
                    log_info!("display {} asked to shut down", target.port);
                    super::settle(config);
                }
                Err(e) => log_warn!("shutdown message failed: {e}"),
            }
        }
    }
    0
}
