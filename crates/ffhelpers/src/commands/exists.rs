use ffhelpers_core::config::Config;
use ffhelpers_core::log_info;
use ffhelpers_core::mode::exists_exit_code;

/// Returns 0 if the display window exists, 1 otherwise. No delay.
pub fn execute(config: &Config) -> i32 {
    let target = super::display_target(config);
    let exists = ffhelpers_windows::display::find_display(&target).is_some();
    log_info!("display {}: exists={exists}", target.port);
    exists_exit_code(exists)
}
